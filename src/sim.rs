use std::fmt::Write;

use crate::component::{analyze, assess_impact, inject_fault, recommend, route};
use crate::component::{Advice, Demand, FaultImpact, LinkUtilization, LoadMap,
                       Recommendation, Status};
use crate::network::Topology;
use crate::utils::error::Error;


/// Runs the whole pipeline over one topology and demand set: route the
/// demands, classify link utilization, and advise reroutes around whatever
/// came out overloaded. The topology and demands are fixed at construction;
/// each run owns its load map.
pub struct Simulator {
    pub topology: Topology,
    pub demands: Vec<Demand>,
    pub max_alternates: usize,
}

pub struct Report {
    pub loads: LoadMap,
    pub utilization: Vec<LinkUtilization>,
    pub recommendations: Vec<Recommendation>,
}

pub struct FaultReport {
    pub report: Report,
    pub impacts: Vec<FaultImpact>,
}

impl Simulator {
    pub fn new(topology: Topology, demands: Vec<Demand>) -> Self {
        let max_alternates = crate::MAX_ALTERNATES;
        Self { topology, demands, max_alternates }
    }
    pub fn run(&self) -> Result<Report, Error> {
        self.run_on(&self.topology)
    }
    /// Re-runs the pipeline on a copy of the topology with one link failed,
    /// and appends the per-demand connectivity impact.
    pub fn run_with_fault(&self, end0: &str, end1: &str) -> Result<FaultReport, Error> {
        let degraded = inject_fault(&self.topology, end0, end1)?;
        let report = self.run_on(&degraded)?;
        let impacts = assess_impact(&self.topology, &degraded, &self.demands);
        Ok(FaultReport { report, impacts })
    }
    fn run_on(&self, topology: &Topology) -> Result<Report, Error> {
        let loads = route(topology, &self.demands)?;
        let utilization = analyze(topology, &loads);
        let recommendations = recommend(topology, &self.demands, &loads,
                                        self.max_alternates);
        Ok(Report { loads, utilization, recommendations })
    }
}

impl Report {
    pub fn render(&self) -> String {
        let mut msg = String::new();
        writeln!(msg, "=== Link Utilization ===").unwrap();
        for row in &self.utilization {
            writeln!(msg, "{:<6}-{:<6}  cap={:>8} kbps  load={:>8} kbps  util={:>7.2}%  {}",
                     row.ends.0, row.ends.1, row.capacity, row.load,
                     row.ratio * 100.0, row.status).unwrap();
        }
        writeln!(msg, "\n=== Load Balancing Recommendations ===").unwrap();
        let overloaded = self.utilization.iter()
            .any(|row| row.status == Status::Overloaded);
        if !overloaded {
            writeln!(msg, "No overloaded links. No action needed.").unwrap();
        }
        for recommendation in &self.recommendations {
            let demand = &recommendation.demand;
            match &recommendation.advice {
                Advice::Alternate(path) => writeln!(msg,
                    "{}->{} ({} kbps): activate secondary path {:?} for lower-priority traffic.",
                    demand.src, demand.dst, demand.rate, path).unwrap(),
                Advice::NoCleanAlternate => writeln!(msg,
                    "{}->{} ({} kbps): no clean alternate found. Consider capacity upgrade or policy-based split.",
                    demand.src, demand.dst, demand.rate).unwrap(),
            }
        }
        msg
    }
}

impl FaultReport {
    pub fn render(&self) -> String {
        let mut msg = self.report.render();
        writeln!(msg, "\n=== Connectivity Impact ===").unwrap();
        for impact in &self.impacts {
            let demand = &impact.demand;
            match &impact.path {
                None => writeln!(msg, "Traffic {}->{} ({} kbps) is DROPPED (no path).",
                                 demand.src, demand.dst, demand.rate).unwrap(),
                Some(path) if impact.rerouted => writeln!(msg,
                    "Traffic {}->{} rerouted via {:?}", demand.src, demand.dst, path).unwrap(),
                Some(_) => writeln!(msg, "Traffic {}->{} keeps its path",
                                    demand.src, demand.dst).unwrap(),
            }
        }
        msg
    }
}
