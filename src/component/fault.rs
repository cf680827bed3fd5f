use tracing::info;

use super::demand::Demand;
use crate::algorithm::Bfs;
use crate::network::{Path, Topology};
use crate::utils::error::Error;


/// Per-demand connectivity impact of a link failure.
#[derive(Clone, Debug)]
pub struct FaultImpact {
    pub demand: Demand,
    pub dropped: bool,
    pub rerouted: bool,
    pub path: Option<Path>,
}

/// New topology with the given link removed; the original is left intact.
/// Referencing a link that does not exist is a usage error.
pub fn inject_fault(topology: &Topology, end0: &str, end1: &str) -> Result<Topology, Error> {
    let degraded = topology.without_link(end0, end1)?;
    info!("simulating link failure: {}-{}", end0, end1);
    Ok(degraded)
}

/// Compares reachability before and after the failure: a demand is dropped
/// when no path remains, rerouted when its recomputed shortest path differs
/// from the pre-failure one.
pub fn assess_impact(before: &Topology, after: &Topology, demands: &[Demand])
        -> Vec<FaultImpact> {
    let bfs = Bfs::default();
    demands.iter()
        .filter(|demand| demand.src != demand.dst)
        .map(|demand| {
            let old = bfs.shortest_path(before, &demand.src, &demand.dst);
            match bfs.shortest_path(after, &demand.src, &demand.dst) {
                None => FaultImpact {
                    demand: demand.clone(),
                    dropped: true,
                    rerouted: false,
                    path: None,
                },
                Some(new) => FaultImpact {
                    demand: demand.clone(),
                    dropped: false,
                    rerouted: old.as_ref() != Some(&new),
                    path: Some(new),
                },
            }
        })
        .collect()
}
