use std::f64::INFINITY as INF;
use std::fmt;

use ordered_float::OrderedFloat;

use super::load::LoadMap;
use crate::network::Topology;


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    High,
    Overloaded,
}

impl Status {
    fn from_ratio(ratio: f64) -> Self {
        if ratio > 1.0 {
            Status::Overloaded
        } else if ratio > 0.7 {
            Status::High
        } else {
            Status::Ok
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::High => write!(f, "HIGH"),
            Status::Overloaded => write!(f, "OVERLOADED"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LinkUtilization {
    pub ends: (String, String),
    pub capacity: u64,
    pub load: u64,
    pub ratio: f64,
    pub status: Status,
}

/// Classifies every link's load against its capacity. Zero capacity reads
/// as an infinite ratio instead of dividing by zero. Rows come back sorted
/// by descending ratio; the stable sort runs over rows in link-id order, so
/// equal ratios keep that order.
pub fn analyze(topology: &Topology, loads: &LoadMap) -> Vec<LinkUtilization> {
    let mut rows: Vec<_> = topology.links()
        .map(|(id, link)| {
            let load = loads.load(id);
            let ratio = match link.capacity {
                0 => INF,
                capacity => load as f64 / capacity as f64,
            };
            let (end0, end1) = id.ends();
            LinkUtilization {
                ends: (end0.to_owned(), end1.to_owned()),
                capacity: link.capacity,
                load,
                ratio,
                status: Status::from_ratio(ratio),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.ends.cmp(&b.ends));
    rows.sort_by(|a, b| OrderedFloat(b.ratio).cmp(&OrderedFloat(a.ratio)));
    rows
}
