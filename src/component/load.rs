use hashbrown::{HashMap, HashSet};
use itertools::Itertools;

use crate::network::{LinkId, Topology};


/// Accumulated load per link, zero-initialized for every link in the
/// topology. Written only by the router during a single simulation run.
#[derive(Clone, Debug)]
pub struct LoadMap {
    loads: HashMap<LinkId, u64>,
}

impl LoadMap {
    pub fn new(topology: &Topology) -> Self {
        let loads = topology.links()
            .map(|(id, _)| (id.clone(), 0))
            .collect();
        LoadMap { loads }
    }
    /// Load on the link between two nodes; `None` for unknown links.
    pub fn get(&self, end0: &str, end1: &str) -> Option<u64> {
        self.loads.get(&LinkId::new(end0, end1)).cloned()
    }
    pub fn load(&self, id: &LinkId) -> u64 {
        self.loads.get(id).cloned().unwrap_or(0)
    }
    /// Adds `rate` to every link along the path.
    pub fn accumulate(&mut self, path: &[String], rate: u64) {
        for (end0, end1) in path.iter().tuple_windows() {
            *self.loads.entry(LinkId::new(end0, end1)).or_insert(0) += rate;
        }
    }
    pub fn total(&self) -> u64 {
        self.loads.values().sum()
    }
}

/// Unordered edge set of a node sequence.
pub fn link_set(path: &[String]) -> HashSet<LinkId> {
    path.iter()
        .tuple_windows()
        .map(|(end0, end1)| LinkId::new(end0, end1))
        .collect()
}
