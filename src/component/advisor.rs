use hashbrown::HashSet;

use super::demand::Demand;
use super::load::{link_set, LoadMap};
use crate::algorithm::{Bfs, SimplePaths};
use crate::network::{LinkId, Path, Topology};


#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advice {
    /// First enumerated simple path whose links avoid every overloaded link.
    Alternate(Path),
    /// No clean candidate within the search bound; the congestion needs a
    /// capacity upgrade or a policy-based split instead of a reroute.
    NoCleanAlternate,
}

impl Advice {
    pub fn suggestion(&self) -> &'static str {
        match self {
            Advice::Alternate(_) => "activate secondary path for lower-priority traffic",
            Advice::NoCleanAlternate => "consider capacity upgrade or policy-based split",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Recommendation {
    pub demand: Demand,
    pub primary: Path,
    pub advice: Advice,
}

/// Advises reroutes for the demands that cross overloaded links. Primary
/// paths are recomputed with the router's own tie-break rather than reused
/// from a cache, so the advisor also works when invoked standalone.
/// Alternates come from the deterministic simple-path enumeration, at most
/// `max_alternates` of them examined per demand. Purely advisory: the load
/// map is read, never written.
pub fn recommend(topology: &Topology, demands: &[Demand], loads: &LoadMap,
                 max_alternates: usize) -> Vec<Recommendation> {
    let overloaded = overloaded_links(topology, loads);
    if overloaded.is_empty() {
        return vec![];
    }
    let bfs = Bfs::default();
    let mut recommendations = vec![];
    for demand in demands {
        if demand.src == demand.dst {
            continue;
        }
        let primary = match bfs.shortest_path(topology, &demand.src, &demand.dst) {
            Some(path) => path,
            None => continue,
        };
        if link_set(&primary).is_disjoint(&overloaded) {
            continue;
        }
        let advice = SimplePaths::new(topology, &demand.src, &demand.dst)
            .filter(|path| *path != primary)
            .take(max_alternates)
            .find(|path| link_set(path).is_disjoint(&overloaded))
            .map_or(Advice::NoCleanAlternate, Advice::Alternate);
        recommendations.push(Recommendation {
            demand: demand.clone(),
            primary,
            advice,
        });
    }
    recommendations
}

/// Links loaded strictly past their capacity; zero capacity counts as
/// overloaded whenever the link exists, matching the infinite-ratio rule.
fn overloaded_links(topology: &Topology, loads: &LoadMap) -> HashSet<LinkId> {
    topology.links()
        .filter(|(id, link)| link.capacity == 0 || loads.load(id) > link.capacity)
        .map(|(id, _)| id.clone())
        .collect()
}
