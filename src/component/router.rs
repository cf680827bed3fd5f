use tracing::warn;

use super::demand::Demand;
use super::load::LoadMap;
use crate::algorithm::Bfs;
use crate::network::Topology;
use crate::utils::error::Error;


/// Routes every demand over its hop-count shortest path (lexicographically
/// smallest on ties) and accumulates the rates into a fresh load map.
///
/// Self-demands are skipped. Demands with no path are dropped with a
/// warning and contribute nothing. A zero-rate demand is a usage error and
/// aborts the whole call before any routing happens.
pub fn route(topology: &Topology, demands: &[Demand]) -> Result<LoadMap, Error> {
    for demand in demands {
        if demand.rate == 0 {
            return Err(Error::ZeroRateDemand(demand.src.clone(), demand.dst.clone()));
        }
    }
    let mut loads = LoadMap::new(topology);
    let bfs = Bfs::default();
    for demand in demands {
        if demand.src == demand.dst {
            continue;
        }
        match bfs.shortest_path(topology, &demand.src, &demand.dst) {
            Some(path) => loads.accumulate(&path, demand.rate),
            None => warn!(
                "no path between {} and {}, demand of {} kbps dropped",
                demand.src, demand.dst, demand.rate,
            ),
        }
    }
    Ok(loads)
}


#[cfg(test)]
mod tests {
    use super::*;
    fn diamond() -> Topology {
        let mut topology = Topology::new();
        topology.add_link("A", "B", 10).unwrap();
        topology.add_link("B", "C", 10).unwrap();
        topology.add_link("A", "D", 10).unwrap();
        topology.add_link("D", "C", 10).unwrap();
        topology
    }
    #[test]
    fn it_loads_every_link_on_the_chosen_path() {
        let topology = diamond();
        let demands = vec![Demand::new("A", "C", 12), Demand::new("A", "B", 5)];
        let loads = route(&topology, &demands).unwrap();
        assert_eq!(loads.get("A", "B"), Some(17));
        assert_eq!(loads.get("B", "C"), Some(12));
        assert_eq!(loads.get("A", "D"), Some(0));
        assert_eq!(loads.get("D", "C"), Some(0));
    }
    #[test]
    fn it_conserves_load_against_reconstructed_paths() {
        let topology = diamond();
        let demands = vec![
            Demand::new("A", "C", 12),
            Demand::new("B", "D", 3),
            Demand::new("C", "A", 4),
        ];
        let loads = route(&topology, &demands).unwrap();
        let bfs = Bfs::default();
        let mut expected = LoadMap::new(&topology);
        for demand in &demands {
            let path = bfs.shortest_path(&topology, &demand.src, &demand.dst).unwrap();
            expected.accumulate(&path, demand.rate);
        }
        for (id, _) in topology.links() {
            assert_eq!(loads.load(id), expected.load(id));
        }
    }
    #[test]
    fn it_yields_all_zeros_without_demands() {
        let loads = route(&diamond(), &[]).unwrap();
        assert_eq!(loads.total(), 0);
    }
    #[test]
    fn it_skips_self_demands() {
        let demands = vec![Demand::new("A", "A", 100)];
        let loads = route(&diamond(), &demands).unwrap();
        assert_eq!(loads.total(), 0);
    }
    #[test]
    fn it_drops_unreachable_demands() {
        let mut topology = diamond();
        topology.add_link("X", "Y", 10).unwrap();
        let demands = vec![Demand::new("X", "A", 5), Demand::new("A", "C", 6)];
        let loads = route(&topology, &demands).unwrap();
        assert_eq!(loads.get("X", "Y"), Some(0));
        assert_eq!(loads.get("A", "B"), Some(6));
    }
    #[test]
    fn it_rejects_zero_rate_demands() {
        let demands = vec![Demand::new("A", "C", 0)];
        let result = route(&diamond(), &demands);
        assert!(matches!(result, Err(Error::ZeroRateDemand(_, _))));
    }
}
