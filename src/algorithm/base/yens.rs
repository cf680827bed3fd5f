use hashbrown::HashSet;

use super::heap::MyMinHeap;
use super::shortest::Bfs;
use crate::network::{LinkId, Path, Topology};


/// Lazily enumerates simple paths between two nodes in non-decreasing hop
/// count, equal lengths resolved by node-sequence order (Yen's algorithm
/// with the spur heap keyed on `(length, sequence)`). Callers bound the
/// search by taking only as many paths as they need.
pub struct SimplePaths<'a> {
    graph: &'a Topology,
    src: String,
    dst: String,
    yielded: Vec<Path>,
    candidates: MyMinHeap,
    exhausted: bool,
}

impl<'a> SimplePaths<'a> {
    pub fn new(graph: &'a Topology, src: &str, dst: &str) -> Self {
        Self {
            graph,
            src: src.to_owned(),
            dst: dst.to_owned(),
            yielded: vec![],
            candidates: MyMinHeap::new(),
            exhausted: false,
        }
    }
    /// Expand spurs off the most recently yielded path. For each spur node,
    /// edges continuing any yielded path with the same root prefix are
    /// ignored, along with the root nodes themselves, so every candidate is
    /// a new simple path.
    fn expand(&mut self) {
        let prev = self.yielded.last()
            .expect("expand follows at least one yield")
            .clone();
        for i in 0..prev.len() - 1 {
            let spur = &prev[i];
            let ignored_links: HashSet<LinkId> = self.yielded.iter()
                .filter(|path| path.len() > i + 1 && path[..=i] == prev[..=i])
                .map(|path| LinkId::new(&path[i], &path[i + 1]))
                .collect();
            let ignored_nodes: HashSet<String> = prev[..i].iter().cloned().collect();

            let mut bfs = Bfs::default();
            bfs.ignore(ignored_nodes, ignored_links);
            if let Some(spur_path) = bfs.shortest_path(self.graph, spur, &self.dst) {
                let mut total = prev[..i].to_vec();
                total.extend(spur_path);
                let priority = (&total).into();
                self.candidates.push(total, priority);
            }
        }
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = Path;
    fn next(&mut self) -> Option<Path> {
        if self.exhausted {
            return None;
        }
        if self.yielded.is_empty() {
            let bfs = Bfs::default();
            return match bfs.shortest_path(self.graph, &self.src, &self.dst) {
                Some(path) if path.len() >= 2 => {
                    self.yielded.push(path.clone());
                    Some(path)
                }
                _ => {
                    self.exhausted = true;
                    None
                }
            };
        }
        self.expand();
        match self.candidates.pop() {
            Some((path, _)) => {
                self.yielded.push(path.clone());
                Some(path)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    fn path(nodes: &[&str]) -> Path {
        nodes.iter().map(|&n| n.to_owned()).collect()
    }
    fn diamond() -> Topology {
        let mut topology = Topology::new();
        topology.add_link("A", "B", 10).unwrap();
        topology.add_link("B", "C", 10).unwrap();
        topology.add_link("A", "D", 10).unwrap();
        topology.add_link("D", "C", 10).unwrap();
        topology
    }
    #[test]
    fn it_enumerates_diamond_paths_in_order() {
        let topology = diamond();
        let paths: Vec<_> = SimplePaths::new(&topology, "A", "C").collect();
        assert_eq!(paths, vec![path(&["A", "B", "C"]), path(&["A", "D", "C"])]);
    }
    #[test]
    fn it_orders_by_length_then_sequence() {
        let mut topology = diamond();
        topology.add_link("B", "D", 10).unwrap();
        let paths: Vec<_> = SimplePaths::new(&topology, "A", "C").collect();
        assert_eq!(paths, vec![
            path(&["A", "B", "C"]),
            path(&["A", "D", "C"]),
            path(&["A", "B", "D", "C"]),
            path(&["A", "D", "B", "C"]),
        ]);
    }
    #[test]
    fn it_short_circuits_without_materializing() {
        let mut topology = diamond();
        topology.add_link("B", "D", 10).unwrap();
        let first = SimplePaths::new(&topology, "A", "C").next();
        assert_eq!(first, Some(path(&["A", "B", "C"])));
    }
    #[test]
    fn it_yields_nothing_for_unreachable_pairs() {
        let mut topology = diamond();
        topology.add_node("Z");
        assert_eq!(SimplePaths::new(&topology, "A", "Z").next(), None);
        assert_eq!(SimplePaths::new(&topology, "A", "A").next(), None);
    }
}
