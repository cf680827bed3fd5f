use std::fmt;

use hashbrown::HashMap;

use crate::utils::error::Error;


/// Unordered pair of node ids, normalized so the lexicographically smaller
/// endpoint comes first. `LinkId::new("B", "A") == LinkId::new("A", "B")`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(String, String);

impl LinkId {
    pub fn new(end0: &str, end1: &str) -> Self {
        match end0 <= end1 {
            true => LinkId(end0.to_owned(), end1.to_owned()),
            false => LinkId(end1.to_owned(), end0.to_owned()),
        }
    }
    pub fn ends(&self) -> (&str, &str) {
        (&self.0, &self.1)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

#[derive(Clone, Debug)]
pub struct Link {
    /// Canonical capacity in kbps; zero means the link is unusable.
    pub capacity: u64,
}

#[derive(Clone, Debug, Default)]
struct Node {
    neighbors: Vec<String>,
}

/// Simple undirected graph of routers. At most one link per node pair;
/// neighbor lists are kept sorted so path queries are deterministic.
#[derive(Clone, Debug, Default)]
pub struct Topology {
    nodes: HashMap<String, Node>,
    links: HashMap<LinkId, Link>,
}

impl Topology {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }
    pub fn add_node(&mut self, id: &str) {
        self.nodes.entry(id.to_owned()).or_default();
    }
    /// Adds both endpoints if missing. Re-adding an existing link replaces
    /// its capacity.
    pub fn add_link(&mut self, end0: &str, end1: &str, capacity: u64) -> Result<(), Error> {
        if end0 == end1 {
            return Err(Error::SelfLoop(end0.to_owned()));
        }
        self.add_node(end0);
        self.add_node(end1);
        self.links.insert(LinkId::new(end0, end1), Link { capacity });
        self.attach(end0, end1);
        self.attach(end1, end0);
        Ok(())
    }
    fn attach(&mut self, node: &str, neighbor: &str) {
        let neighbors = &mut self.nodes.get_mut(node)
            .expect("node not found")
            .neighbors;
        let neighbor = neighbor.to_owned();
        if let Err(pos) = neighbors.binary_search(&neighbor) {
            neighbors.insert(pos, neighbor);
        }
    }
    /// Neighbors in ascending id order; empty for unknown nodes.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = &String> + '_ {
        self.nodes.get(id)
            .map(|node| node.neighbors.iter())
            .into_iter()
            .flatten()
    }
    pub fn link(&self, end0: &str, end1: &str) -> Option<&Link> {
        self.links.get(&LinkId::new(end0, end1))
    }
    pub fn links(&self) -> impl Iterator<Item = (&LinkId, &Link)> + '_ {
        self.links.iter()
    }
    /// Copy of this topology with one link removed; `self` is untouched.
    pub fn without_link(&self, end0: &str, end1: &str) -> Result<Topology, Error> {
        let id = LinkId::new(end0, end1);
        if !self.links.contains_key(&id) {
            return Err(Error::LinkNotFound(end0.to_owned(), end1.to_owned()));
        }
        let mut degraded = self.clone();
        degraded.links.remove(&id);
        degraded.detach(end0, end1);
        degraded.detach(end1, end0);
        Ok(degraded)
    }
    fn detach(&mut self, node: &str, neighbor: &str) {
        let neighbors = &mut self.nodes.get_mut(node)
            .expect("node not found")
            .neighbors;
        if let Ok(pos) = neighbors.binary_search(&neighbor.to_owned()) {
            neighbors.remove(pos);
        }
    }
    /// Links whose capacity makes utilization undefined, in id order.
    pub fn zero_capacity_links(&self) -> Vec<LinkId> {
        let mut degenerate: Vec<_> = self.links.iter()
            .filter(|(_, link)| link.capacity == 0)
            .map(|(id, _)| id.clone())
            .collect();
        degenerate.sort();
        degenerate
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_normalizes_link_ids() {
        assert_eq!(LinkId::new("R2", "R1"), LinkId::new("R1", "R2"));
        assert_eq!(LinkId::new("R2", "R1").ends(), ("R1", "R2"));
    }
    #[test]
    fn it_keeps_neighbors_sorted() {
        let mut topology = Topology::new();
        topology.add_link("B", "D", 10).unwrap();
        topology.add_link("B", "A", 10).unwrap();
        topology.add_link("B", "C", 10).unwrap();
        let neighbors: Vec<_> = topology.neighbors("B").cloned().collect();
        assert_eq!(neighbors, vec!["A", "C", "D"]);
    }
    #[test]
    fn it_lookups_links_by_either_order() {
        let mut topology = Topology::new();
        topology.add_link("A", "B", 10).unwrap();
        assert_eq!(topology.link("A", "B").map(|l| l.capacity), Some(10));
        assert_eq!(topology.link("B", "A").map(|l| l.capacity), Some(10));
        assert!(topology.link("A", "C").is_none());
    }
    #[test]
    fn it_replaces_capacity_on_duplicate_links() {
        let mut topology = Topology::new();
        topology.add_link("A", "B", 10).unwrap();
        topology.add_link("B", "A", 20).unwrap();
        assert_eq!(topology.link_count(), 1);
        assert_eq!(topology.link("A", "B").map(|l| l.capacity), Some(20));
        assert_eq!(topology.neighbors("A").count(), 1);
    }
    #[test]
    fn it_rejects_self_loops() {
        let mut topology = Topology::new();
        let result = topology.add_link("A", "A", 10);
        assert!(matches!(result, Err(Error::SelfLoop(_))));
    }
    #[test]
    fn it_removes_links_copy_on_write() {
        let mut topology = Topology::new();
        topology.add_link("A", "B", 10).unwrap();
        topology.add_link("B", "C", 10).unwrap();
        let degraded = topology.without_link("B", "C").unwrap();
        assert_eq!(degraded.link_count(), 1);
        assert_eq!(degraded.neighbors("B").count(), 1);
        assert_eq!(topology.link_count(), 2);
        assert_eq!(topology.neighbors("B").count(), 2);
    }
    #[test]
    fn it_rejects_removing_unknown_links() {
        let mut topology = Topology::new();
        topology.add_link("A", "B", 10).unwrap();
        let result = topology.without_link("A", "C");
        assert!(matches!(result, Err(Error::LinkNotFound(_, _))));
    }
    #[test]
    fn it_lists_zero_capacity_links() {
        let mut topology = Topology::new();
        topology.add_link("A", "B", 10).unwrap();
        topology.add_link("B", "C", 0).unwrap();
        assert_eq!(topology.zero_capacity_links(), vec![LinkId::new("B", "C")]);
    }
}
