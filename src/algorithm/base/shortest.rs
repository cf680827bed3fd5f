use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::network::{LinkId, Path, Topology};


/// Hop-count shortest path query with an explicit tie-break rule: among all
/// minimum-hop paths, the lexicographically smallest node sequence wins.
/// Nodes and links marked ignored are treated as absent from the graph.
#[derive(Default)]
pub struct Bfs {
    ignored_nodes: HashSet<String>,
    ignored_links: HashSet<LinkId>,
}

impl Bfs {
    pub fn ignore(&mut self, nodes: HashSet<String>, links: HashSet<LinkId>) {
        self.ignored_nodes = nodes;
        self.ignored_links = links;
    }
    pub fn has_path(&self, graph: &Topology, src: &str, dst: &str) -> bool {
        self.shortest_path(graph, src, dst).is_some()
    }
    pub fn shortest_path(&self, graph: &Topology, src: &str, dst: &str) -> Option<Path> {
        if !graph.contains_node(src) || !graph.contains_node(dst) {
            return None;
        }
        if src == dst {
            return Some(vec![src.to_owned()]);
        }
        let dist = self.distances(graph, dst);
        let mut remain = *dist.get(src)?;
        let mut path = vec![src.to_owned()];
        // Walk toward dst, always into the smallest neighbor on a shortest
        // continuation; sorted neighbor lists make the pick lexicographic.
        while remain > 0 {
            let here = path.last().expect("path never empty").clone();
            let next = graph.neighbors(&here)
                .filter(|next| !self.skips(&here, next.as_str()))
                .find(|next| dist.get(next.as_str()) == Some(&(remain - 1)))
                .expect("distance labels admit a next hop")
                .clone();
            path.push(next);
            remain -= 1;
        }
        Some(path)
    }
    /// Hop distance to `dst` for every reachable, non-ignored node.
    fn distances(&self, graph: &Topology, dst: &str) -> HashMap<String, usize> {
        let mut dist = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(dst.to_owned(), 0);
        queue.push_back(dst.to_owned());
        while let Some(here) = queue.pop_front() {
            let hops = dist[&here];
            for next in graph.neighbors(&here) {
                if self.skips(&here, next) || dist.contains_key(next.as_str()) {
                    continue;
                }
                dist.insert(next.clone(), hops + 1);
                queue.push_back(next.clone());
            }
        }
        dist
    }
    fn skips(&self, here: &str, next: &str) -> bool {
        self.ignored_nodes.contains(next)
            || self.ignored_links.contains(&LinkId::new(here, next))
    }
}
