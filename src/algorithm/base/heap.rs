use std::cmp::Reverse;

use priority_queue::PriorityQueue;

use crate::network::Path;


pub type MyMinHeap = PriorityQueue<Path, Priority>;


/// Orders candidate paths by hop count first, then by node sequence, so
/// popping is deterministic even among equal-length paths.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(Reverse<(usize, Path)>);

impl From<&Path> for Priority {
    fn from(path: &Path) -> Self {
        Self(Reverse((path.len(), path.clone())))
    }
}
