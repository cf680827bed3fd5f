mod base;

pub use base::shortest::Bfs;
pub use base::yens::SimplePaths;
