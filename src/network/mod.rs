mod topology;

pub use topology::{Link, LinkId, Topology};

pub type Path = Vec<String>;
