mod advisor;
mod analyzer;
mod demand;
mod fault;
mod load;
mod router;

pub use advisor::{recommend, Advice, Recommendation};
pub use analyzer::{analyze, LinkUtilization, Status};
pub use demand::Demand;
pub use fault::{assess_impact, inject_fault, FaultImpact};
pub use load::LoadMap;
pub use router::route;
