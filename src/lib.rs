pub mod algorithm;
pub mod component;
pub mod network;
pub mod sim;
pub mod utils;

/// Alternate paths examined per congested demand before giving up.
pub const MAX_ALTERNATES: usize = 3;
