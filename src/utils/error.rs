use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("link {0}-{1} not found in topology")]
    LinkNotFound(String, String),
    #[error("link would connect node {0} to itself")]
    SelfLoop(String),
    #[error("demand {0}->{1} requests a rate of zero")]
    ZeroRateDemand(String, String),
}
