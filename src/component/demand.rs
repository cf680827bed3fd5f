/// A requested traffic flow between two routers. The rate is in kbps, the
/// same unit as link capacity; any human-entered unit is converted before
/// the engine sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Demand {
    pub src: String,
    pub dst: String,
    pub rate: u64,
}

impl Demand {
    pub fn new(src: &str, dst: &str, rate: u64) -> Self {
        Demand { src: src.to_owned(), dst: dst.to_owned(), rate }
    }
}
