mod heap;

pub mod shortest;
pub mod yens;
