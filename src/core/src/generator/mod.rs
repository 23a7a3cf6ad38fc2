mod generator;
mod pools;

pub use generator::*;
pub use pools::{NamePool, NamePools};
