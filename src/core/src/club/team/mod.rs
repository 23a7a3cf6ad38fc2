pub mod builder;
pub mod team;

pub use builder::TeamBuilder;
pub use team::*;
