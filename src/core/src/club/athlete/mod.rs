pub mod athlete;
pub mod builder;
mod position;
mod rating;
mod stats;

pub use athlete::*;
pub use builder::AthleteBuilder;
pub use position::*;
pub use rating::*;
pub use stats::*;
