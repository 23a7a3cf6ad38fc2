mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;
