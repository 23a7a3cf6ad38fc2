mod result;
pub mod session;
mod settings;

pub use result::*;
pub use session::*;
pub use settings::*;
