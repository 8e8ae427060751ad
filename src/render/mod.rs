pub mod model;
pub mod style;

pub use model::*;
pub use style::*;
