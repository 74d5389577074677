//! Components of the documentation homepage

mod feature;
mod feature_section;
mod heading;

pub use feature::*;
pub use feature_section::*;
pub use heading::*;
