#[macro_use]
mod macros;

mod class_names;
mod config;
mod errors;
#[cfg(feature = "ssr")]
mod logger;

pub use class_names::*;
pub use config::*;
pub use errors::*;
#[cfg(feature = "ssr")]
pub use logger::*;
