pub use feature::*;
pub use graphic::*;
pub use layout::*;
pub use registry::*;
pub use rich_text::*;

mod feature;
mod graphic;
mod layout;
mod registry;
mod rich_text;
