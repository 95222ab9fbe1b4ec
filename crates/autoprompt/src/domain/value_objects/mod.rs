//! Value Objects
//!
//! Closed option sets the composer is driven by.

mod model_family;
mod tone;

pub use model_family::*;
pub use tone::*;
