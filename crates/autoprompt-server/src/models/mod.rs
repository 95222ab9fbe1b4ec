//! Autoprompt API Models

mod compose;

pub use compose::*;
