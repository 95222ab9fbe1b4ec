//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - PromptRequest / ComposedPrompt: composer input and output
//! - Message: output envelope
//! - ComponentInfo: component identity and I/O declarations

mod component;
mod message;
mod prompt;

pub use component::*;
pub use message::*;
pub use prompt::*;
