//! Components
//!
//! Concrete [`Component`](crate::ports::Component) implementations.

pub mod auto_system_prompt;

pub use auto_system_prompt::AutoSystemPrompt;
