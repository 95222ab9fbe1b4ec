//! Autoprompt API Routes
//!
//! - /autoprompt/compose - Prompt composition
//! - /autoprompt/options - Tone and model family option sets
//! - /autoprompt/component - Component input/output declarations

pub mod compose;
pub mod swagger;
