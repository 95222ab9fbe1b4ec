//! Autoprompt Domain Library
//!
//! Builds system prompts for LLM applications from a goal, a keyword list,
//! a tone and a target model family.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: PromptRequest, ComposedPrompt, Message, ComponentInfo
//!   - `value_objects/`: Closed option sets (Tone, ModelFamily)
//!   - `services/`: The prompt composer
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): The `Component` trait a flow host drives
//!
//! - **Components** (`components/`): `AutoSystemPrompt`, the component
//!   wrapper that records its status after each run
//!
//! # Usage
//!
//! ```rust
//! use autoprompt::{compose, ModelFamily, PromptRequest, Tone};
//!
//! let request = PromptRequest::new("Translate English to French")
//!     .with_keywords("greetings, common phrases")
//!     .with_tone(Tone::Formal)
//!     .with_model_family(ModelFamily::OpenAI);
//!
//! let prompt = compose(&request);
//! assert!(prompt.text().starts_with("You are an AI assistant."));
//! assert_eq!(prompt.status, "Generated prompt for: Translate English to French...");
//! ```

pub mod components;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use components::AutoSystemPrompt;
pub use domain::{
    compose, format_keywords, parse_keywords, status_for, ComponentInfo, ComposedPrompt,
    DomainError, InputType, InputSpec, Message, ModelFamily, OutputSpec, PromptRequest, Tone,
};
pub use ports::Component;
