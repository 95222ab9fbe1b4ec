//! Compose API Models
//!
//! Request/response bodies for the prompt composition endpoints.

use autoprompt::{DomainError, Message, ModelFamily, PromptRequest, Tone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for composing a system prompt
///
/// Every field is optional. Tone and family accept display labels
/// ("OpenAI (GPT-family)") or short aliases ("openai").
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ComposeRequest {
    /// Main objective for the AI
    pub user_goal: Option<String>,
    /// Comma-separated keywords or concepts
    pub keywords: Option<String>,
    /// Tone (default: Formal)
    pub tone: Option<String>,
    /// Target model family (default: Default)
    pub target_model_family: Option<String>,
}

impl ComposeRequest {
    pub fn into_domain(self) -> Result<PromptRequest, DomainError> {
        PromptRequest::parse(
            self.user_goal.as_deref(),
            self.keywords.as_deref(),
            self.tone.as_deref(),
            self.target_model_family.as_deref(),
        )
    }
}

/// Composed system prompt
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ComposeResponse {
    /// Generated system prompt, one clause per line
    pub system_prompt: String,
    /// Short summary of what was generated
    pub status: String,
    pub tone: Tone,
    pub target_model_family: ModelFamily,
}

impl ComposeResponse {
    pub fn new(request: &PromptRequest, message: Message, status: String) -> Self {
        Self {
            system_prompt: message.into_text(),
            status,
            tone: request.tone,
            target_model_family: request.target_model_family,
        }
    }
}

/// Option sets for host UIs
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct OptionsResponse {
    pub tones: Vec<Tone>,
    pub model_families: Vec<ModelFamily>,
    pub default_tone: Tone,
    pub default_model_family: ModelFamily,
}

impl Default for OptionsResponse {
    fn default() -> Self {
        Self {
            tones: Tone::ALL.to_vec(),
            model_families: ModelFamily::ALL.to_vec(),
            default_tone: Tone::default(),
            default_model_family: ModelFamily::default(),
        }
    }
}
