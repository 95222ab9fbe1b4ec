//! Prompt - Inputs and result of a composition
//!
//! Pure domain entities without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use super::Message;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{ModelFamily, Tone};

/// PromptRequest - Everything the composer needs for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Main objective for the assistant; may be empty
    #[serde(default)]
    pub user_goal: String,
    /// Comma-separated keywords or concepts; may be empty
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub target_model_family: ModelFamily,
}

impl PromptRequest {
    /// Create a request for a goal with default keywords, tone and family
    pub fn new(user_goal: impl Into<String>) -> Self {
        Self {
            user_goal: user_goal.into(),
            ..Self::default()
        }
    }

    /// Build a request from raw host values
    ///
    /// Missing selects fall back to their defaults. An unrecognized select
    /// value is reported against the field it came from.
    pub fn parse(
        user_goal: Option<&str>,
        keywords: Option<&str>,
        tone: Option<&str>,
        target_model_family: Option<&str>,
    ) -> Result<Self, DomainError> {
        let tone = tone
            .map(|s| s.parse::<Tone>())
            .transpose()
            .map_err(|e| DomainError::invalid_input("tone", e.to_string()))?
            .unwrap_or_default();

        let target_model_family = target_model_family
            .map(|s| s.parse::<ModelFamily>())
            .transpose()
            .map_err(|e| DomainError::invalid_input("target_model_family", e.to_string()))?
            .unwrap_or_default();

        Ok(Self {
            user_goal: user_goal.unwrap_or_default().to_string(),
            keywords: keywords.unwrap_or_default().to_string(),
            tone,
            target_model_family,
        })
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_model_family(mut self, family: ModelFamily) -> Self {
        self.target_model_family = family;
        self
    }
}

/// ComposedPrompt - The generated prompt plus its status summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedPrompt {
    pub message: Message,
    pub status: String,
}

impl ComposedPrompt {
    pub fn text(&self) -> &str {
        self.message.text()
    }
}
