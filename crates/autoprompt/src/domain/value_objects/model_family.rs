//! ModelFamily - Which LLM family the prompt is tuned for

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

const OPENAI_INSTRUCTION: &str = "Ensure your responses are concise and clear, adhering to helpfulness and harmlessness guidelines.";
const ANTHROPIC_INSTRUCTION: &str =
    "Structure your responses clearly. You can use XML tags for structuring if appropriate.";

/// Target model family
///
/// Serializes to its display label; deserializes through [`FromStr`] so
/// labels and aliases are accepted wherever the value comes from.
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash, ToSchema)]
#[serde(try_from = "String")]
pub enum ModelFamily {
    #[default]
    #[serde(rename = "Default")]
    Default,
    #[serde(rename = "OpenAI (GPT-family)")]
    OpenAI,
    #[serde(rename = "Anthropic (Claude-family)")]
    Anthropic,
    #[serde(rename = "Open Source LLMs")]
    OpenSource,
}

impl ModelFamily {
    /// All families, in the order a host should offer them
    pub const ALL: [ModelFamily; 4] = [
        ModelFamily::Default,
        ModelFamily::OpenAI,
        ModelFamily::Anthropic,
        ModelFamily::OpenSource,
    ];

    /// Display label, as shown in a host's select box
    pub fn label(&self) -> &'static str {
        match self {
            ModelFamily::Default => "Default",
            ModelFamily::OpenAI => "OpenAI (GPT-family)",
            ModelFamily::Anthropic => "Anthropic (Claude-family)",
            ModelFamily::OpenSource => "Open Source LLMs",
        }
    }

    /// Extra line appended to the prompt for this family, if any
    pub fn instruction(&self) -> Option<&'static str> {
        match self {
            ModelFamily::OpenAI => Some(OPENAI_INSTRUCTION),
            ModelFamily::Anthropic => Some(ANTHROPIC_INSTRUCTION),
            ModelFamily::Default | ModelFamily::OpenSource => None,
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ModelFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(ModelFamily::Default),
            "openai (gpt-family)" | "openai" | "gpt" => Ok(ModelFamily::OpenAI),
            "anthropic (claude-family)" | "anthropic" | "claude" => Ok(ModelFamily::Anthropic),
            "open source llms" | "open-source" | "opensource" | "oss" => {
                Ok(ModelFamily::OpenSource)
            }
            _ => Err(DomainError::Validation(format!(
                "Unknown model family: {}. Valid: default, openai, anthropic, open-source",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ModelFamily {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
