//! Tone - Voice the generated prompt asks the assistant to keep

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Tone of the assistant's responses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash, ToSchema)]
#[serde(try_from = "String")]
pub enum Tone {
    #[default]
    Formal,
    Casual,
    Technical,
    Friendly,
    Assertive,
}

impl Tone {
    /// All tones, in the order a host should offer them
    pub const ALL: [Tone; 5] = [
        Tone::Formal,
        Tone::Casual,
        Tone::Technical,
        Tone::Friendly,
        Tone::Assertive,
    ];

    /// Label inserted into the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Casual => "Casual",
            Tone::Technical => "Technical",
            Tone::Friendly => "Friendly",
            Tone::Assertive => "Assertive",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "casual" => Ok(Tone::Casual),
            "technical" => Ok(Tone::Technical),
            "friendly" => Ok(Tone::Friendly),
            "assertive" => Ok(Tone::Assertive),
            _ => Err(DomainError::Validation(format!(
                "Unknown tone: {}. Valid: formal, casual, technical, friendly, assertive",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Tone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Formal".parse::<Tone>().unwrap(), Tone::Formal);
        assert_eq!("TECHNICAL".parse::<Tone>().unwrap(), Tone::Technical);
        assert_eq!(" friendly ".parse::<Tone>().unwrap(), Tone::Friendly);
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        let err = "sarcastic".parse::<Tone>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("sarcastic"));
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Tone::Assertive).unwrap();
        assert_eq!(json, "\"Assertive\"");

        let tone: Tone = serde_json::from_str("\"casual\"").unwrap();
        assert_eq!(tone, Tone::Casual);

        let tone: Tone = serde_json::from_str("\"TECHNICAL\"").unwrap();
        assert_eq!(tone, Tone::Technical);

        let err = serde_json::from_str::<Tone>("\"sarcastic\"").unwrap_err();
        assert!(err.to_string().contains("Unknown tone"));
    }

    #[test]
    fn test_default_is_formal() {
        assert_eq!(Tone::default(), Tone::Formal);
        assert_eq!(Tone::ALL[0], Tone::default());
    }
}
