//! Auto System Prompt
//!
//! Component wrapper around the pure composer. Keeps the inputs a host set
//! and the status of the last run on the instance.

use async_trait::async_trait;

use crate::domain::entities::{ComponentInfo, InputSpec, Message, OutputSpec, PromptRequest};
use crate::domain::errors::DomainError;
use crate::domain::services::compose;
use crate::domain::value_objects::{ModelFamily, Tone};
use crate::ports::Component;

pub const NAME: &str = "AutoSystemPrompt";
pub const DISPLAY_NAME: &str = "Auto System Prompt";
pub const DESCRIPTION: &str = "Generates a system prompt based on user inputs.";
pub const ICON: &str = "Sparkles";
pub const OUTPUT_NAME: &str = "system_prompt";

/// Component that builds a system prompt from a goal, keywords, tone and
/// target model family
#[derive(Debug, Clone, Default)]
pub struct AutoSystemPrompt {
    inputs: PromptRequest,
    status: Option<String>,
}

impl AutoSystemPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(inputs: PromptRequest) -> Self {
        Self {
            inputs,
            status: None,
        }
    }

    pub fn inputs(&self) -> &PromptRequest {
        &self.inputs
    }

    /// Replace all inputs before the next run
    pub fn set_inputs(&mut self, inputs: PromptRequest) {
        self.inputs = inputs;
    }

    pub fn set_user_goal(&mut self, user_goal: impl Into<String>) -> &mut Self {
        self.inputs.user_goal = user_goal.into();
        self
    }

    pub fn set_keywords(&mut self, keywords: impl Into<String>) -> &mut Self {
        self.inputs.keywords = keywords.into();
        self
    }

    pub fn set_tone(&mut self, tone: Tone) -> &mut Self {
        self.inputs.tone = tone;
        self
    }

    pub fn set_target_model_family(&mut self, family: ModelFamily) -> &mut Self {
        self.inputs.target_model_family = family;
        self
    }

    /// Compose the prompt from the current inputs and record the status
    pub async fn generate_prompt(&mut self) -> Message {
        let composed = compose(&self.inputs);
        tracing::debug!("{}: {}", NAME, composed.status);
        self.status = Some(composed.status);
        composed.message
    }

    /// Declarations for this component's inputs and output
    pub fn component_info() -> ComponentInfo {
        ComponentInfo {
            name: NAME.to_string(),
            display_name: DISPLAY_NAME.to_string(),
            description: DESCRIPTION.to_string(),
            icon: ICON.to_string(),
            inputs: vec![
                InputSpec::text(
                    "user_goal",
                    "User Goal",
                    "Describe the main objective for the AI.",
                ),
                InputSpec::text(
                    "keywords",
                    "Keywords",
                    "Comma-separated keywords or concepts to include in the prompt.",
                )
                .advanced(),
                InputSpec::select(
                    "tone",
                    "Tone",
                    "Select the desired tone for the system prompt.",
                    Tone::ALL.iter().map(Tone::label),
                    Tone::default().label(),
                )
                .advanced(),
                InputSpec::select(
                    "target_model_family",
                    "Target Model Family",
                    "Optimize prompt structure for a specific model family (optional).",
                    ModelFamily::ALL.iter().map(ModelFamily::label),
                    ModelFamily::default().label(),
                )
                .advanced(),
            ],
            outputs: vec![OutputSpec {
                name: OUTPUT_NAME.to_string(),
                display_name: "System Prompt".to_string(),
                method: "generate_prompt".to_string(),
            }],
        }
    }
}

#[async_trait]
impl Component for AutoSystemPrompt {
    fn info(&self) -> ComponentInfo {
        Self::component_info()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    async fn run(&mut self) -> Result<Message, DomainError> {
        Ok(self.generate_prompt().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::InputType;

    #[test]
    fn test_component_identity() {
        let component = AutoSystemPrompt::new();
        let info = component.info();
        assert_eq!(info.name, "AutoSystemPrompt");
        assert_eq!(info.display_name, "Auto System Prompt");
        assert_eq!(info.icon, "Sparkles");
        assert_eq!(info.outputs.len(), 1);
        assert_eq!(info.outputs[0].name, "system_prompt");
        assert!(component.status().is_none());
    }

    #[test]
    fn test_select_inputs_declare_options_and_defaults() {
        let info = AutoSystemPrompt::component_info();

        let tone = info.input("tone").unwrap();
        assert!(tone.advanced);
        assert_eq!(tone.input_type, InputType::Select);
        assert_eq!(
            tone.options,
            ["Formal", "Casual", "Technical", "Friendly", "Assertive"]
        );
        assert_eq!(tone.value.as_deref(), Some("Formal"));

        let family = info.input("target_model_family").unwrap();
        assert_eq!(family.options.len(), 4);
        assert_eq!(family.options[1], "OpenAI (GPT-family)");
        assert_eq!(family.value.as_deref(), Some("Default"));

        let goal = info.input("user_goal").unwrap();
        assert_eq!(goal.input_type, InputType::Text);
        assert!(goal.options.is_empty());
        assert!(!goal.advanced);
        assert!(info.input("missing").is_none());
    }

    #[tokio::test]
    async fn test_generate_prompt_records_status() {
        let mut component = AutoSystemPrompt::new();
        component
            .set_user_goal("Translate English to French")
            .set_keywords("greetings, common phrases")
            .set_tone(Tone::Formal)
            .set_target_model_family(ModelFamily::OpenAI);

        let message = component.generate_prompt().await;

        assert!(message
            .text()
            .contains("Your primary goal is to: Translate English to French."));
        assert!(message
            .text()
            .contains("Ensure your responses are concise and clear"));
        assert_eq!(
            component.status(),
            Some("Generated prompt for: Translate English to French...")
        );
    }

    #[tokio::test]
    async fn test_status_is_recomputed_each_run() {
        let mut component = AutoSystemPrompt::with_inputs(PromptRequest::new("Write a poem"));
        component.run().await.unwrap();
        assert_eq!(component.status(), Some("Generated prompt for: Write a poem..."));

        component.set_inputs(PromptRequest::default().with_tone(Tone::Casual));
        let message = component.run().await.unwrap();
        assert_eq!(component.status(), Some("Generated generic prompt."));
        assert!(message
            .text()
            .contains("Maintain a Casual tone in your responses."));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let mut component: Box<dyn Component> = Box::new(AutoSystemPrompt::new());
        let message = component.run().await.unwrap();
        assert!(message.text().starts_with("You are an AI assistant."));
        assert_eq!(component.status(), Some("Generated generic prompt."));
    }
}
