//! Prompt Composer
//!
//! Turns a [`PromptRequest`] into a system prompt. Pure and total: every
//! request produces a prompt, there is nothing to fail on.

use crate::domain::entities::{ComposedPrompt, Message, PromptRequest};

const OPENING: &str = "You are an AI assistant.";
const GENERIC_GOAL: &str = "Your primary goal is to assist the user with their tasks.";
const ALL_CONCEPTS: &str = "all relevant concepts";
const GENERIC_STATUS: &str = "Generated generic prompt.";

/// Characters of the goal echoed back in the status line
pub const STATUS_GOAL_CHARS: usize = 50;

/// Compose the system prompt and its status line
pub fn compose(request: &PromptRequest) -> ComposedPrompt {
    let mut lines = vec![OPENING.to_string()];

    if request.user_goal.is_empty() {
        lines.push(GENERIC_GOAL.to_string());
    } else {
        lines.push(format!("Your primary goal is to: {}.", request.user_goal));
    }

    let keywords = parse_keywords(&request.keywords);
    lines.push(format!(
        "Key concepts to focus on: {}.",
        format_keywords(&keywords)
    ));

    lines.push(format!(
        "Maintain a {} tone in your responses.",
        request.tone.label()
    ));

    if let Some(instruction) = request.target_model_family.instruction() {
        lines.push(instruction.to_string());
    }

    tracing::debug!(
        "Composed {} line prompt (tone: {}, family: {}, keywords: {})",
        lines.len(),
        request.tone,
        request.target_model_family,
        keywords.len()
    );

    ComposedPrompt {
        message: Message::new(lines.join("\n")),
        status: status_for(&request.user_goal),
    }
}

/// Split comma-separated keywords, trimming and dropping empty entries
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render keywords as an English list: "a", "a, and b", "a, b, and c"
pub fn format_keywords(keywords: &[String]) -> String {
    match keywords {
        [] => ALL_CONCEPTS.to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// Status line for a run with the given goal
///
/// Keeps the first 50 characters of the goal as-is, with no word-boundary
/// handling, and always appends "...".
pub fn status_for(user_goal: &str) -> String {
    if user_goal.is_empty() {
        return GENERIC_STATUS.to_string();
    }

    let head: String = user_goal.chars().take(STATUS_GOAL_CHARS).collect();
    format!("Generated prompt for: {}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ModelFamily, Tone};

    const OPENAI_MARKER: &str = "Ensure your responses are concise and clear";
    const ANTHROPIC_MARKER: &str = "You can use XML tags for structuring";

    fn lines(prompt: &ComposedPrompt) -> Vec<&str> {
        prompt.text().lines().collect()
    }

    #[test]
    fn test_all_inputs_openai() {
        let request = PromptRequest::new("Translate English to French")
            .with_keywords("greetings, common phrases")
            .with_tone(Tone::Formal)
            .with_model_family(ModelFamily::OpenAI);

        let prompt = compose(&request);
        let lines = lines(&prompt);

        assert_eq!(
            lines,
            vec![
                "You are an AI assistant.",
                "Your primary goal is to: Translate English to French.",
                "Key concepts to focus on: greetings, and common phrases.",
                "Maintain a Formal tone in your responses.",
                "Ensure your responses are concise and clear, adhering to helpfulness and harmlessness guidelines.",
            ]
        );
        assert!(!prompt.text().contains(ANTHROPIC_MARKER));
        assert_eq!(prompt.status, "Generated prompt for: Translate English to French...");
    }

    #[test]
    fn test_empty_inputs_fall_back() {
        let request = PromptRequest::default().with_tone(Tone::Casual);

        let prompt = compose(&request);

        assert_eq!(
            prompt.text(),
            "You are an AI assistant.\n\
             Your primary goal is to assist the user with their tasks.\n\
             Key concepts to focus on: all relevant concepts.\n\
             Maintain a Casual tone in your responses."
        );
        assert!(!prompt.text().contains("OpenAI (GPT-family)"));
        assert!(!prompt.text().contains("Anthropic (Claude-family)"));
        assert_eq!(prompt.status, "Generated generic prompt.");
    }

    #[test]
    fn test_anthropic_three_keywords() {
        let request = PromptRequest::new("Summarize technical documents")
            .with_keywords("AI, machine learning, NLP")
            .with_tone(Tone::Technical)
            .with_model_family(ModelFamily::Anthropic);

        let prompt = compose(&request);

        assert!(prompt
            .text()
            .contains("Key concepts to focus on: AI, machine learning, and NLP."));
        assert!(prompt
            .text()
            .contains("Maintain a Technical tone in your responses."));
        assert!(prompt.text().contains(
            "Structure your responses clearly. You can use XML tags for structuring if appropriate."
        ));
        assert!(!prompt.text().contains(OPENAI_MARKER));
        assert_eq!(prompt.status, "Generated prompt for: Summarize technical documents...");
    }

    #[test]
    fn test_default_and_open_source_add_no_instruction() {
        for family in [ModelFamily::Default, ModelFamily::OpenSource] {
            let request = PromptRequest::new("Write a poem")
                .with_keywords("nature, beauty")
                .with_tone(Tone::Friendly)
                .with_model_family(family);

            let prompt = compose(&request);

            assert_eq!(lines(&prompt).len(), 4);
            assert!(!prompt.text().contains(OPENAI_MARKER));
            assert!(!prompt.text().contains(ANTHROPIC_MARKER));
            assert!(prompt.text().contains("Your primary goal is to: Write a poem."));
            assert_eq!(prompt.status, "Generated prompt for: Write a poem...");
        }
    }

    #[test]
    fn test_single_keyword() {
        let request = PromptRequest::new("Explain quantum physics").with_keywords("qubit");

        let prompt = compose(&request);

        assert!(prompt.text().contains("Key concepts to focus on: qubit."));
        assert_eq!(prompt.status, "Generated prompt for: Explain quantum physics...");
    }

    #[test]
    fn test_separator_only_keywords_use_placeholder() {
        for raw in ["", ",", " , ,", "   ", ",,,"] {
            assert!(parse_keywords(raw).is_empty(), "raw: {:?}", raw);

            let prompt = compose(&PromptRequest::default().with_keywords(raw));
            assert!(prompt
                .text()
                .contains("Key concepts to focus on: all relevant concepts."));
        }
    }

    #[test]
    fn test_parse_keywords_trims_and_keeps_order() {
        assert_eq!(
            parse_keywords(" rust ,, async,  tokio ,"),
            vec!["rust", "async", "tokio"]
        );
    }

    #[test]
    fn test_format_keywords() {
        let kw = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(format_keywords(&[]), "all relevant concepts");
        assert_eq!(format_keywords(&kw(&["qubit"])), "qubit");
        assert_eq!(format_keywords(&kw(&["a", "b"])), "a, and b");
        assert_eq!(format_keywords(&kw(&["a", "b", "c", "d"])), "a, b, c, and d");
    }

    #[test]
    fn test_status_truncates_to_fifty_chars() {
        let goal = "x".repeat(80);
        let status = status_for(&goal);
        assert_eq!(status, format!("Generated prompt for: {}...", "x".repeat(50)));

        let exactly = "y".repeat(50);
        assert_eq!(
            status_for(&exactly),
            format!("Generated prompt for: {}...", exactly)
        );
    }

    #[test]
    fn test_status_counts_chars_not_bytes() {
        let goal = "日本語".repeat(20);
        let status = status_for(&goal);
        let echoed = status
            .strip_prefix("Generated prompt for: ")
            .and_then(|s| s.strip_suffix("..."))
            .unwrap();
        assert_eq!(echoed.chars().count(), 50);
    }

    #[test]
    fn test_whitespace_goal_is_kept_verbatim() {
        let prompt = compose(&PromptRequest::new("  "));
        assert!(prompt.text().contains("Your primary goal is to:   ."));
        assert_eq!(prompt.status, "Generated prompt for:   ...");
    }

    #[test]
    fn test_every_prompt_opens_the_same_way() {
        for tone in Tone::ALL {
            for family in ModelFamily::ALL {
                let prompt = compose(&PromptRequest::default().with_tone(tone).with_model_family(family));
                assert!(prompt.text().starts_with("You are an AI assistant.\n"));
                assert!(prompt
                    .text()
                    .contains(&format!("Maintain a {} tone in your responses.", tone)));
            }
        }
    }
}
