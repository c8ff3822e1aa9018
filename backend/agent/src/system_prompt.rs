//! Dynamic system prompt builder.
//!
//! Selects and concatenates instruction fragments per model identity. The
//! routing decision is a closed enum so every branch is enumerable; an id
//! outside the table routes to the general branch instead of failing.

use railguide_core::ChatMessage;

use crate::fragments::{
    ARTIFACTS_PROMPT, FILE_SEARCH_PROMPT, REGULAR_PROMPT, ROBORAIL_SYSTEM_PROMPT,
};
use crate::request_hints::{render_hints, ContextHints};

/// Behavior class a model id resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelClass {
    /// RoboRail machine expert.
    DomainExpert,
    /// Vectorstore-backed answers with citations.
    SearchAugmented,
    /// Chain-of-thought model; artifact instructions intentionally omitted.
    ReasoningOnly,
    /// Everything else, including unknown ids.
    General,
}

impl ModelClass {
    pub fn from_id(model_id: &str) -> Self {
        match model_id {
            "gpt-5-mini" => ModelClass::DomainExpert,
            "gpt-5-mini-thinking" => ModelClass::SearchAugmented,
            "chat-model-reasoning" => ModelClass::ReasoningOnly,
            _ => ModelClass::General,
        }
    }
}

pub struct PromptBuilder;

impl PromptBuilder {
    /// Compose the full system instruction string for a chat turn.
    ///
    /// Pure and idempotent: identical inputs yield byte-identical output.
    pub fn compose(model_id: &str, hints: &ContextHints) -> String {
        let request_prompt = format!(
            "About the origin of user's request:\n{}",
            render_hints(hints)
        );

        match ModelClass::from_id(model_id) {
            ModelClass::DomainExpert => {
                [ROBORAIL_SYSTEM_PROMPT, &request_prompt, ARTIFACTS_PROMPT].join("\n\n")
            }
            ModelClass::SearchAugmented => {
                [FILE_SEARCH_PROMPT, &request_prompt, ARTIFACTS_PROMPT].join("\n\n")
            }
            ModelClass::ReasoningOnly => [REGULAR_PROMPT, &request_prompt].join("\n\n"),
            ModelClass::General => {
                [REGULAR_PROMPT, &request_prompt, ARTIFACTS_PROMPT].join("\n\n")
            }
        }
    }

    /// Compose and wrap as a system-role transcript entry.
    pub fn build(model_id: &str, hints: &ContextHints) -> ChatMessage {
        ChatMessage::system(Self::compose(model_id, hints))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railguide_core::Role;

    fn amsterdam() -> ContextHints {
        ContextHints {
            latitude: Some(52.3676),
            longitude: Some(4.9041),
            city: Some("Amsterdam".to_string()),
            country: Some("Netherlands".to_string()),
        }
    }

    #[test]
    fn test_domain_expert_routing() {
        let prompt = PromptBuilder::compose("gpt-5-mini", &amsterdam());
        assert!(prompt.contains("RoboRail Assistant"));
        assert!(prompt.contains("Amsterdam"));
        assert!(prompt.contains(ARTIFACTS_PROMPT));
        assert!(!prompt.contains(FILE_SEARCH_PROMPT));
    }

    #[test]
    fn test_search_augmented_routing() {
        let prompt = PromptBuilder::compose("gpt-5-mini-thinking", &amsterdam());
        assert!(prompt.contains(FILE_SEARCH_PROMPT));
        assert!(prompt.contains(ARTIFACTS_PROMPT));
        assert!(!prompt.contains("RoboRail Assistant"));
    }

    #[test]
    fn test_reasoning_omits_artifacts() {
        let prompt = PromptBuilder::compose("chat-model-reasoning", &amsterdam());
        assert!(prompt.contains("friendly assistant"));
        assert!(!prompt.contains(ARTIFACTS_PROMPT));
        assert!(!prompt.contains("RoboRail Assistant"));
    }

    #[test]
    fn test_default_routing() {
        let prompt = PromptBuilder::compose("chat-model", &amsterdam());
        assert!(prompt.contains("friendly assistant"));
        assert!(prompt.contains(ARTIFACTS_PROMPT));
    }

    #[test]
    fn test_unknown_id_matches_default_byte_for_byte() {
        let hints = amsterdam();
        assert_eq!(
            PromptBuilder::compose("nonexistent-model", &hints),
            PromptBuilder::compose("chat-model", &hints)
        );
    }

    #[test]
    fn test_compose_is_idempotent() {
        let hints = amsterdam();
        assert_eq!(
            PromptBuilder::compose("gpt-5-mini", &hints),
            PromptBuilder::compose("gpt-5-mini", &hints)
        );
    }

    #[test]
    fn test_fragments_joined_with_blank_line() {
        let prompt = PromptBuilder::compose("chat-model-reasoning", &ContextHints::default());
        assert!(prompt.starts_with(REGULAR_PROMPT));
        assert!(prompt.contains("\n\nAbout the origin of user's request:\n"));
    }

    #[test]
    fn test_build_wraps_as_system_message() {
        let msg = PromptBuilder::build("chat-model", &ContextHints::default());
        assert_eq!(msg.role, Role::System);
        assert_eq!(msg.content, PromptBuilder::compose("chat-model", &ContextHints::default()));
    }
}
