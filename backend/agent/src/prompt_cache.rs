//! System prompt caching.
//!
//! Composition is pure, so a composed prompt can be reused for as long as the
//! (model id, hints) pair recurs.

use moka::sync::Cache;
use std::time::Duration;
use tracing::debug;

use crate::request_hints::{render_hints, ContextHints};
use crate::system_prompt::PromptBuilder;

pub struct PromptCache {
    /// Caches composed prompts keyed by model id + rendered hints.
    cache: Cache<String, String>,
}

impl PromptCache {
    pub fn new() -> Self {
        Self {
            // Cache system prompts for 10 minutes to avoid rebuilding mostly static strings
            cache: Cache::builder()
                .time_to_idle(Duration::from_secs(600))
                .build(),
        }
    }

    fn key(model_id: &str, hints: &ContextHints) -> String {
        format!("{model_id}\x1f{}", render_hints(hints))
    }

    /// Return the cached prompt for this pair, composing it on a miss.
    pub fn get_or_compose(&self, model_id: &str, hints: &ContextHints) -> String {
        self.cache.get_with(Self::key(model_id, hints), || {
            debug!(model_id, "composing system prompt");
            PromptBuilder::compose(model_id, hints)
        })
    }

    pub fn invalidate(&self, model_id: &str, hints: &ContextHints) {
        self.cache.invalidate(&Self::key(model_id, hints));
    }
}

impl Default for PromptCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_returns_composed_prompt() {
        let cache = PromptCache::new();
        let hints = ContextHints::default();
        let first = cache.get_or_compose("chat-model", &hints);
        let second = cache.get_or_compose("chat-model", &hints);
        assert_eq!(first, second);
        assert_eq!(first, PromptBuilder::compose("chat-model", &hints));
    }

    #[test]
    fn test_distinct_hints_get_distinct_entries() {
        let cache = PromptCache::new();
        let plain = cache.get_or_compose("chat-model", &ContextHints::default());
        let hinted = cache.get_or_compose(
            "chat-model",
            &ContextHints {
                city: Some("Rotterdam".to_string()),
                ..Default::default()
            },
        );
        assert_ne!(plain, hinted);
    }
}
