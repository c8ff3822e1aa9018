/// Model catalog — the ordered list of chat models offered by the assistant.
///
/// The prompt builder routes on the `id` alone; `display_name` and
/// `description` exist for the model picker UI.
use serde::{Deserialize, Serialize};

use crate::error::RailError;

/// Id of the model selected when the user has not picked one.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-5-mini-thinking";

/// Upstream inference providers the assistant can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Xai,
}

/// A model entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatModel {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub provider: Provider,
}

/// Ordered model catalog with exactly one default entry.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    models: Vec<ChatModel>,
    default_index: usize,
}

impl ModelCatalog {
    /// Build a catalog, enforcing unique ids and a resolvable default.
    ///
    /// A violation here is a programming error in the model table, so it is
    /// surfaced as an error rather than silently repaired.
    pub fn try_new(models: Vec<ChatModel>, default_id: impl Into<String>) -> Result<Self, RailError> {
        let default_id = default_id.into();
        for (i, model) in models.iter().enumerate() {
            if models[..i].iter().any(|m| m.id == model.id) {
                return Err(RailError::Catalog(format!("duplicate model id: {}", model.id)));
            }
        }
        let default_index = models
            .iter()
            .position(|m| m.id == default_id)
            .ok_or_else(|| {
                RailError::Catalog(format!("default model {default_id} is not in the catalog"))
            })?;
        Ok(Self {
            models,
            default_index,
        })
    }

    /// The built-in catalog shipped with the assistant.
    pub fn builtin() -> Result<Self, RailError> {
        Self::try_new(
            vec![
                ChatModel {
                    id: "gpt-5-mini-thinking".into(),
                    display_name: "GPT-5 Mini (September 2025)".into(),
                    description:
                        "Latest thinking model with file search, low verbosity, medium reasoning"
                            .into(),
                    provider: Provider::OpenAi,
                },
                ChatModel {
                    id: "gpt-5-mini".into(),
                    display_name: "GPT-5 Mini".into(),
                    description: "RoboRail domain expert for operation, maintenance, and safety"
                        .into(),
                    provider: Provider::OpenAi,
                },
                ChatModel {
                    id: "chat-model".into(),
                    display_name: "Grok Vision".into(),
                    description: "Advanced multimodal model with vision and text capabilities"
                        .into(),
                    provider: Provider::Xai,
                },
                ChatModel {
                    id: "chat-model-reasoning".into(),
                    display_name: "Grok Reasoning".into(),
                    description: "Uses advanced chain-of-thought reasoning for complex problems"
                        .into(),
                    provider: Provider::Xai,
                },
            ],
            DEFAULT_CHAT_MODEL,
        )
    }

    /// List all models in catalog order.
    pub fn list(&self) -> &[ChatModel] {
        &self.models
    }

    /// Look up a model by its id.
    pub fn get(&self, id: &str) -> Option<&ChatModel> {
        self.models.iter().find(|m| m.id == id)
    }

    /// The designated default model.
    pub fn default_model(&self) -> &ChatModel {
        &self.models[self.default_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ModelCatalog::builtin().unwrap();
        assert_eq!(catalog.default_model().id, DEFAULT_CHAT_MODEL);
        assert!(catalog.get("chat-model").is_some());
        assert!(catalog.get("nonexistent-model").is_none());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = ModelCatalog::builtin().unwrap();
        let mut ids: Vec<&str> = catalog.list().iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.list().len());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let entry = ChatModel {
            id: "chat-model".into(),
            display_name: "A".into(),
            description: String::new(),
            provider: Provider::Xai,
        };
        let err = ModelCatalog::try_new(vec![entry.clone(), entry], "chat-model").unwrap_err();
        assert!(err.to_string().contains("duplicate model id"));
    }

    #[test]
    fn test_missing_default_rejected() {
        let entry = ChatModel {
            id: "chat-model".into(),
            display_name: "A".into(),
            description: String::new(),
            provider: Provider::Xai,
        };
        let err = ModelCatalog::try_new(vec![entry], "other-model").unwrap_err();
        assert!(err.to_string().contains("not in the catalog"));
    }
}
