//! File-search configuration read from the environment.

use std::collections::HashMap;

use tracing::debug;

/// Env var holding the upstream search credential.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Env var selecting the vectorstore to search.
pub const ENV_VECTORSTORE_ID: &str = "OPENAI_VECTORSTORE_ID";

/// Vectorstore used when none is configured.
pub const DEFAULT_VECTORSTORE_ID: &str = "vs_6849955367a88191bf89d7660230325f";

/// Configuration for the upstream document-search capability.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    api_key: Option<String>,
    vectorstore_id: String,
}

impl SearchConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_map(&std::env::vars().collect())
    }

    /// Read the configuration from a provided map (useful for testing).
    pub fn from_env_map(env: &HashMap<String, String>) -> Self {
        let api_key = env
            .get(ENV_OPENAI_API_KEY)
            .filter(|v| !v.is_empty())
            .cloned();
        let vectorstore_id = env
            .get(ENV_VECTORSTORE_ID)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_VECTORSTORE_ID.to_string());
        if api_key.is_none() {
            debug!("{ENV_OPENAI_API_KEY} not set, file search will be unavailable");
        }
        Self {
            api_key,
            vectorstore_id,
        }
    }

    /// The search credential, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The vectorstore the search tool queries.
    pub fn vectorstore_id(&self) -> &str {
        &self.vectorstore_id
    }

    /// Whether the upstream search capability is reachable at all.
    pub fn is_search_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            vectorstore_id: DEFAULT_VECTORSTORE_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_absent_key_disables_search() {
        let config = SearchConfig::from_env_map(&HashMap::new());
        assert!(!config.is_search_enabled());
        assert_eq!(config.vectorstore_id(), DEFAULT_VECTORSTORE_ID);
    }

    #[test]
    fn test_empty_key_treated_as_absent() {
        let config = SearchConfig::from_env_map(&env(&[(ENV_OPENAI_API_KEY, "")]));
        assert!(!config.is_search_enabled());
    }

    #[test]
    fn test_configured_key_and_store() {
        let config = SearchConfig::from_env_map(&env(&[
            (ENV_OPENAI_API_KEY, "sk-test"),
            (ENV_VECTORSTORE_ID, "vs_custom"),
        ]));
        assert_eq!(config.api_key(), Some("sk-test"));
        assert_eq!(config.vectorstore_id(), "vs_custom");
        assert!(config.is_search_enabled());
    }
}
