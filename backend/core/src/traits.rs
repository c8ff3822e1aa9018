use anyhow::Result;
use async_trait::async_trait;

/// A capability the model can invoke during generation.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name of the tool (e.g., "file_search").
    fn name(&self) -> &str;

    /// Description for the LLM prompt.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments, returning a JSON payload.
    async fn execute(&self, args: serde_json::Value) -> Result<String>;
}
