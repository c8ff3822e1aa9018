/// File search tool — queries the document vectorstore behind the assistant
/// and normalizes whatever shape the upstream returns into `CitationSource`
/// records. The display layer only ever sees that one record shape.
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use logging::redact_sensitive_data;
use railguide_config::SearchConfig;
use railguide_core::{CitationSource, SearchOutcome, Tool, MAX_QUOTE_CHARS};

/// Result-count bound applied when the caller does not supply one.
pub const DEFAULT_MAX_RESULTS: usize = 5;

const SEARCH_API_BASE: &str = "https://api.openai.com/v1/vector_stores";

// ---------------------------------------------------------------------------
// Tool
// ---------------------------------------------------------------------------

pub struct FileSearchTool {
    client: Client,
    config: SearchConfig,
}

impl FileSearchTool {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Search the vectorstore, bounded to `max_results`.
    ///
    /// Never panics and never propagates an upstream error: a missing
    /// credential yields `Unavailable`, anything that goes wrong during the
    /// round-trip yields `Failure` with a redacted reason.
    pub async fn search(&self, query: &str, max_results: usize) -> SearchOutcome {
        if query.trim().is_empty() {
            return SearchOutcome::Failure {
                reason: "empty query".to_string(),
            };
        }
        let Some(api_key) = self.config.api_key() else {
            warn!("OPENAI_API_KEY not configured - file search disabled");
            return SearchOutcome::Unavailable {
                reason: "file search is not configured; set OPENAI_API_KEY to enable it"
                    .to_string(),
            };
        };

        let max_results = max_results.max(1);
        match self.execute_search(api_key, query, max_results).await {
            Ok(response) => SearchOutcome::Success {
                sources: normalize_results(response.data, max_results),
            },
            Err(err) => {
                let reason = redact_sensitive_data(&format!("search failed: {err:#}"));
                warn!(%reason, "file search error");
                SearchOutcome::Failure { reason }
            }
        }
    }

    async fn execute_search(
        &self,
        api_key: &str,
        query: &str,
        max_results: usize,
    ) -> Result<SearchResponse> {
        let url = format!("{SEARCH_API_BASE}/{}/search", self.config.vectorstore_id());
        let body = json!({
            "query": query,
            "max_num_results": max_results,
            "ranking_options": { "ranker": "auto" },
        });
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl Tool for FileSearchTool {
    fn name(&self) -> &str {
        "file_search"
    }

    fn description(&self) -> &str {
        "Search through the vectorstore for relevant information"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query to find relevant information"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return",
                    "default": DEFAULT_MAX_RESULTS
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> Result<String> {
        let query = args.get("query").and_then(Value::as_str).unwrap_or_default();
        let max_results = args
            .get("max_results")
            .and_then(Value::as_u64)
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_MAX_RESULTS);
        let outcome = self.search(query, max_results).await;
        Ok(serde_json::to_string(&outcome)?)
    }
}

// ---------------------------------------------------------------------------
// Upstream result shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(alias = "results")]
    data: Vec<RawSearchResult>,
}

/// One raw upstream result. Every field is optional: different store
/// backends populate different subsets, and a sparse record is still worth
/// a citation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSearchResult {
    title: Option<String>,
    #[serde(alias = "fileName", alias = "file_name")]
    filename: Option<String>,
    url: Option<String>,
    file_id: Option<String>,
    description: Option<String>,
    snippet: Option<String>,
    quote: Option<String>,
    content: Option<RawContent>,
}

/// Result content arrives either as a bare string or as a chunk list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawContent {
    Text(String),
    Chunks(Vec<RawChunk>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawChunk {
    text: Option<String>,
}

impl RawContent {
    fn text(&self) -> Option<String> {
        match self {
            RawContent::Text(s) => Some(s.clone()),
            RawContent::Chunks(chunks) => {
                let joined: String = chunks
                    .iter()
                    .filter_map(|c| c.text.as_deref())
                    .collect();
                (!joined.is_empty()).then_some(joined)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

fn normalize_results(raw: Vec<RawSearchResult>, max_results: usize) -> Vec<CitationSource> {
    raw.into_iter()
        .take(max_results)
        .map(normalize_result)
        .collect()
}

/// Map a raw result to a citation with field-by-field fallback chains.
/// A record missing everything still yields a usable `"Document"` citation.
fn normalize_result(raw: RawSearchResult) -> CitationSource {
    let content = raw.content.as_ref().and_then(RawContent::text);
    CitationSource {
        title: non_empty(raw.title)
            .or_else(|| non_empty(raw.filename))
            .unwrap_or_else(|| "Document".to_string()),
        url: non_empty(raw.url).or_else(|| non_empty(raw.file_id)),
        description: non_empty(raw.description).or_else(|| non_empty(raw.snippet)),
        quote: non_empty(raw.quote).or_else(|| content.map(|c| excerpt(&c))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// First `MAX_QUOTE_CHARS` characters of the result content.
fn excerpt(content: &str) -> String {
    content.chars().take(MAX_QUOTE_CHARS).collect()
}
