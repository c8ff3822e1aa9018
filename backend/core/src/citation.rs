//! Citation records attached to generated assistant messages.
//!
//! A `CitationSource` is the one stable record shape the display layer
//! consumes; the search tool normalizes every upstream result into it.

use serde::{Deserialize, Serialize};

/// Upper bound on an excerpt synthesized from raw result content.
pub const MAX_QUOTE_CHARS: usize = 200;

/// One piece of external evidence backing part of a generated answer.
///
/// Immutable after creation; owned by the message that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationSource {
    /// Always present; falls back to `"Document"` during normalization.
    pub title: String,
    pub url: Option<String>,
    pub description: Option<String>,
    /// Short quoted excerpt, at most [`MAX_QUOTE_CHARS`] characters when
    /// synthesized from result content.
    pub quote: Option<String>,
}

impl CitationSource {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            description: None,
            quote: None,
        }
    }
}

/// Outcome of one file-search invocation.
///
/// `Unavailable` is the expected state when no search credential is
/// configured; `Failure` covers upstream transport or decode errors. Neither
/// blocks message generation; the caller proceeds without citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchOutcome {
    Success { sources: Vec<CitationSource> },
    Unavailable { reason: String },
    Failure { reason: String },
}

impl SearchOutcome {
    /// Sources carried by a successful outcome; empty for the other variants.
    pub fn sources(&self) -> &[CitationSource] {
        match self {
            SearchOutcome::Success { sources } => sources,
            _ => &[],
        }
    }
}
