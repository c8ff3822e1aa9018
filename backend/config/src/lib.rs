//! `railguide-config` — runtime configuration for the RailGuide assistant.
//!
//! All values come from the process environment. A missing search credential
//! is an expected deployment state, not an error: it disables the file-search
//! capability without touching anything else.

pub mod search;

pub use search::{
    SearchConfig, DEFAULT_VECTORSTORE_ID, ENV_OPENAI_API_KEY, ENV_VECTORSTORE_ID,
};
