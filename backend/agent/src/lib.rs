//! RailGuide prompt assembly.
//!
//! Builds the system instructions sent to a language model for each chat
//! turn: a fixed fragment library, a request-hint block, a model-id routing
//! table, and a cache for the composed result.

pub mod fragments;
pub mod prompt_cache;
pub mod request_hints;
pub mod system_prompt;

pub use fragments::{update_document_prompt, ArtifactKind};
pub use prompt_cache::PromptCache;
pub use request_hints::{render_hints, ContextHints};
pub use system_prompt::{ModelClass, PromptBuilder};
