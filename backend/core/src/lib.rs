pub mod citation;
pub mod error;
pub mod message;
pub mod model_catalog;
pub mod tools;
pub mod traits;

pub use citation::{CitationSource, SearchOutcome, MAX_QUOTE_CHARS};
pub use error::RailError;
pub use message::{ChatMessage, Role};
pub use model_catalog::{ChatModel, ModelCatalog, Provider, DEFAULT_CHAT_MODEL};
pub use tools::ToolRegistry;
pub use traits::Tool;
