pub mod file_search;

pub use file_search::{FileSearchTool, DEFAULT_MAX_RESULTS};
