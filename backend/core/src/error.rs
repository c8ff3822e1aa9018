use thiserror::Error;

/// Top-level error type for the RailGuide runtime.
#[derive(Debug, Error)]
pub enum RailError {
    #[error("model catalog error: {0}")]
    Catalog(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
