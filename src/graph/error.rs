//! Errors raised at the edges of the word graph (I/O, config, rendering)

use thiserror::Error;

/// Errors that can occur outside the core graph queries
#[derive(Debug, Error)]
pub enum WordGraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for word graph operations
pub type WordGraphResult<T> = Result<T, WordGraphError>;
