use thiserror::Error;

/// Failures that abort a tree generation call before traversal starts.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Path does not exist: {0}")]
    NotFound(String),
    #[error("Path is not a directory: {0}")]
    NotADirectory(String),
    #[error("Failed to resolve path {path}")]
    Resolve {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
