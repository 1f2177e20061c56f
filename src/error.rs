//! Error types for the pursuit crate

use thiserror::Error;

/// Main error type for the pursuit crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid graph header '{line}' (expected '<vertices> <edges>')")]
    InvalidHeader { line: String },

    #[error("invalid edge '{line}' (expected '<u> <v>' with 0-based vertex indices)")]
    InvalidEdge { line: String },

    #[error("vertex {vertex} is out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("edge list ended early: expected {expected} edges, found {found}")]
    TruncatedEdgeList { expected: usize, found: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
