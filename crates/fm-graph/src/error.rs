//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `fm-graph`.
///
/// "No path" is deliberately absent: an unreachable destination is an empty
/// [`Route`](crate::Route), not an error.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("level {0:?} not found")]
    LevelNotFound(String),

    #[error("vertex index {index} out of range for level {level:?} ({len} vertices)")]
    VertexOutOfRange {
        level: String,
        index: usize,
        len:   usize,
    },

    #[error("nav graph parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
