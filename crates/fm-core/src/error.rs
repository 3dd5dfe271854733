//! Base error type for `fm-core`.
//!
//! Sub-crates define their own error enums and wrap `FmError` as one variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FmError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fm-core`.
pub type FmResult<T> = Result<T, FmError>;
