//! Test error types.

use thiserror::Error;

/// Errors that can occur while building test fixtures.
#[derive(Debug, Error)]
pub enum TestError {
    /// Request building failed.
    #[error("Request build error: {0}")]
    RequestBuild(String),

    /// Header name or value is invalid.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Body encoding failed.
    #[error("Body encoding error: {0}")]
    Encode(String),
}
