//! Error types for httputils.
//!
//! This module provides the [`HttpUtilsError`] type returned by every fallible
//! helper in the workspace, and [`ErrorKind`], a plain classification that
//! callers can compare by identity.
//!
//! | `ErrorKind` | Raised by | Suggested status |
//! |---|---|---|
//! | `Read` | body readers | 500 |
//! | `Decode` | JSON decoders | 400 |
//! | `RequestBuild` | remote fetcher | 500 |
//! | `Transport` | remote fetcher | 502 |
//! | `UnexpectedStatus` | remote fetcher | 502 |
//! | `NotFound` | URL extractors | 400 |
//! | `Parse` | URL and form extractors | 400 |
//! | `Range` | form extractors | 400 |
//! | `KeyMissing` | form extractors | 400 |

use http::StatusCode;
use thiserror::Error;

/// Boxed error used at capability boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using [`HttpUtilsError`].
pub type Result<T> = std::result::Result<T, HttpUtilsError>;

/// Classification of an [`HttpUtilsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Underlying stream or body read failed.
    Read,
    /// Bytes were read but are not valid JSON for the destination.
    Decode,
    /// The outgoing request could not be constructed.
    RequestBuild,
    /// The client failed to deliver the request.
    Transport,
    /// A response arrived with a status other than `200 OK`.
    UnexpectedStatus,
    /// A required pattern did not match the URL path.
    NotFound,
    /// A matched or looked-up value failed to parse.
    Parse,
    /// A parsed integer fell outside the requested bounds.
    Range,
    /// A required form key was absent or empty.
    KeyMissing,
}

/// Standard error type for httputils.
///
/// Every variant carries a short context prefix naming the step that failed,
/// followed by the underlying cause where there is one.
///
/// # Example
///
/// ```
/// use httputils_core::{ErrorKind, HttpUtilsError};
///
/// let err = HttpUtilsError::KeyMissing;
/// assert_eq!(err.kind(), ErrorKind::KeyMissing);
/// assert!(err.is_key_missing());
/// assert_eq!(err.to_string(), "key is missed");
/// ```
#[derive(Error, Debug)]
pub enum HttpUtilsError {
    /// Reading a stream failed.
    #[error("{context}: {source}")]
    Read {
        /// Step that was reading.
        context: &'static str,
        /// The I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// JSON decoding failed.
    #[error("{context}: {source}")]
    Decode {
        /// Step that was decoding.
        context: &'static str,
        /// The decoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be built.
    #[error("unable to create the request: {source}")]
    RequestBuild {
        /// The builder failure.
        #[source]
        source: BoxError,
    },

    /// The client could not send the request.
    #[error("unable to send the request: {source}")]
    Transport {
        /// The client failure.
        #[source]
        source: BoxError,
    },

    /// The response status was not `200 OK`.
    #[error("request was failed: {} {body}", .status.as_u16())]
    UnexpectedStatus {
        /// Status code of the response.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// No match for a required pattern.
    #[error("unable to find {what}")]
    NotFound {
        /// What was being looked for, e.g. "an ID".
        what: &'static str,
    },

    /// A value failed to parse.
    #[error("{context}: {source}")]
    Parse {
        /// Step that was parsing.
        context: &'static str,
        /// The parser failure.
        #[source]
        source: BoxError,
    },

    /// A value is below the lower bound.
    #[error("value too less")]
    TooLess {
        /// Parsed value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
    },

    /// A value is above the upper bound.
    #[error("value too greater")]
    TooGreater {
        /// Parsed value.
        value: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// A required form key is absent or empty.
    #[error("key is missed")]
    KeyMissing,
}

impl HttpUtilsError {
    /// Creates a read error with a context prefix.
    #[must_use]
    pub fn read(context: &'static str, source: std::io::Error) -> Self {
        Self::Read { context, source }
    }

    /// Creates a decode error with a context prefix.
    #[must_use]
    pub fn decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { context, source }
    }

    /// Creates a request build error.
    #[must_use]
    pub fn request_build(source: impl Into<BoxError>) -> Self {
        Self::RequestBuild {
            source: source.into(),
        }
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    /// Creates a parse error with a context prefix.
    #[must_use]
    pub fn parse(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Parse {
            context,
            source: source.into(),
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } => ErrorKind::Read,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::RequestBuild { .. } => ErrorKind::RequestBuild,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::TooLess { .. } | Self::TooGreater { .. } => ErrorKind::Range,
            Self::KeyMissing => ErrorKind::KeyMissing,
        }
    }

    /// Returns `true` if a required form key was absent or empty.
    #[must_use]
    pub fn is_key_missing(&self) -> bool {
        matches!(self, Self::KeyMissing)
    }

    /// Returns a suggested HTTP status for reporting this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Read | ErrorKind::RequestBuild => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Transport | ErrorKind::UnexpectedStatus => StatusCode::BAD_GATEWAY,
            ErrorKind::Decode
            | ErrorKind::NotFound
            | ErrorKind::Parse
            | ErrorKind::Range
            | ErrorKind::KeyMissing => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error() {
        let err = HttpUtilsError::read(
            "unable to read the JSON data",
            io::Error::new(io::ErrorKind::TimedOut, "timeout"),
        );

        assert_eq!(err.kind(), ErrorKind::Read);
        assert_eq!(err.to_string(), "unable to read the JSON data: timeout");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_decode_error() {
        let cause = serde_json::from_str::<u32>("incorrect").unwrap_err();
        let err = HttpUtilsError::decode("unable to unmarshal the JSON data", cause);

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err
            .to_string()
            .starts_with("unable to unmarshal the JSON data: "));
    }

    #[test]
    fn test_unexpected_status_message() {
        let err = HttpUtilsError::UnexpectedStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "error".to_string(),
        };

        assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
        assert_eq!(err.to_string(), "request was failed: 500 error");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_found_message() {
        let err = HttpUtilsError::NotFound { what: "an ID" };
        assert_eq!(err.to_string(), "unable to find an ID");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_range_errors_share_kind() {
        let less = HttpUtilsError::TooLess { value: 23, min: 50 };
        let greater = HttpUtilsError::TooGreater { value: 23, max: 10 };

        assert_eq!(less.kind(), ErrorKind::Range);
        assert_eq!(greater.kind(), ErrorKind::Range);
        assert_eq!(less.to_string(), "value too less");
        assert_eq!(greater.to_string(), "value too greater");
    }

    #[test]
    fn test_key_missing_identity() {
        let err = HttpUtilsError::KeyMissing;
        assert!(err.is_key_missing());
        assert!(matches!(err, HttpUtilsError::KeyMissing));

        let other = HttpUtilsError::parse("value is incorrect", "bad digit");
        assert!(!other.is_key_missing());
        assert_eq!(other.to_string(), "value is incorrect: bad digit");
    }
}
