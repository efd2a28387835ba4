//! # httputils telemetry
//!
//! Logging for the httputils helpers:
//!
//! - [`LogConfig`] and [`init_logging`]: install a `tracing-subscriber`
//!   registry with JSON or pretty output
//! - [`TracingLogger`]: a [`Logger`](httputils_core::Logger) that forwards to
//!   `tracing`, for passing to `handle_json` and `handle_error`

#![doc(html_root_url = "https://docs.rs/httputils-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod logger;
pub mod logging;

pub use error::TelemetryError;
pub use logger::TracingLogger;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
