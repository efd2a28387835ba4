//! # httputils core
//!
//! Shared building blocks for the httputils crates:
//!
//! - [`HttpUtilsError`] and [`ErrorKind`]: the error returned by every helper
//! - [`Date`]: a `YYYY-MM-DD` calendar date
//! - [`Logger`], [`HttpClient`], [`ResponseWriter`]: the collaborator
//!   capabilities the helpers are written against

#![doc(html_root_url = "https://docs.rs/httputils-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod capability;
mod date;
mod error;

pub use capability::{HttpClient, Logger, ResponseBody, ResponseWriter};
pub use date::{Date, DateParseError, DATE_FORMAT, MAX_YEAR, MIN_YEAR};
pub use error::{BoxError, ErrorKind, HttpUtilsError, Result};
