//! # httputils test
//!
//! Test doubles for the collaborator capabilities in `httputils-core`, so
//! handlers and helpers can be exercised without a network or a server.
//!
//! | Double | Stands in for | Records |
//! |--------|---------------|---------|
//! | [`MockLogger`] | `Logger` | every printed message |
//! | [`MockHttpClient`] | `HttpClient` | every request; replays scripted replies |
//! | [`ResponseRecorder`] | `ResponseWriter` | headers, status writes, body |
//! | [`TrackedBody`] | a response body | how many times it was dropped |
//! | [`TimeoutReader`] | a slow stream | fails with `TimedOut` on the second read |
//!
//! ## Example
//!
//! ```
//! use httputils_core::{HttpClient, Logger};
//! use httputils_test::{MockHttpClient, MockLogger};
//! use http::StatusCode;
//!
//! let logger = MockLogger::new();
//! logger.print("hello");
//! assert_eq!(logger.messages(), vec!["hello"]);
//!
//! let client = MockHttpClient::new().respond(StatusCode::OK, &b"{}"[..]);
//! let request = http::Request::get("http://example.com/").body(()).unwrap();
//! let response = client.send(request).unwrap();
//! assert_eq!(response.status(), StatusCode::OK);
//! client.assert_expectations();
//! ```

#![doc(html_root_url = "https://docs.rs/httputils-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod body;
mod client;
mod error;
mod logger;
mod recorder;
mod request;

pub use body::{DropCounter, TimeoutReader, TrackedBody};
pub use client::{MockHttpClient, RecordedRequest};
pub use error::TestError;
pub use logger::MockLogger;
pub use recorder::ResponseRecorder;
pub use request::{TestRequest, TestRequestBuilder};
