//! # httputils
//!
//! Small helpers for the two sides of a JSON-over-HTTP service:
//!
//! - **Handlers**: pull typed values out of URL paths and form fields, read
//!   JSON request bodies, write JSON or plain-text error responses
//! - **Clients**: build `Authorization` headers from environment credentials
//!   and GET-and-decode remote JSON resources
//!
//! Every helper is written against small capability traits
//! ([`Logger`](core::Logger), [`HttpClient`](core::HttpClient),
//! [`ResponseWriter`](core::ResponseWriter)), so it works with whatever
//! server or client the caller already has.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use httputils::prelude::*;
//!
//! fn get_todo<W: ResponseWriter>(request: &http::Request<Vec<u8>>, writer: &mut W) {
//!     let logger = TracingLogger::new();
//!
//!     let id = match get_id_from_url(request.uri().path()) {
//!         Ok(id) => id,
//!         Err(err) => {
//!             handle_error!(writer, &logger, err.status_code(), "unable to get the ID: {}", err);
//!             return;
//!         }
//!     };
//!
//!     let client = ReqwestClient::new();
//!     let url = format!("http://todos.internal/api/v1/todos/{id}");
//!     let mut todo = serde_json::Value::Null;
//!     if let Err(err) = load_json_data(&client, &url, &make_bearer_auth_header("API_TOKEN"), &mut todo) {
//!         handle_error!(writer, &logger, err.status_code(), "unable to load the todo: {}", err);
//!         return;
//!     }
//!
//!     handle_json(writer, &logger, &todo);
//! }
//! ```
//!
//! ## Crates
//!
//! | Module | Crate |
//! |--------|-------|
//! | [`core`] | errors, [`Date`](core::Date), capability traits |
//! | [`extract`] | path/form extractors, JSON reader, response writers |
//! | [`client`] | auth headers, remote JSON fetcher |
//! | [`telemetry`] | logging setup, `tracing`-backed `Logger` |
//! | [`config`] | layered configuration for auth and logging |

#![doc(html_root_url = "https://docs.rs/httputils/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use httputils_core as core;

// Re-export extraction and response helpers
pub use httputils_extract as extract;

// Re-export client helpers
pub use httputils_client as client;

// Re-export logging setup
pub use httputils_telemetry as telemetry;

// Re-export configuration
pub use httputils_config as config;

/// Prelude module for convenient imports.
///
/// ```rust
/// use httputils::prelude::*;
///
/// assert_eq!(get_id_from_url("/api/v1/todos/23").unwrap(), 23);
/// ```
pub mod prelude {
    pub use httputils_core::{
        Date, ErrorKind, HttpClient, HttpUtilsError, Logger, ResponseWriter, Result,
    };

    pub use httputils_extract::{
        get_date_form_value, get_date_from_url, get_id_from_url, get_int_form_value, handle_error,
        handle_json, read_json_data, FormValues,
    };

    pub use httputils_client::{
        load_json_data, make_basic_auth_header, make_bearer_auth_header, AuthScheme, ReqwestClient,
    };

    pub use httputils_telemetry::{init_logging, LogConfig, TracingLogger};

    pub use httputils_config::{ConfigLoader, HttpUtilsConfig};
}
