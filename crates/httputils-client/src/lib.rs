//! # httputils client
//!
//! The outgoing side of the httputils helpers:
//!
//! - [`make_basic_auth_header`] / [`make_bearer_auth_header`]: `Authorization`
//!   values built from environment variables, empty when credentials are absent
//! - [`AuthScheme`]: the same, driven by configuration
//! - [`load_json_data`]: GET a URL through any [`HttpClient`] and decode the
//!   JSON body
//!
//! [`ReqwestClient`] wraps a `reqwest::blocking::Client` as an
//! [`HttpClient`]:
//!
//! ```no_run
//! use httputils_client::{load_json_data, make_bearer_auth_header, ReqwestClient};
//! use std::collections::HashMap;
//!
//! let client = ReqwestClient::new();
//! let auth = make_bearer_auth_header("API_TOKEN");
//!
//! let mut todos: Vec<HashMap<String, serde_json::Value>> = Vec::new();
//! load_json_data(&client, "http://localhost:8080/api/v1/todos", &auth, &mut todos)?;
//! # Ok::<(), httputils_core::HttpUtilsError>(())
//! ```
//!
//! [`HttpClient`]: httputils_core::HttpClient

#![doc(html_root_url = "https://docs.rs/httputils-client/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod auth;
mod fetch;
mod transport;

pub use auth::{make_basic_auth_header, make_bearer_auth_header, AuthScheme};
pub use fetch::load_json_data;
pub use transport::ReqwestClient;
