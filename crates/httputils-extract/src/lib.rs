//! # httputils extract
//!
//! Helpers for the request and response sides of an HTTP handler.
//!
//! ## Extractors
//!
//! | Helper | Source | Result |
//! |--------|--------|--------|
//! | [`read_json_data`] | any `Read` | JSON decoded into `&mut T` |
//! | [`get_id_from_url`] | URL path | first `/<digits>` segment as `i64` |
//! | [`get_date_from_url`] | URL path | first `/YYYY-MM-DD` segment as [`Date`] |
//! | [`get_int_form_value`] | [`FormValues`] | bounded `i64` |
//! | [`get_date_form_value`] | [`FormValues`] | [`Date`] |
//!
//! ## Example
//!
//! ```rust
//! use httputils_extract::{get_id_from_url, get_int_form_value, FormValues};
//! use http::Request;
//!
//! let request = Request::get("http://example.com/api/v1/todos/23?limit=10")
//!     .body(Vec::<u8>::new())
//!     .unwrap();
//!
//! let id = get_id_from_url(request.uri().path()).unwrap();
//! let form = FormValues::from_request(&request);
//! let limit = match get_int_form_value(&form, "limit", 1, 100) {
//!     Ok(limit) => limit,
//!     Err(err) if err.is_key_missing() => 20,
//!     Err(err) => panic!("{err}"),
//! };
//!
//! assert_eq!((id, limit), (23, 10));
//! ```
//!
//! ## Responses
//!
//! [`handle_json`] writes a JSON body; [`handle_error`] (and the
//! [`handle_error!`] macro) logs a message and writes it with a status.
//!
//! [`Date`]: httputils_core::Date

#![doc(html_root_url = "https://docs.rs/httputils-extract/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod form;
mod json;
mod request;
pub mod response;

pub use form::FormValues;
pub use json::read_json_data;
pub use request::{
    get_date_form_value, get_date_from_url, get_id_from_url, get_int_form_value, DATE_PATTERN,
    ID_PATTERN,
};
pub use response::{handle_error, handle_json, JSON_CONTENT_TYPE};
