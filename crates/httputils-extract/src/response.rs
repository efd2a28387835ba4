//! JSON and error response writers.
//!
//! | Writer | Content-Type | Status |
//! |--------|--------------|--------|
//! | [`handle_json`] | `application/json` | left to the writer's default (200) |
//! | [`handle_error`] | not set | the given status |
//!
//! Both write straight into a [`ResponseWriter`] and report nothing back:
//! a JSON serialization failure turns into a logged plain-text 500.

use httputils_core::{Logger, ResponseWriter};
use http::{header, HeaderValue, StatusCode};
use serde::Serialize;
use std::fmt;

/// Content type set by [`handle_json`].
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serializes `data` as JSON and writes it as the response body.
///
/// No status is written on success. If serialization fails, the failure is
/// passed to [`handle_error`] with status 500 and nothing else is written.
///
/// # Example
///
/// ```
/// use httputils_extract::handle_json;
/// use httputils_core::Logger;
/// use http::Response;
///
/// struct Discard;
/// impl Logger for Discard {
///     fn print(&self, _message: &str) {}
/// }
///
/// let mut response = Response::new(Vec::new());
/// handle_json(&mut response, &Discard, &serde_json::json!({"order": 23}));
///
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.headers()["content-type"], "application/json");
/// assert_eq!(response.body(), br#"{"order":23}"#);
/// ```
pub fn handle_json<W, L, T>(writer: &mut W, logger: &L, data: &T)
where
    W: ResponseWriter + ?Sized,
    L: Logger + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = match serde_json::to_vec(data) {
        Ok(bytes) => bytes,
        Err(err) => {
            handle_error(
                writer,
                logger,
                StatusCode::INTERNAL_SERVER_ERROR,
                format_args!("unable to marshal the data: {err}"),
            );
            return;
        }
    };

    writer.set_header(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    writer.write_body(&bytes);
}

/// Formats a message, logs it, and writes it with `status` as a plain body.
///
/// See [`handle_error!`](crate::handle_error!) for the `format!`-style form.
pub fn handle_error<W, L>(writer: &mut W, logger: &L, status: StatusCode, args: fmt::Arguments<'_>)
where
    W: ResponseWriter + ?Sized,
    L: Logger + ?Sized,
{
    let message = args.to_string();
    logger.print(&message);

    writer.write_status(status);
    writer.write_body(message.as_bytes());
}

/// Formats a message, logs it, and writes it as an error response.
///
/// ```
/// use httputils_extract::handle_error;
/// use httputils_core::Logger;
/// use http::{Response, StatusCode};
///
/// struct Discard;
/// impl Logger for Discard {
///     fn print(&self, _message: &str) {}
/// }
///
/// let mut response = Response::new(Vec::new());
/// let id = 23;
/// handle_error!(&mut response, &Discard, StatusCode::NOT_FOUND, "todo {} not found", id);
///
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// assert_eq!(response.body(), b"todo 23 not found");
/// ```
#[macro_export]
macro_rules! handle_error {
    ($writer:expr, $logger:expr, $status:expr, $($arg:tt)+) => {
        $crate::handle_error($writer, $logger, $status, ::std::format_args!($($arg)+))
    };
}
