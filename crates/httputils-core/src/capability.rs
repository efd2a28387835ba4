//! Collaborator capabilities.
//!
//! The helpers never talk to concrete infrastructure. They take one of these
//! traits instead, so a handler can pass its real logger, client or response
//! and a test can pass a recording double.

use crate::error::BoxError;
use http::{HeaderName, HeaderValue, Request, Response, StatusCode};
use std::io::Read;

/// Body of a response returned by an [`HttpClient`].
///
/// Dropping the body releases the underlying stream.
pub type ResponseBody = Box<dyn Read + Send>;

/// A sink for log messages.
pub trait Logger {
    /// Prints one message.
    fn print(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn print(&self, message: &str) {
        (**self).print(message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn print(&self, message: &str) {
        (**self).print(message);
    }
}

/// Something that can send an HTTP request and return its response.
///
/// # Example
///
/// ```
/// use httputils_core::{BoxError, HttpClient, ResponseBody};
/// use http::{Request, Response, StatusCode};
///
/// struct Canned;
///
/// impl HttpClient for Canned {
///     fn send(&self, _request: Request<()>) -> Result<Response<ResponseBody>, BoxError> {
///         let body: ResponseBody = Box::new(&b"{}"[..]);
///         Ok(Response::builder().status(StatusCode::OK).body(body)?)
///     }
/// }
/// ```
pub trait HttpClient {
    /// Sends the request.
    fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, BoxError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, BoxError> {
        (**self).send(request)
    }
}

impl<C: HttpClient + ?Sized> HttpClient for Box<C> {
    fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, BoxError> {
        (**self).send(request)
    }
}

/// Destination of an HTTP response being written by a handler.
pub trait ResponseWriter {
    /// Sets a header, replacing any previous value.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Writes the status code.
    fn write_status(&mut self, status: StatusCode);

    /// Appends bytes to the body.
    fn write_body(&mut self, body: &[u8]);
}

impl<W: ResponseWriter + ?Sized> ResponseWriter for &mut W {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        (**self).set_header(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        (**self).write_status(status);
    }

    fn write_body(&mut self, body: &[u8]) {
        (**self).write_body(body);
    }
}

/// A fresh `Response::new(Vec::new())` has status 200, which is the status a
/// handler gets when it never calls [`ResponseWriter::write_status`].
impl ResponseWriter for Response<Vec<u8>> {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: &[u8]) {
        self.body_mut().extend_from_slice(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header;
    use std::cell::RefCell;

    struct Collect(RefCell<Vec<String>>);

    impl Logger for Collect {
        fn print(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_response_defaults_to_ok() {
        let response = Response::new(Vec::<u8>::new());
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_response_writer_for_http_response() {
        let mut response = Response::new(Vec::new());

        response.set_header(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        response.set_header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response.write_status(StatusCode::CREATED);
        response.write_body(b"{\"a\":");
        response.write_body(b"1}");

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(response.body(), b"{\"a\":1}");
    }

    #[test]
    fn test_logger_through_references() {
        let logger = Collect(RefCell::new(Vec::new()));

        (&logger).print("one");
        let boxed: Box<&Collect> = Box::new(&logger);
        boxed.print("two");

        assert_eq!(*logger.0.borrow(), vec!["one", "two"]);
    }
}
