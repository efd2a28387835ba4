//! Recording response writer.

use bytes::Bytes;
use http::{header, HeaderMap, HeaderName, HeaderValue, Response, StatusCode};
use httputils_core::ResponseWriter;

/// A [`ResponseWriter`] that records everything written to it.
///
/// The status reads as `200 OK` until something writes another one;
/// [`status_writes`](ResponseRecorder::status_writes) tells whether a status
/// was written explicitly.
#[derive(Debug, Clone)]
pub struct ResponseRecorder {
    headers: HeaderMap,
    status_writes: Vec<StatusCode>,
    body: Vec<u8>,
}

impl Default for ResponseRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
            status_writes: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Returns the effective status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status_writes.last().copied().unwrap_or(StatusCode::OK)
    }

    /// Returns every status written, in order.
    #[must_use]
    pub fn status_writes(&self) -> Vec<StatusCode> {
        self.status_writes.clone()
    }

    /// Returns the recorded headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the Content-Type header as a string.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Returns the body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Converts the recording into an `http::Response`.
    #[must_use]
    pub fn into_response(self) -> Response<Bytes> {
        let status = self.status();
        let mut response = Response::new(Bytes::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseWriter for ResponseRecorder {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status_writes.push(status);
    }

    fn write_body(&mut self, body: &[u8]) {
        self.body.extend_from_slice(body);
    }
}
