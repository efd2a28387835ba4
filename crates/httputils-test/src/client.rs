//! Scripted HTTP client.

use httputils_core::{BoxError, HttpClient, ResponseBody};
use http::{HeaderMap, Method, Request, Response, StatusCode, Uri};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::{self, Read};

/// A request as seen by [`MockHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: Method,
    /// Request URI.
    pub uri: Uri,
    /// Request headers.
    pub headers: HeaderMap,
}

enum Reply {
    Respond(StatusCode, ResponseBody),
    Fail(io::ErrorKind, String),
}

/// An [`HttpClient`] that replays scripted replies in order.
///
/// Each call to `send` consumes the next reply. A call with no reply left
/// fails with a transport error, and [`assert_expectations`] panics if some
/// reply was never consumed.
///
/// [`assert_expectations`]: MockHttpClient::assert_expectations
#[derive(Default)]
pub struct MockHttpClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpClient {
    /// Creates a client with no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    pub fn respond(self, status: StatusCode, body: impl Read + Send + 'static) -> Self {
        self.replies
            .lock()
            .push_back(Reply::Respond(status, Box::new(body)));
        self
    }

    /// Queues a transport failure.
    pub fn fail(self, kind: io::ErrorKind, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .push_back(Reply::Fail(kind, message.into()));
        self
    }

    /// Returns the requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Returns how many times `send` was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Panics if any scripted reply was not consumed.
    pub fn assert_expectations(&self) {
        let remaining = self.replies.lock().len();
        assert_eq!(remaining, 0, "{remaining} scripted replies were never used");
    }
}

impl std::fmt::Debug for MockHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpClient")
            .field("pending_replies", &self.replies.lock().len())
            .field("requests", &self.requests.lock())
            .finish()
    }
}

impl HttpClient for MockHttpClient {
    fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, BoxError> {
        let (parts, ()) = request.into_parts();
        self.requests.lock().push(RecordedRequest {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
        });

        match self.replies.lock().pop_front() {
            Some(Reply::Respond(status, body)) => {
                let mut response = Response::new(body);
                *response.status_mut() = status;
                Ok(response)
            }
            Some(Reply::Fail(kind, message)) => Err(Box::new(io::Error::new(kind, message))),
            None => Err("no scripted reply left".into()),
        }
    }
}
