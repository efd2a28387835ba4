//! [`HttpClient`] over `reqwest`'s blocking client.
//!
//! Timeouts, proxies and TLS are whatever the caller configured on the
//! `reqwest::blocking::Client`; nothing is added here.

use http::{Request, Response};
use httputils_core::{BoxError, HttpClient, ResponseBody};

/// A `reqwest::blocking::Client` usable wherever an [`HttpClient`] is
/// expected.
///
/// # Example
///
/// ```no_run
/// use httputils_client::{load_json_data, ReqwestClient};
/// use std::time::Duration;
///
/// let client = ReqwestClient::from(
///     reqwest::blocking::Client::builder()
///         .timeout(Duration::from_secs(5))
///         .build()?,
/// );
///
/// let mut order: i64 = 0;
/// load_json_data(&client, "http://localhost:8080/api/v1/order", "", &mut order)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Wraps a client built with `reqwest::blocking::Client::new()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the wrapped client.
    #[must_use]
    pub fn inner(&self) -> &reqwest::blocking::Client {
        &self.inner
    }

    /// Unwraps the client.
    #[must_use]
    pub fn into_inner(self) -> reqwest::blocking::Client {
        self.inner
    }
}

impl From<reqwest::blocking::Client> for ReqwestClient {
    fn from(inner: reqwest::blocking::Client) -> Self {
        Self { inner }
    }
}

impl HttpClient for ReqwestClient {
    fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, BoxError> {
        let (parts, ()) = request.into_parts();

        let upstream = self
            .inner
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .send()?;

        let status = upstream.status();
        let headers = upstream.headers().clone();

        let mut response = Response::new(Box::new(upstream) as ResponseBody);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httputils_core::ErrorKind;

    fn as_dyn_client(client: &ReqwestClient) -> &dyn HttpClient {
        client
    }

    #[test]
    fn test_wraps_configured_client() {
        let inner = reqwest::blocking::Client::builder().no_proxy().build().unwrap();
        let client = ReqwestClient::from(inner);

        let _ = as_dyn_client(&client);
        let _ = client.inner();
        let _unwrapped: reqwest::blocking::Client = client.into_inner();
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let client = ReqwestClient::from(
            reqwest::blocking::Client::builder()
                .no_proxy()
                .build()
                .unwrap(),
        );
        let mut data = serde_json::Value::Null;

        let err = crate::load_json_data(&client, "http://127.0.0.1:1/", "", &mut data).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
