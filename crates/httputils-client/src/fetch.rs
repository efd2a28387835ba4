//! Remote JSON fetcher.

use http::{header, Method, Request, StatusCode};
use httputils_core::{HttpClient, HttpUtilsError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use tracing::debug;

/// Fetches `url` with a GET request and decodes the JSON body into `data`.
///
/// `auth_header` is sent as `Authorization` unless it is empty. Any status
/// other than `200 OK` fails with [`HttpUtilsError::UnexpectedStatus`],
/// carrying the status and the body text. The response body is dropped
/// before returning, whatever the outcome.
///
/// # Example
///
/// ```
/// use httputils_client::load_json_data;
/// use httputils_core::{BoxError, HttpClient, ResponseBody};
/// use http::{Request, Response};
///
/// struct Canned(&'static [u8]);
///
/// impl HttpClient for Canned {
///     fn send(&self, _request: Request<()>) -> Result<Response<ResponseBody>, BoxError> {
///         Ok(Response::new(Box::new(self.0) as ResponseBody))
///     }
/// }
///
/// let mut order: i64 = 0;
/// load_json_data(&Canned(b"23"), "http://example.com/order", "", &mut order).unwrap();
/// assert_eq!(order, 23);
/// ```
pub fn load_json_data<C, T>(client: &C, url: &str, auth_header: &str, data: &mut T) -> Result<()>
where
    C: HttpClient + ?Sized,
    T: DeserializeOwned,
{
    let request = build_request(url, auth_header)?;

    let response = client.send(request).map_err(HttpUtilsError::transport)?;
    let (parts, mut body) = response.into_parts();

    let mut bytes = Vec::new();
    let read = body.read_to_end(&mut bytes);
    drop(body);
    read.map_err(|e| HttpUtilsError::read("unable to read the response body", e))?;

    debug!(url, status = parts.status.as_u16(), bytes = bytes.len(), "response loaded");

    if parts.status != StatusCode::OK {
        return Err(HttpUtilsError::UnexpectedStatus {
            status: parts.status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    *data = serde_json::from_slice(&bytes)
        .map_err(|e| HttpUtilsError::decode("unable to unmarshal the response body", e))?;

    Ok(())
}

fn build_request(url: &str, auth_header: &str) -> Result<Request<()>> {
    let mut builder = Request::builder().method(Method::GET).uri(url);
    if !auth_header.is_empty() {
        builder = builder.header(header::AUTHORIZATION, auth_header);
    }

    builder.body(()).map_err(HttpUtilsError::request_build)
}
