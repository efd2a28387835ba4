//! Form values.
//!
//! [`FormValues`] collects the key/value pairs a handler can read by name:
//! URL query parameters, and for `POST`, `PUT` and `PATCH` requests with a
//! URL-encoded body, the body fields as well.

use http::{header, Method, Request, Uri};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered form key/value pairs.
///
/// Body fields come before query parameters, so [`FormValues::get`] prefers
/// the body when both carry the same key.
///
/// # Example
///
/// ```
/// use httputils_extract::FormValues;
///
/// let form = FormValues::from_query("limit=10&date=2006-01-02&limit=20");
/// assert_eq!(form.get("limit"), Some("10"));
/// assert_eq!(form.get_all("limit").collect::<Vec<_>>(), vec!["10", "20"]);
/// assert_eq!(form.get("offset"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    /// Creates an empty set of values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URL query string (without the leading `?`).
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self {
            pairs: parse_pairs(query.as_bytes()),
        }
    }

    /// Parses a URL-encoded request body.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        Self {
            pairs: parse_pairs(body),
        }
    }

    /// Parses the query part of a URI.
    #[must_use]
    pub fn from_uri(uri: &Uri) -> Self {
        uri.query().map(Self::from_query).unwrap_or_default()
    }

    /// Collects body fields and query parameters from a request.
    ///
    /// The body only contributes for `POST`, `PUT` and `PATCH` requests whose
    /// Content-Type is `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn from_request<B: AsRef<[u8]>>(request: &Request<B>) -> Self {
        let mut values = if has_form_body(request) {
            Self::from_body(request.body().as_ref())
        } else {
            Self::new()
        };
        values.extend(Self::from_uri(request.uri()));
        values
    }

    /// Appends a pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Extend<(String, String)> for FormValues {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl IntoIterator for FormValues {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

fn has_form_body<B>(request: &Request<B>) -> bool {
    let method = request.method();
    if method != Method::POST && method != Method::PUT && method != Method::PATCH {
        return false;
    }

    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

// Malformed input yields no pairs rather than an error.
fn parse_pairs(input: &[u8]) -> Vec<(String, String)> {
    serde_urlencoded::from_bytes(input).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring malformed form data");
        Vec::new()
    })
}
