//! `Authorization` header values from environment credentials.
//!
//! Missing credentials are not an error: the builders return an empty string,
//! which [`load_json_data`](crate::load_json_data) treats as "send no
//! `Authorization` header".

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::env;

/// Builds a `Basic` header value from the variables named `username_var`
/// and `password_var`.
///
/// Returns an empty string if either variable is unset or empty.
///
/// # Example
///
/// ```
/// use httputils_client::make_basic_auth_header;
///
/// std::env::set_var("DOC_BASIC_USERNAME", "username");
/// std::env::set_var("DOC_BASIC_PASSWORD", "password");
///
/// assert_eq!(
///     make_basic_auth_header("DOC_BASIC_USERNAME", "DOC_BASIC_PASSWORD"),
///     "Basic dXNlcm5hbWU6cGFzc3dvcmQ="
/// );
/// assert_eq!(make_basic_auth_header("DOC_BASIC_USERNAME", "DOC_BASIC_UNSET"), "");
/// ```
pub fn make_basic_auth_header(username_var: &str, password_var: &str) -> String {
    let username = read_var(username_var);
    let password = read_var(password_var);
    if username.is_empty() || password.is_empty() {
        return String::new();
    }

    let credentials = STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {credentials}")
}

/// Builds a `Bearer` header value from the variable named `token_var`.
///
/// Returns an empty string if the variable is unset or empty.
pub fn make_bearer_auth_header(token_var: &str) -> String {
    let token = read_var(token_var);
    if token.is_empty() {
        return String::new();
    }

    format!("Bearer {token}")
}

// Unset and non-Unicode values both read as empty.
fn read_var(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

/// Which credentials to send, named by environment variable.
///
/// `httputils-config` builds this from its `[auth]` section.
///
/// # Example
///
/// ```
/// use httputils_client::AuthScheme;
///
/// std::env::set_var("DOC_SCHEME_TOKEN", "token");
///
/// let scheme = AuthScheme::Bearer { token_var: "DOC_SCHEME_TOKEN".into() };
/// assert_eq!(scheme.header(), "Bearer token");
/// assert_eq!(AuthScheme::None.header(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthScheme {
    /// Send no credentials.
    #[default]
    None,
    /// HTTP Basic credentials.
    Basic {
        /// Variable holding the username.
        username_var: String,
        /// Variable holding the password.
        password_var: String,
    },
    /// Bearer token.
    Bearer {
        /// Variable holding the token.
        token_var: String,
    },
}

impl AuthScheme {
    /// Resolves the header value from the current environment.
    #[must_use]
    pub fn header(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Basic {
                username_var,
                password_var,
            } => make_basic_auth_header(username_var, password_var),
            Self::Bearer { token_var } => make_bearer_auth_header(token_var),
        }
    }
}
