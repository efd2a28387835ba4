//! Configuration sections.

use httputils_client::AuthScheme;
use serde::{Deserialize, Serialize};

/// Which `Authorization` header to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthKind {
    /// No header.
    #[default]
    None,
    /// `Basic` from a username and a password variable.
    Basic,
    /// `Bearer` from a token variable.
    Bearer,
}

/// Credential configuration.
///
/// Holds the *names* of environment variables, never the secrets themselves.
/// The variables are read when [`AuthConfig::header`] is called.
///
/// ```toml
/// [auth]
/// scheme = "basic"
/// username_var = "API_USERNAME"
/// password_var = "API_PASSWORD"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// Header scheme.
    pub scheme: AuthKind,

    /// Variable holding the Basic username.
    pub username_var: String,

    /// Variable holding the Basic password.
    pub password_var: String,

    /// Variable holding the Bearer token.
    pub token_var: String,
}

impl AuthConfig {
    /// Bearer credentials read from `token_var`.
    #[must_use]
    pub fn bearer(token_var: impl Into<String>) -> Self {
        Self {
            scheme: AuthKind::Bearer,
            token_var: token_var.into(),
            ..Self::default()
        }
    }

    /// Basic credentials read from `username_var` and `password_var`.
    #[must_use]
    pub fn basic(username_var: impl Into<String>, password_var: impl Into<String>) -> Self {
        Self {
            scheme: AuthKind::Basic,
            username_var: username_var.into(),
            password_var: password_var.into(),
            ..Self::default()
        }
    }

    /// The scheme this configuration selects.
    #[must_use]
    pub fn to_scheme(&self) -> AuthScheme {
        match self.scheme {
            AuthKind::None => AuthScheme::None,
            AuthKind::Basic => AuthScheme::Basic {
                username_var: self.username_var.clone(),
                password_var: self.password_var.clone(),
            },
            AuthKind::Bearer => AuthScheme::Bearer {
                token_var: self.token_var.clone(),
            },
        }
    }

    /// Resolves the header value from the current environment.
    ///
    /// Empty when the configured variables are unset or empty.
    #[must_use]
    pub fn header(&self) -> String {
        self.to_scheme().header()
    }
}

impl From<&AuthConfig> for AuthScheme {
    fn from(config: &AuthConfig) -> Self {
        config.to_scheme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_is_none() {
        let config = AuthConfig::default();
        assert_eq!(config.scheme, AuthKind::None);
        assert_eq!(config.to_scheme(), AuthScheme::None);
        assert_eq!(config.header(), "");
    }

    #[test]
    fn test_to_scheme() {
        assert_eq!(
            AuthScheme::from(&AuthConfig::bearer("API_TOKEN")),
            AuthScheme::Bearer {
                token_var: "API_TOKEN".to_string()
            }
        );
        assert_eq!(
            AuthConfig::basic("API_USERNAME", "API_PASSWORD").to_scheme(),
            AuthScheme::Basic {
                username_var: "API_USERNAME".to_string(),
                password_var: "API_PASSWORD".to_string(),
            }
        );
    }

    #[test]
    fn test_header_reads_environment() {
        env::set_var("TEST_AUTH_CONFIG_USERNAME", "username");
        env::set_var("TEST_AUTH_CONFIG_PASSWORD", "password");

        let config = AuthConfig::basic("TEST_AUTH_CONFIG_USERNAME", "TEST_AUTH_CONFIG_PASSWORD");

        assert_eq!(config.header(), "Basic dXNlcm5hbWU6cGFzc3dvcmQ=");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<AuthConfig, _> = toml::from_str(r#"token = "secret""#);
        assert!(result.is_err());
    }
}
