//! Main configuration type.

use httputils_telemetry::LogConfig;
use serde::{Deserialize, Serialize};

use crate::{AuthConfig, AuthKind, ConfigError};

/// Complete httputils configuration.
///
/// # Example
///
/// ```
/// use httputils_config::{AuthKind, HttpUtilsConfig};
///
/// let config = HttpUtilsConfig::default();
/// assert_eq!(config.auth.scheme, AuthKind::None);
/// assert_eq!(config.logging.level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct HttpUtilsConfig {
    /// Outgoing credentials.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging setup.
    #[serde(default)]
    pub logging: LogConfig,
}

impl HttpUtilsConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - the Basic scheme is missing a variable name
    /// - the Bearer scheme is missing its token variable name
    /// - the log level is not a valid filter
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.auth.scheme {
            AuthKind::None => {}
            AuthKind::Basic => {
                if self.auth.username_var.is_empty() {
                    return Err(ConfigError::invalid_value(
                        "auth.username_var",
                        "required for the basic scheme",
                    ));
                }
                if self.auth.password_var.is_empty() {
                    return Err(ConfigError::invalid_value(
                        "auth.password_var",
                        "required for the basic scheme",
                    ));
                }
            }
            AuthKind::Bearer => {
                if self.auth.token_var.is_empty() {
                    return Err(ConfigError::invalid_value(
                        "auth.token_var",
                        "required for the bearer scheme",
                    ));
                }
            }
        }

        self.logging
            .validate()
            .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))
    }

    /// Development preset: pretty `debug` logs.
    #[must_use]
    pub fn development() -> Self {
        Self {
            logging: LogConfig::development(),
            ..Self::default()
        }
    }

    /// Production preset: JSON `info` logs.
    #[must_use]
    pub fn production() -> Self {
        Self {
            logging: LogConfig::production(),
            ..Self::default()
        }
    }
}
