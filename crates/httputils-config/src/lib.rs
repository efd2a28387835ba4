//! Typed configuration for httputils.
//!
//! Describes which credentials outgoing requests carry and how logs are
//! emitted. Values come from layered sources:
//! - TOML and JSON files
//! - `.env` files
//! - prefixed environment variable overrides
//!
//! Unknown fields are rejected.
//!
//! # Configuration File Format
//!
//! ```toml
//! [auth]
//! scheme = "bearer"          # "none", "basic" or "bearer"
//! token_var = "API_TOKEN"    # name of the variable, not the token
//!
//! [logging]
//! enabled = true
//! level = "info"
//! json_format = true
//! ```
//!
//! # Environment Variable Overrides
//!
//! With `with_env_prefix("HTTPUTILS")`:
//!
//! - `HTTPUTILS__AUTH__SCHEME=basic`
//! - `HTTPUTILS__AUTH__USERNAME_VAR=API_USERNAME`
//! - `HTTPUTILS__AUTH__PASSWORD_VAR=API_PASSWORD`
//! - `HTTPUTILS__AUTH__TOKEN_VAR=API_TOKEN`
//! - `HTTPUTILS__LOGGING__ENABLED=false`
//! - `HTTPUTILS__LOGGING__LEVEL=debug`
//! - `HTTPUTILS__LOGGING__JSON_FORMAT=false`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::HttpUtilsConfig;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{AuthConfig, AuthKind};
