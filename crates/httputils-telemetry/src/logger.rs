//! [`Logger`] backed by `tracing`.

use httputils_core::Logger;
use tracing::Level;

/// Forwards [`Logger::print`] calls to `tracing` events.
///
/// Events are emitted under the `httputils` target at [`Level::ERROR`] unless
/// another level is chosen with [`TracingLogger::with_level`].
///
/// # Example
///
/// ```
/// use httputils_core::Logger;
/// use httputils_telemetry::TracingLogger;
///
/// let logger = TracingLogger::new().with_level(tracing::Level::WARN);
/// logger.print("unable to marshal the data");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingLogger {
    level: Level,
}

impl TracingLogger {
    /// Creates a logger emitting at `ERROR`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: Level::ERROR,
        }
    }

    /// Sets the level events are emitted at.
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// The level events are emitted at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn print(&self, message: &str) {
        // Event levels are static, so dispatch per level.
        match self.level {
            Level::TRACE => tracing::trace!(target: "httputils", "{message}"),
            Level::DEBUG => tracing::debug!(target: "httputils", "{message}"),
            Level::INFO => tracing::info!(target: "httputils", "{message}"),
            Level::WARN => tracing::warn!(target: "httputils", "{message}"),
            _ => tracing::error!(target: "httputils", "{message}"),
        }
    }
}
