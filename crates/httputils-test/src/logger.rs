//! Recording logger.

use httputils_core::Logger;
use parking_lot::Mutex;

/// A [`Logger`] that keeps every printed message in memory.
#[derive(Debug, Default)]
pub struct MockLogger {
    messages: Mutex<Vec<String>>,
}

impl MockLogger {
    /// Creates an empty logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the printed messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Returns how many times `print` was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.messages.lock().len()
    }

    /// Panics unless exactly one message, equal to `expected`, was printed.
    pub fn assert_printed_once(&self, expected: &str) {
        let messages = self.messages.lock();
        assert_eq!(
            messages.as_slice(),
            [expected],
            "expected exactly one logged message"
        );
    }

    /// Panics if anything was printed.
    pub fn assert_silent(&self) {
        let messages = self.messages.lock();
        assert!(messages.is_empty(), "unexpected log messages: {messages:?}");
    }
}

impl Logger for MockLogger {
    fn print(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_messages_in_order() {
        let logger = MockLogger::new();
        logger.assert_silent();

        logger.print("first");
        logger.print("second");

        assert_eq!(logger.messages(), vec!["first", "second"]);
        assert_eq!(logger.call_count(), 2);
    }

    #[test]
    fn test_assert_printed_once() {
        let logger = MockLogger::new();
        logger.print("only");
        logger.assert_printed_once("only");
    }

    #[test]
    #[should_panic(expected = "exactly one")]
    fn test_assert_printed_once_rejects_repeats() {
        let logger = MockLogger::new();
        logger.print("twice");
        logger.print("twice");
        logger.assert_printed_once("twice");
    }
}
