//! Readers for exercising body handling.

use std::io::{self, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many times a [`TrackedBody`] was dropped.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(Arc<AtomicUsize>);

impl DropCounter {
    /// Returns the number of drops seen so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// A reader that reports when it is dropped.
///
/// Dropping a response body is how it gets closed, so tests use this to
/// check the body is released exactly once on every path.
///
/// # Example
///
/// ```
/// use httputils_test::TrackedBody;
///
/// let (body, closed) = TrackedBody::new(&b"{}"[..]);
/// assert_eq!(closed.count(), 0);
/// drop(body);
/// assert_eq!(closed.count(), 1);
/// ```
#[derive(Debug)]
pub struct TrackedBody<R> {
    inner: R,
    counter: DropCounter,
}

impl<R: Read> TrackedBody<R> {
    /// Wraps `inner` and returns the wrapper with its drop counter.
    pub fn new(inner: R) -> (Self, DropCounter) {
        let counter = DropCounter::default();
        let body = Self {
            inner,
            counter: counter.clone(),
        };
        (body, counter)
    }
}

impl<R: Read> Read for TrackedBody<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Drop for TrackedBody<R> {
    fn drop(&mut self) {
        self.counter.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// A reader that returns data once, then fails with `TimedOut`.
#[derive(Debug)]
pub struct TimeoutReader<R> {
    inner: R,
    reads: usize,
}

impl<R: Read> TimeoutReader<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner, reads: 0 }
    }
}

impl<R: Read> Read for TimeoutReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        if self.reads > 1 {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "timeout"));
        }
        self.inner.read(buf)
    }
}
