//! Fixed-window attempt counter
//!
//! [`FixedWindow`] holds the only mutable state of the limiter: a single
//! atomic counter. Attempts increment it, resets store zero into it, and both
//! go through the same atomic so a reset is never lost or applied twice.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Logical state of a window
///
/// A window starts out [`Accepting`](WindowState::Accepting) and becomes
/// [`Saturated`](WindowState::Saturated) once an attempt pushes the counter
/// past the limit. Only a reset brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// The counter is at or below the limit
    Accepting,
    /// The counter is above the limit; every attempt is rejected until reset
    Saturated,
}

/// Attempt counter for one fixed window
///
/// The counter counts attempts, not admissions: a rejected attempt still
/// increments it and is never rolled back.
///
/// # Example
///
/// ```
/// use crptgate::{FixedWindow, WindowState};
/// use std::time::Duration;
///
/// let window = FixedWindow::new(Duration::from_secs(1), 1);
/// assert!(window.try_acquire());
/// assert!(!window.try_acquire());
/// assert_eq!(window.count(), 2);
/// assert_eq!(window.state(), WindowState::Saturated);
///
/// window.reset();
/// assert_eq!(window.state(), WindowState::Accepting);
/// ```
#[derive(Debug)]
pub struct FixedWindow {
    calls: AtomicU64,
    resets: AtomicU64,
    limit: u64,
    window: Duration,
}

impl FixedWindow {
    /// Create a counter admitting `limit` attempts per `window`
    ///
    /// A limit of zero rejects every attempt. Nothing here resets the
    /// counter; pair it with a [`ResetTicker`](super::ResetTicker) or use
    /// [`RateLimiter`](super::RateLimiter).
    pub fn new(window: Duration, limit: u64) -> Self {
        FixedWindow {
            calls: AtomicU64::new(0),
            resets: AtomicU64::new(0),
            limit,
            window,
        }
    }

    /// Record an attempt and report whether it is admitted
    ///
    /// Returns `true` iff the post-increment count is within the limit.
    pub fn try_acquire(&self) -> bool {
        let calls = self.calls.fetch_add(1, Ordering::AcqRel).saturating_add(1);
        calls <= self.limit
    }

    /// Start a new window
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Release);
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    /// Attempts recorded in the current window, admitted or not
    pub fn count(&self) -> u64 {
        self.calls.load(Ordering::Acquire)
    }

    /// Number of resets applied since creation
    pub fn resets(&self) -> u64 {
        self.resets.load(Ordering::Relaxed)
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn state(&self) -> WindowState {
        if self.count() > self.limit {
            WindowState::Saturated
        } else {
            WindowState::Accepting
        }
    }
}
