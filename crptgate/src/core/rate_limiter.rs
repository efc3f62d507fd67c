//! Fixed-window rate limiter
//!
//! This module provides the main [`RateLimiter`] struct, which couples a
//! [`FixedWindow`] counter with the [`ResetTicker`] that clears it.

use super::{LimiterError, ResetTicker, WindowState, window::FixedWindow};
use std::sync::Arc;
use std::time::Duration;

/// Fixed-window rate limiter
///
/// Admits at most `limit` attempts per window. The window restarts on a
/// fixed cadence driven by a background thread that lives as long as the
/// limiter does.
///
/// # Example
///
/// ```
/// use crptgate::RateLimiter;
/// use std::time::Duration;
///
/// // Allow 100 attempts per minute
/// let limiter = RateLimiter::new(Duration::from_secs(60), 100).unwrap();
///
/// if limiter.try_acquire() {
///     // do the work
/// }
/// ```
#[derive(Debug)]
pub struct RateLimiter {
    window: Arc<FixedWindow>,
    _ticker: ResetTicker,
}

impl RateLimiter {
    /// Create a limiter admitting `limit` attempts per `window`
    ///
    /// # Errors
    ///
    /// - [`LimiterError::ZeroWindow`]: `window` is zero
    /// - [`LimiterError::Spawn`]: the reset thread could not be started
    pub fn new(window: Duration, limit: u64) -> Result<Self, LimiterError> {
        let window = Arc::new(FixedWindow::new(window, limit));
        let ticker = ResetTicker::start(Arc::clone(&window))?;

        Ok(RateLimiter {
            window,
            _ticker: ticker,
        })
    }

    /// `limit` attempts per second
    pub fn per_second(limit: u64) -> Result<Self, LimiterError> {
        Self::new(Duration::from_secs(1), limit)
    }

    /// `limit` attempts per minute
    pub fn per_minute(limit: u64) -> Result<Self, LimiterError> {
        Self::new(Duration::from_secs(60), limit)
    }

    /// Record an attempt and report whether it is admitted
    ///
    /// Never blocks. A rejected attempt still counts against the current
    /// window; the caller decides whether and when to try again.
    ///
    /// # Example
    ///
    /// ```
    /// use crptgate::RateLimiter;
    ///
    /// let limiter = RateLimiter::per_minute(0).unwrap();
    /// assert!(!limiter.try_acquire());
    /// ```
    pub fn try_acquire(&self) -> bool {
        self.window.try_acquire()
    }

    pub fn state(&self) -> WindowState {
        self.window.state()
    }

    /// Attempts recorded in the current window
    pub fn count(&self) -> u64 {
        self.window.count()
    }

    pub fn limit(&self) -> u64 {
        self.window.limit()
    }

    pub fn window(&self) -> Duration {
        self.window.window()
    }

    /// Resets applied by the background thread so far
    pub fn resets(&self) -> u64 {
        self.window.resets()
    }
}
