//! Core components of the crptgate limiter
//!
//! This module contains the fundamental building blocks:
//! - [`window`]: The fixed-window attempt counter
//! - [`ticker`]: The background thread that resets the counter
//! - [`rate_limiter`]: The limiter that ties a window to its ticker

pub mod rate_limiter;
pub mod ticker;
pub mod window;

pub use rate_limiter::RateLimiter;
pub use ticker::ResetTicker;
pub use window::{FixedWindow, WindowState};

use std::error::Error;
use std::fmt;

/// Errors that can occur while setting up a limiter
///
/// # Variants
///
/// - [`ZeroWindow`](LimiterError::ZeroWindow): The window length was zero
/// - [`Spawn`](LimiterError::Spawn): The reset thread could not be started
///
/// # Example
///
/// ```
/// use crptgate::{LimiterError, RateLimiter};
/// use std::time::Duration;
///
/// match RateLimiter::new(Duration::ZERO, 10) {
///     Err(LimiterError::ZeroWindow) => println!("window must be non-zero"),
///     _ => {}
/// }
/// ```
#[derive(Debug)]
pub enum LimiterError {
    /// The window length was zero
    ZeroWindow,
    /// The reset thread could not be spawned
    Spawn(String),
}

impl fmt::Display for LimiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimiterError::ZeroWindow => write!(f, "window length must be greater than zero"),
            LimiterError::Spawn(msg) => write!(f, "failed to start reset thread: {msg}"),
        }
    }
}

impl Error for LimiterError {}
