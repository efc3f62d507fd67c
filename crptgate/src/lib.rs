//! # crptgate
//!
//! A fixed-window request limiter with a periodic background reset.
//!
//! ## Overview
//!
//! The limiter counts every attempt made inside the current window and admits
//! an attempt only while the count stays within the configured limit. A
//! dedicated background thread sets the count back to zero once per window,
//! whether or not any attempts were made.
//!
//! - **Atomic counting**: one `fetch_add` per attempt, no lost updates
//! - **Immediate answers**: a rejected attempt is never queued or delayed
//! - **Traffic-independent reset**: the reset cadence is wall-clock driven
//!
//! ## Quick Start
//!
//! ```
//! use crptgate::RateLimiter;
//! use std::time::Duration;
//!
//! // At most 2 attempts per second
//! let limiter = RateLimiter::new(Duration::from_secs(1), 2).unwrap();
//!
//! assert!(limiter.try_acquire());
//! assert!(limiter.try_acquire());
//! assert!(!limiter.try_acquire());
//! ```
//!
//! ## Fixed Windows
//!
//! The reset is aligned to the limiter's start time, not to individual
//! attempts. A burst right before a reset followed by a burst right after it
//! can admit close to `2 × limit` attempts within a short span of real time,
//! even though each window on its own stays within the limit.
//!
//! ## Thread Safety
//!
//! [`RateLimiter`] is `Send + Sync`; share it behind an `Arc` or embed it in a
//! shared client:
//!
//! ```
//! use std::sync::Arc;
//! use crptgate::RateLimiter;
//!
//! let limiter = Arc::new(RateLimiter::per_second(100).unwrap());
//! let worker = Arc::clone(&limiter);
//! std::thread::spawn(move || worker.try_acquire()).join().unwrap();
//! ```

pub mod core;

pub use core::{FixedWindow, LimiterError, RateLimiter, ResetTicker, WindowState};
