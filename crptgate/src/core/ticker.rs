//! Background reset thread
//!
//! [`ResetTicker`] runs one named thread that resets a [`FixedWindow`] at a
//! fixed rate. Tick `n` is due at `start + n × window`; a late tick does not
//! push back the ones after it. The thread never looks at request traffic and
//! never waits for in-flight attempts.

use super::{LimiterError, window::FixedWindow};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const THREAD_NAME: &str = "crptgate-reset";

/// Handle to a running reset thread
///
/// Dropping the handle signals the thread and joins it.
///
/// # Example
///
/// ```
/// use crptgate::{FixedWindow, ResetTicker};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let window = Arc::new(FixedWindow::new(Duration::from_millis(10), 1));
/// let ticker = ResetTicker::start(Arc::clone(&window)).unwrap();
///
/// assert!(window.try_acquire());
/// std::thread::sleep(Duration::from_millis(50));
/// assert!(window.resets() > 0);
/// drop(ticker);
/// ```
#[derive(Debug)]
pub struct ResetTicker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ResetTicker {
    /// Spawn the reset thread for `window`
    ///
    /// The first reset happens one window length after this call.
    ///
    /// # Errors
    ///
    /// - [`LimiterError::ZeroWindow`]: the window length is zero
    /// - [`LimiterError::Spawn`]: the OS refused to start the thread
    pub fn start(window: Arc<FixedWindow>) -> Result<Self, LimiterError> {
        let period = window.window();
        if period.is_zero() {
            return Err(LimiterError::ZeroWindow);
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                let start = Instant::now();
                let mut ticks: u64 = 0;

                loop {
                    ticks += 1;
                    let Some(due) = next_due(start, period, ticks) else {
                        // Next tick is past what Instant can represent.
                        let _ = stop_rx.recv();
                        break;
                    };
                    let wait = due.saturating_duration_since(Instant::now());

                    match stop_rx.recv_timeout(wait) {
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                        Err(RecvTimeoutError::Timeout) => window.reset(),
                    }
                }
            })
            .map_err(|e| LimiterError::Spawn(e.to_string()))?;

        Ok(ResetTicker {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Whether the reset thread is still running
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

/// Deadline of tick `n`, or `None` if it cannot be represented
fn next_due(start: Instant, period: Duration, n: u64) -> Option<Instant> {
    const NANOS_PER_SEC: u128 = 1_000_000_000;

    let offset = period.as_nanos().checked_mul(u128::from(n))?;
    let secs = u64::try_from(offset / NANOS_PER_SEC).ok()?;
    let nanos = (offset % NANOS_PER_SEC) as u32;
    start.checked_add(Duration::new(secs, nanos))
}

impl Drop for ResetTicker {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            // The thread may already be gone; either way it stops.
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
