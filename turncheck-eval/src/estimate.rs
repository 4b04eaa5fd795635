//! Latency and cost estimates.
//!
//! Latency is measured with a [`Clock`] so tests can swap in a
//! [`ManualClock`]. The cost figure is an illustrative proxy: it counts
//! whitespace tokens and multiplies by a flat rate. It does not reflect any
//! real tokenizer or billing scheme.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Flat USD rate applied per whitespace token.
pub const DEFAULT_COST_PER_TOKEN_USD: f64 = 0.00001;

/// Source of monotonic timestamps.
pub trait Clock: Send + Sync {
    /// Read the current instant.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock that advances by a fixed step on every reading.
///
/// The first reading returns the base instant, the second `base + step`, and
/// so on. Two consecutive readings are therefore always exactly `step` apart.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use turncheck_eval::{estimate_latency, Clock, ManualClock};
///
/// let clock = ManualClock::new(Duration::from_millis(5));
/// let start = clock.now();
/// let end = clock.now();
/// assert_eq!(estimate_latency(start, end), 5.0);
/// ```
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    step: Duration,
    readings: AtomicU32,
}

impl ManualClock {
    /// Create a clock advancing by `step` per reading.
    pub fn new(step: Duration) -> Self {
        Self {
            base: Instant::now(),
            step,
            readings: AtomicU32::new(0),
        }
    }

    /// Number of times the clock has been read.
    pub fn readings(&self) -> u32 {
        self.readings.load(Ordering::Relaxed)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let n = self.readings.fetch_add(1, Ordering::Relaxed);
        self.base + self.step * n
    }
}

/// Elapsed milliseconds between two instants, rounded to 2 decimals.
///
/// Saturates to 0.0 if `end` precedes `start`.
pub fn estimate_latency(start: Instant, end: Instant) -> f64 {
    let elapsed = end.saturating_duration_since(start);
    round_to(elapsed.as_secs_f64() * 1000.0, 2)
}

/// Cost proxy for `text` at the default rate, rounded to 5 decimals.
pub fn estimate_cost(text: &str) -> f64 {
    estimate_cost_with_rate(text, DEFAULT_COST_PER_TOKEN_USD)
}

/// Cost proxy for `text` at `rate_per_token` USD, rounded to 5 decimals.
pub fn estimate_cost_with_rate(text: &str, rate_per_token: f64) -> f64 {
    let tokens = text.split_whitespace().count();
    round_to(tokens as f64 * rate_per_token, 5)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
