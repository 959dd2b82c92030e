//! Exponential backoff with additive jitter.

use std::time::Duration;

/// `delay(i) = min(cap, base * 2^i) + jitter * U(0, 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackoffPolicy {
    /// Base duration for exponential backoff
    pub base: Duration,
    /// Cap on the exponential part
    pub cap: Duration,
    /// Upper bound of the uniform random term added on top
    pub jitter: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            base: Duration::from_secs(1),
            cap: Duration::from_secs(8),
            jitter: Duration::from_secs(1),
        }
    }
}

impl BackoffPolicy {
    /// No waiting at all. Useful for tests and for callers that pace themselves.
    pub fn immediate() -> Self {
        Self {
            base: Duration::ZERO,
            cap: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    /// Delay before retrying after the zero-based `attempt` failed.
    pub fn delay(&self, attempt: u32) -> Duration {
        self.delay_with_unit(attempt, rand::random::<f64>())
    }

    /// Same as [`delay`](Self::delay) with the random draw supplied by the caller.
    /// `unit` is clamped into `[0, 1]`.
    pub fn delay_with_unit(&self, attempt: u32, unit: f64) -> Duration {
        // 2^63 seconds already dwarfs any cap; keeps powi in range.
        let exponent = attempt.min(63) as i32;
        let exponential = self.base.as_secs_f64() * 2_f64.powi(exponent);
        let capped = exponential.min(self.cap.as_secs_f64());
        let jitter = self.jitter.as_secs_f64() * unit.clamp(0.0, 1.0);

        Duration::try_from_secs_f64(capped + jitter).unwrap_or(Duration::MAX)
    }

    pub async fn sleep(&self, attempt: u32) {
        let delay = self.delay(attempt);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
