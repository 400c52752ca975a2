use std::time::{Duration, Instant};

/// Minimum time between two upload attempts.
pub const UPLOAD_MIN_INTERVAL: Duration = Duration::from_secs(10);

/// Spaces out upload attempts.
///
/// The first attempt is always allowed. A failed upload calls [`reset`](Self::reset)
/// so the user can retry immediately.
#[derive(Debug, Clone)]
pub struct UploadRateLimiter {
    min_interval: Duration,
    last_attempt: Option<Instant>,
}

impl Default for UploadRateLimiter {
    fn default() -> Self {
        Self::new(UPLOAD_MIN_INTERVAL)
    }
}

impl UploadRateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_attempt: None,
        }
    }

    /// `None` when an attempt is allowed at `now`, otherwise the wait in whole
    /// seconds, rounded up.
    pub fn check(&self, now: Instant) -> Option<u64> {
        let last = self.last_attempt?;
        let elapsed = now.saturating_duration_since(last);
        if elapsed >= self.min_interval {
            return None;
        }
        let remaining = self.min_interval - elapsed;
        Some(remaining.as_nanos().div_ceil(1_000_000_000) as u64)
    }

    pub fn record_attempt(&mut self, now: Instant) {
        self.last_attempt = Some(now);
    }

    pub fn reset(&mut self) {
        self.last_attempt = None;
    }
}
