//! Minimum-spacing rate limiter for the arXiv query API.
//!
//! The limiter owns the timestamp of the last completed request. Callers go
//! through [`RateLimiter::run`], which holds an async mutex across the whole
//! check, wait, request and stamp sequence, so concurrent callers queue up
//! instead of racing past an elapsed cooldown together.

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Serializes requests with a fixed minimum interval between them.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter with no prior request recorded.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval, last_request: Mutex::new(None) }
    }

    /// Configured minimum interval.
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Completion time of the last request, if any.
    pub async fn last_request(&self) -> Option<Instant> {
        *self.last_request.lock().await
    }

    /// Wait out the cooldown, run `request`, then stamp its completion.
    ///
    /// The stamp is taken whatever `request` resolves to: the spacing applies
    /// to attempts, not to successful responses.
    pub async fn run<F, Fut, T>(&self, request: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut last_request = self.last_request.lock().await;

        if let Some(previous) = *last_request {
            let ready_at = previous + self.min_interval;
            let now = Instant::now();
            if ready_at > now {
                tracing::debug!(wait = ?(ready_at - now), "Waiting for arXiv cooldown");
                tokio::time::sleep_until(ready_at).await;
            }
        }

        let output = request().await;
        *last_request = Some(Instant::now());
        output
    }
}
