//! Client-side request throttle.
//!
//! A sliding-window limiter admitting at most `max_requests` requests per
//! window. Callers over the limit wait; they are never rejected. Waiters
//! queue on a fair mutex, so they are released in the order they arrived.

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::config::RateLimit;

/// Sliding-window rate limiter owned by one client
#[derive(Debug)]
pub struct RateLimiter {
    /// Maximum requests per window.
    max_requests: u32,
    /// Window duration.
    window: Duration,
    /// Admission timestamps within the current window.
    timestamps: Mutex<VecDeque<Instant>>,
    /// FIFO admission queue.
    turn: tokio::sync::Mutex<()>,
}

impl RateLimiter {
    /// Creates a new rate limiter.
    ///
    /// # Arguments
    ///
    /// * `max_requests` - Maximum requests allowed in the window
    /// * `window` - Duration of the sliding window
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            timestamps: Mutex::new(VecDeque::with_capacity(max_requests as usize)),
            turn: tokio::sync::Mutex::new(()),
        }
    }

    /// Returns the time to wait before the next request can be admitted.
    pub fn wait_time(&self) -> Duration {
        let mut timestamps = self.timestamps.lock();
        let now = Instant::now();
        self.evict_expired(&mut timestamps, now);

        if timestamps.len() >= self.max_requests as usize {
            if let Some(&oldest) = timestamps.front() {
                return self.window.saturating_sub(now.duration_since(oldest));
            }
        }
        Duration::ZERO
    }

    /// Waits until a request can be made, then records it.
    ///
    /// Concurrent callers are admitted in the order they called `acquire`.
    pub async fn acquire(&self) {
        let _turn = self.turn.lock().await;
        loop {
            let wait = self.wait_time();
            if wait.is_zero() {
                self.timestamps.lock().push_back(Instant::now());
                return;
            }
            debug!(
                wait_ms = wait.as_millis() as u64,
                max_requests = self.max_requests,
                "Rate limit reached, delaying request"
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Returns the current number of requests in the window.
    pub fn current_count(&self) -> usize {
        let mut timestamps = self.timestamps.lock();
        self.evict_expired(&mut timestamps, Instant::now());
        timestamps.len()
    }

    /// Returns the maximum requests allowed.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Returns the window duration.
    pub fn window(&self) -> Duration {
        self.window
    }

    fn evict_expired(&self, timestamps: &mut VecDeque<Instant>, now: Instant) {
        while let Some(&oldest) = timestamps.front() {
            if now.duration_since(oldest) >= self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }
    }
}

impl From<RateLimit> for RateLimiter {
    fn from(limit: RateLimit) -> Self {
        Self::new(limit.max_requests, limit.per)
    }
}
