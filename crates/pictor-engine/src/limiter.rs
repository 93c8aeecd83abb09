// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-window rate limiting.
//!
//! The limiter keeps one window per process and sweeps it lazily: state
//! changes only when a request arrives. Callers pass `now` explicitly,
//! so tests drive the clock without patching anything.

use std::time::{Duration, Instant};

use pictor_config::LimitsConfig;

/// In-memory fixed-window request limiter.
pub struct RateLimiter {
    /// Length of one window.
    window: Duration,
    /// Request ceiling per window.
    max_requests: u32,
    /// Requests seen in the current window, denied ones included.
    count: u32,
    /// When the current window opened. None until the first request.
    window_start: Option<Instant>,
}

impl RateLimiter {
    /// Create a limiter from the configured window and ceiling.
    pub fn new(config: &LimitsConfig) -> Self {
        Self {
            window: Duration::from_secs(config.window_secs),
            max_requests: config.max_requests,
            count: 0,
            window_start: None,
        }
    }

    /// Accounts one request at `now` and says whether it may proceed.
    ///
    /// A denial is a plain `false`, not an error; the denied request
    /// still counts against the window. `Instant` is monotonic, and a
    /// `now` from before the window opened reads as zero elapsed, so it
    /// stays within the current window.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if let Some(start) = self.window_start {
            if now.saturating_duration_since(start) > self.window {
                self.window_start = Some(now);
                self.count = 0;
            }
        } else {
            self.window_start = Some(now);
        }
        self.count += 1;
        self.count <= self.max_requests
    }

    /// Requests seen in the current window (for testing/reporting).
    pub fn current_count(&self) -> u32 {
        self.count
    }
}
