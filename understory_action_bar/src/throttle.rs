// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize throttling with host-supplied timestamps.
//!
//! Every pipeline run performs up to one layout read per candidate, so resize
//! signals must be throttled. [`ResizeThrottle`] fires on the leading edge and
//! remembers signals that arrive inside the interval, so the final size is
//! always processed by a trailing run.
//!
//! ```rust
//! use understory_action_bar::ResizeThrottle;
//!
//! let mut throttle = ResizeThrottle::new(100);
//! assert!(throttle.on_resize(1_000)); // leading edge runs immediately
//! assert!(!throttle.on_resize(1_040)); // inside the interval: deferred
//! assert_eq!(throttle.next_deadline(), Some(1_100));
//! assert!(!throttle.poll(1_090));
//! assert!(throttle.poll(1_100)); // trailing run for the last size
//! assert!(!throttle.is_pending());
//! ```

use crate::config::BarConfig;

/// Leading- and trailing-edge throttle over millisecond timestamps.
#[derive(Clone, Debug)]
pub struct ResizeThrottle {
    interval_ms: u64,
    last_run: Option<u64>,
    pending: bool,
}

impl ResizeThrottle {
    /// Create a throttle. An interval of zero is treated as one millisecond.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            last_run: None,
            pending: false,
        }
    }

    /// Create a throttle with the interval from `config`.
    pub fn from_config(config: &BarConfig) -> Self {
        Self::new(config.resize_throttle_ms)
    }

    /// The throttle interval.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Record a resize signal at `now`. Returns `true` if the host should run the pipeline now.
    pub fn on_resize(&mut self, now: u64) -> bool {
        match self.last_run {
            Some(last) if now.saturating_sub(last) < self.interval_ms => {
                self.pending = true;
                false
            }
            _ => {
                self.last_run = Some(now);
                self.pending = false;
                true
            }
        }
    }

    /// Returns `true` if a deferred signal is due at `now`; the caller should then run the pipeline.
    pub fn poll(&mut self, now: u64) -> bool {
        let due = self
            .next_deadline()
            .is_some_and(|deadline| now >= deadline);
        if due {
            self.last_run = Some(now);
            self.pending = false;
        }
        due
    }

    /// When the deferred signal becomes due, if one is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        if !self.pending {
            return None;
        }
        self.last_run
            .map(|last| last.saturating_add(self.interval_ms))
    }

    /// Returns `true` if a signal is waiting for the trailing run.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Forget all history.
    pub fn reset(&mut self) {
        self.last_run = None;
        self.pending = false;
    }
}

impl Default for ResizeThrottle {
    fn default() -> Self {
        Self::new(BarConfig::DEFAULT_RESIZE_THROTTLE_MS)
    }
}
