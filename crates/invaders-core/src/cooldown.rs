//! Wall-clock cooldowns with optional jitter.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// A cooldown that has never been started counts as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    base_ms: u64,
    variance_ms: u64,
    /// Duration drawn at the last reset.
    duration_ms: u64,
    started_at_ms: Option<u64>,
}

impl Cooldown {
    /// Fixed-length cooldown.
    pub fn new(duration_ms: u64) -> Self {
        Self::with_variance(duration_ms, 0)
    }

    /// Cooldown whose length is redrawn on every reset from
    /// `[base - variance, base + variance)`.
    pub fn with_variance(base_ms: u64, variance_ms: u64) -> Self {
        let variance_ms = variance_ms.min(base_ms);
        Self {
            base_ms,
            variance_ms,
            duration_ms: base_ms,
            started_at_ms: None,
        }
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        match self.started_at_ms {
            None => true,
            Some(start) => now_ms.saturating_sub(start) >= self.duration_ms,
        }
    }

    /// Restart from `now_ms`, drawing a fresh duration if the cooldown has jitter.
    pub fn reset(&mut self, now_ms: u64, rng: &mut impl RandomSource) {
        if self.variance_ms > 0 {
            let low = self.base_ms - self.variance_ms;
            let span = (self.variance_ms * 2) as usize;
            self.duration_ms = low + rng.next_below(span) as u64;
        }
        self.started_at_ms = Some(now_ms);
    }

    /// Restart from `now_ms` keeping the current duration.
    pub fn restart(&mut self, now_ms: u64) {
        self.started_at_ms = Some(now_ms);
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn base_ms(&self) -> u64 {
        self.base_ms
    }

    pub fn variance_ms(&self) -> u64 {
        self.variance_ms
    }
}
