// File: src/session/countdown.rs
use crate::config::SessionConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Normal,
    Warning,
    Danger,
    Expired,
}

/// Attempt timer. Time is fed in by the caller, so the countdown never
/// reads a clock itself.
#[derive(Debug, Clone)]
pub struct Countdown {
    limit: Duration,
    warning: Duration,
    danger: Duration,
    elapsed: Duration,
    running: bool,
}

impl Countdown {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            limit: Duration::from_secs(config.time_limit_secs),
            warning: Duration::from_secs(config.warning_secs),
            danger: Duration::from_secs(config.danger_secs),
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Restarts from the full limit.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        if !self.is_expired() {
            self.running = true;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds wall time spent while running. Returns `true` on the call that
    /// crosses zero.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed = (self.elapsed + delta).min(self.limit);
        if self.is_expired() {
            self.running = false;
            return true;
        }
        false
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn remaining(&self) -> Duration {
        self.limit - self.elapsed
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.limit
    }

    pub fn phase(&self) -> Phase {
        let remaining = self.remaining();
        if remaining.is_zero() {
            Phase::Expired
        } else if remaining <= self.danger {
            Phase::Danger
        } else if remaining <= self.warning {
            Phase::Warning
        } else {
            Phase::Normal
        }
    }

    /// Remaining whole seconds as `m:ss`.
    pub fn display(&self) -> String {
        let secs = self.remaining().as_secs();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
