use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of log timestamps, in milliseconds since the UNIX epoch.
pub trait Clock: std::fmt::Debug {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Deterministic clock: returns `start`, then advances by `step` on every read.
#[derive(Debug, Clone)]
pub struct FixedClock {
    next: Cell<u64>,
    step: u64,
}

impl FixedClock {
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }

    pub fn at(millis: u64) -> Self {
        Self::new(millis, 0)
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        let now = self.next.get();
        self.next.set(now.saturating_add(self.step));
        now
    }
}
