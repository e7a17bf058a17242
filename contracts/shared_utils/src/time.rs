//! Time utilities for timestamps and sale windows

use soroban_sdk::Env;

/// Time utility functions for working with ledger timestamps
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger timestamp
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }
}

/// Half-open time window `[start, end)`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeWindow {
    pub start: u64,
    pub end: u64,
}

impl TimeWindow {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// A window is well-formed when it is non-empty
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// `start <= now < end`
    pub fn contains(&self, now: u64) -> bool {
        self.start <= now && now < self.end
    }

    /// The window has not opened yet
    pub fn is_before(&self, now: u64) -> bool {
        now < self.start
    }

    /// The window has closed
    pub fn is_after(&self, now: u64) -> bool {
        now >= self.end
    }
}
