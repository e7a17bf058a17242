//! Validation utilities for common input validation patterns
//!
//! All checks return `bool` so each contract can surface its own error type.

use soroban_sdk::Address;

use crate::time::TimeWindow;

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// Amount is strictly greater than zero
    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    /// Two asset addresses refer to different contracts
    pub fn are_distinct(a: &Address, b: &Address) -> bool {
        a != b
    }

    /// `total + amount` stays at or below `cap`. Overflow counts as exceeding.
    pub fn fits_under_cap(total: i128, amount: i128, cap: i128) -> bool {
        match total.checked_add(amount) {
            Some(next) => next <= cap,
            None => false,
        }
    }

    /// Window is non-empty and closes strictly after `now`
    ///
    /// # Arguments
    /// * `window` - The proposed window
    /// * `now` - Current ledger timestamp
    pub fn is_open_ended_in_future(window: &TimeWindow, now: u64) -> bool {
        window.is_well_formed() && window.end > now
    }

    /// Value lies within `[min, max]`
    pub fn is_in_range(value: u32, min: u32, max: u32) -> bool {
        value >= min && value <= max
    }
}
