#![no_std]

//! Shared utility library for the launchpad contracts
//!
//! This library provides common functions, helpers, and patterns used across
//! the launchpad workspace including:
//! - Fixed-point math (checked arithmetic, rate conversion)
//! - Time utilities (timestamps, sale windows)
//! - Validation utilities
//! - Storage helpers (admin, initialization, TTL management)
//! - Error logging helpers
//! - Access control patterns
//! - Event emission patterns
//! - Pause (circuit breaker) control

pub mod access_control;
pub mod emergency;
pub mod errors;
pub mod events;
pub mod math;
pub mod storage;
pub mod time;
pub mod validation;


// Re-export commonly used items
pub use access_control::*;
pub use emergency::PauseControl;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use storage::Storage;
pub use time::*;
pub use validation::*;
