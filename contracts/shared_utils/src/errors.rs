//! Error logging helpers
//!
//! Contracts return typed errors; these helpers only record diagnostics
//! through the host log so rejected calls can be traced.

use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with context
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context, usually `contract::operation`
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }

    /// Log `message` under `context` and hand back `err` for propagation
    ///
    /// # Example
    /// ```ignore
    /// return Err(ErrorHelper::fail(&e, "launchpad::buy_token", "transfer rejected", Error::TransferFailed));
    /// ```
    pub fn fail<E>(e: &Env, context: &str, message: &str, err: E) -> E {
        Self::log_error_with_context(e, context, message);
        err
    }
}
