//! Error codes for the launchpad contract.
//!
//! Ranges (for off-chain indexing):
//! - Lifecycle: 1-2
//! - Validation: 3-9
//! - Settlement / authorization: 10-17
//! - System: 18
//! - Escrow accounting: 19

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LaunchpadError {
    /// Launchpad has no admin yet
    NotInitialized = 1,
    /// `initialize` was already called
    AlreadyInitialized = 2,
    /// Presale parameters violate a numeric or time constraint
    InvalidParameters = 3,
    /// A presale already exists for this sale asset
    DuplicatePresale = 4,
    /// No presale for this sale asset
    PresaleNotFound = 5,
    /// Presale is settled and accepts no more contributions
    PresaleClosed = 6,
    /// Contribution outside `[start_time, end_time)`
    OutsideSaleWindow = 7,
    /// Amount must be positive (and buy at least one sale unit)
    InvalidAmount = 8,
    /// Contribution would push the raise past the hard cap
    HardCapExceeded = 9,
    /// Token contract rejected the transfer
    TransferFailed = 10,
    /// Presale was already settled
    AlreadySettled = 11,
    /// Presale window is still open
    PresaleStillActive = 12,
    /// Caller lacks the required role
    Unauthorized = 13,
    /// Operation requires a settled presale
    PresaleNotSettled = 14,
    /// Raised funds were already paid out
    AlreadyWithdrawn = 15,
    /// No allocation or unsold balance left to release
    NothingToClaim = 16,
    /// Fixed-point arithmetic overflowed
    ArithmeticOverflow = 17,
    /// Launchpad is paused by the admin
    LaunchpadPaused = 18,
    /// Sale tokens funded for this presale do not cover the claim
    InsufficientEscrow = 19,
}

impl LaunchpadError {
    /// Human-readable message for this error (for logs and clients).
    pub fn message(&self) -> &'static str {
        match self {
            LaunchpadError::NotInitialized => "Launchpad not initialized",
            LaunchpadError::AlreadyInitialized => "Launchpad already initialized",
            LaunchpadError::InvalidParameters => "Invalid presale parameters",
            LaunchpadError::DuplicatePresale => "Presale already exists for sale asset",
            LaunchpadError::PresaleNotFound => "Presale not found",
            LaunchpadError::PresaleClosed => "Presale is closed",
            LaunchpadError::OutsideSaleWindow => "Outside of sale window",
            LaunchpadError::InvalidAmount => "Invalid amount",
            LaunchpadError::HardCapExceeded => "Hard cap exceeded",
            LaunchpadError::TransferFailed => "Token transfer failed",
            LaunchpadError::AlreadySettled => "Presale already settled",
            LaunchpadError::PresaleStillActive => "Presale still active",
            LaunchpadError::Unauthorized => "Unauthorized: caller not allowed",
            LaunchpadError::PresaleNotSettled => "Presale not settled",
            LaunchpadError::AlreadyWithdrawn => "Funds already withdrawn",
            LaunchpadError::NothingToClaim => "Nothing to claim",
            LaunchpadError::ArithmeticOverflow => "Arithmetic overflow",
            LaunchpadError::LaunchpadPaused => "Launchpad is paused",
            LaunchpadError::InsufficientEscrow => "Presale escrow is under-funded",
        }
    }

    /// Failures that may succeed on retry once balances or funding change.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LaunchpadError::TransferFailed | LaunchpadError::InsufficientEscrow
        )
    }
}
