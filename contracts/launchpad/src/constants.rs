/// Fixed-point scale of `Presale::rate` (18 decimals)
pub use shared_utils::RATE_SCALE;

/// Upper bound on `get_presales` page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Log contexts
pub const CTX_BUY: &str = "launchpad::buy_token";
pub const CTX_WITHDRAW: &str = "launchpad::withdraw_funds";
pub const CTX_FUND: &str = "launchpad::fund_presale";
pub const CTX_CLAIM: &str = "launchpad::claim_tokens";
pub const CTX_UNSOLD: &str = "launchpad::withdraw_unsold";
