//! Asset transfers through the SEP-41 token interface.
//!
//! The launchpad only moves balances through `try_transfer`, so a rejected
//! transfer becomes `TransferFailed` instead of aborting the invocation.
//! Callers transfer before committing any bookkeeping.

use shared_utils::ErrorHelper;
use soroban_sdk::{token, Address, Env};

use crate::error::LaunchpadError;

/// Move `amount` of `asset` from `from` to `to`.
pub fn transfer(
    e: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
    context: &str,
) -> Result<(), LaunchpadError> {
    let client = token::TokenClient::new(e, asset);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ErrorHelper::fail(
            e,
            context,
            LaunchpadError::TransferFailed.message(),
            LaunchpadError::TransferFailed,
        )),
    }
}

/// Pull `amount` of `asset` from `from` into launchpad escrow.
pub fn into_escrow(
    e: &Env,
    asset: &Address,
    from: &Address,
    amount: i128,
    context: &str,
) -> Result<(), LaunchpadError> {
    transfer(e, asset, from, &e.current_contract_address(), amount, context)
}

/// Release `amount` of `asset` from launchpad escrow to `to`.
pub fn out_of_escrow(
    e: &Env,
    asset: &Address,
    to: &Address,
    amount: i128,
    context: &str,
) -> Result<(), LaunchpadError> {
    transfer(e, asset, &e.current_contract_address(), to, amount, context)
}
