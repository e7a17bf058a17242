//! Sale-asset escrow: creator deposits, contributor claims and the
//! creator's recovery of unsold tokens.
//!
//! All presales share the contract's balance, so every release is bounded
//! by the presale's own bookkeeping: claims by `sale_tokens_funded`, unsold
//! recovery by `sale_tokens_funded - total_allocated`.

use shared_utils::{AccessControl, ErrorHelper, Events, SafeMath, Storage, Validation};
use soroban_sdk::{symbol_short, Address, Env};

use crate::constants::{CTX_CLAIM, CTX_FUND, CTX_UNSOLD};
use crate::contribution::add;
use crate::error::LaunchpadError;
use crate::storage;
use crate::transfer;

/// Deposit `amount` of the sale asset into escrow. Creator only.
pub fn fund_presale(
    e: &Env,
    creator: Address,
    sale_asset: Address,
    amount: i128,
) -> Result<(), LaunchpadError> {
    let mut presale =
        storage::get_presale(e, &sale_asset).ok_or(LaunchpadError::PresaleNotFound)?;
    if !AccessControl::authorize_owner(&creator, &presale.creator) {
        return Err(LaunchpadError::Unauthorized);
    }
    if !Validation::is_positive(amount) {
        return Err(LaunchpadError::InvalidAmount);
    }

    let funded = add(presale.sale_tokens_funded, amount)?;
    transfer::into_escrow(e, &sale_asset, &creator, amount, CTX_FUND)?;

    presale.sale_tokens_funded = funded;
    storage::set_presale(e, &presale);
    Storage::extend_instance(e);

    Events::emit_for_asset(e, symbol_short!("funded"), &sale_asset, (creator, amount, funded));

    Ok(())
}

/// Deliver `contributor`'s whole allocation once the presale is settled.
///
/// # Returns
/// The amount of sale asset transferred
pub fn claim_tokens(
    e: &Env,
    contributor: Address,
    sale_asset: Address,
) -> Result<i128, LaunchpadError> {
    contributor.require_auth();

    let mut presale =
        storage::get_presale(e, &sale_asset).ok_or(LaunchpadError::PresaleNotFound)?;
    if !presale.settled {
        return Err(LaunchpadError::PresaleNotSettled);
    }

    let allocation = storage::get_allocation(e, &sale_asset, &contributor);
    if allocation <= 0 || storage::is_claimed(e, &sale_asset, &contributor) {
        return Err(LaunchpadError::NothingToClaim);
    }

    let claimed = add(presale.tokens_claimed, allocation)?;
    if claimed > presale.sale_tokens_funded {
        return Err(ErrorHelper::fail(
            e,
            CTX_CLAIM,
            LaunchpadError::InsufficientEscrow.message(),
            LaunchpadError::InsufficientEscrow,
        ));
    }
    transfer::out_of_escrow(e, &sale_asset, &contributor, allocation, CTX_CLAIM)?;

    presale.tokens_claimed = claimed;
    storage::set_presale(e, &presale);
    storage::set_claimed(e, &sale_asset, &contributor);
    Storage::extend_instance(e);

    Events::emit_for_asset(
        e,
        symbol_short!("claimed"),
        &sale_asset,
        (contributor, allocation),
    );

    Ok(allocation)
}

/// Return escrowed sale tokens not owed to any contributor to the creator.
///
/// # Returns
/// The amount of sale asset transferred
pub fn withdraw_unsold(
    e: &Env,
    creator: Address,
    sale_asset: Address,
) -> Result<i128, LaunchpadError> {
    let mut presale =
        storage::get_presale(e, &sale_asset).ok_or(LaunchpadError::PresaleNotFound)?;
    if !presale.settled {
        return Err(LaunchpadError::PresaleNotSettled);
    }
    if !AccessControl::authorize_owner(&creator, &presale.creator) {
        return Err(LaunchpadError::Unauthorized);
    }

    let unsold = unsold_balance(
        presale.sale_tokens_funded,
        presale.total_allocated,
        presale.unsold_withdrawn,
    )?;
    if unsold <= 0 {
        return Err(LaunchpadError::NothingToClaim);
    }

    let withdrawn = add(presale.unsold_withdrawn, unsold)?;
    transfer::out_of_escrow(e, &sale_asset, &creator, unsold, CTX_UNSOLD)?;

    presale.unsold_withdrawn = withdrawn;
    storage::set_presale(e, &presale);
    Storage::extend_instance(e);

    Events::emit_for_asset(e, symbol_short!("unsold"), &sale_asset, (creator, unsold));

    Ok(unsold)
}

fn unsold_balance(funded: i128, allocated: i128, withdrawn: i128) -> Result<i128, LaunchpadError> {
    SafeMath::sub(funded, allocated)
        .and_then(|rest| SafeMath::sub(rest, withdrawn))
        .ok_or(LaunchpadError::ArithmeticOverflow)
}
