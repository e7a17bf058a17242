//! Contribution engine: validates and applies a single purchase.

use shared_utils::{Events, FixedPoint, PauseControl, SafeMath, Storage, TimeUtils, Validation};
use soroban_sdk::{symbol_short, Address, Env, Vec};

use crate::constants::{CTX_BUY, MAX_PAGE_SIZE};
use crate::error::LaunchpadError;
use crate::storage;
use crate::transfer;
use crate::types::Presale;

/// Buy sale-asset allocation in `sale_asset`'s presale with `payment_amount`
/// of its payment asset.
///
/// Checks run in a fixed order and each failure has its own error. The
/// payment is pulled into escrow before any bookkeeping is written, so a
/// rejected transfer leaves the presale untouched.
///
/// # Returns
/// The sale-asset allocation credited to `contributor`
pub fn buy_token(
    e: &Env,
    contributor: Address,
    sale_asset: Address,
    payment_amount: i128,
) -> Result<i128, LaunchpadError> {
    contributor.require_auth();

    if PauseControl::is_paused(e) {
        return Err(LaunchpadError::LaunchpadPaused);
    }

    let mut presale =
        storage::get_presale(e, &sale_asset).ok_or(LaunchpadError::PresaleNotFound)?;
    if presale.settled {
        return Err(LaunchpadError::PresaleClosed);
    }
    if !presale.window().contains(TimeUtils::now(e)) {
        return Err(LaunchpadError::OutsideSaleWindow);
    }
    if !Validation::is_positive(payment_amount) {
        return Err(LaunchpadError::InvalidAmount);
    }
    if !Validation::fits_under_cap(presale.total_raised, payment_amount, presale.hard_cap) {
        return Err(LaunchpadError::HardCapExceeded);
    }

    let allocation = allocation_for(&presale, payment_amount)?;
    if allocation == 0 {
        return Err(LaunchpadError::InvalidAmount);
    }

    // Stage every new total before touching the ledger.
    let total_raised = add(presale.total_raised, payment_amount)?;
    let total_allocated = add(presale.total_allocated, allocation)?;
    let previous = storage::get_contribution(e, &sale_asset, &contributor);
    let contribution = add(previous, payment_amount)?;
    let contributor_allocation = add(
        storage::get_allocation(e, &sale_asset, &contributor),
        allocation,
    )?;

    transfer::into_escrow(e, &presale.payment_asset, &contributor, payment_amount, CTX_BUY)?;

    // Contributions are always positive, so a zero ledger means first purchase.
    if previous == 0 {
        let index = presale.contributor_count;
        presale.contributor_count = index
            .checked_add(1)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        storage::set_contributor_at(e, &sale_asset, index, &contributor);
    }

    presale.total_raised = total_raised;
    presale.total_allocated = total_allocated;
    storage::set_presale(e, &presale);
    storage::set_contribution(e, &sale_asset, &contributor, contribution);
    storage::set_allocation(e, &sale_asset, &contributor, contributor_allocation);
    Storage::extend_instance(e);

    Events::emit_for_asset(
        e,
        symbol_short!("bought"),
        &sale_asset,
        (contributor, payment_amount, allocation, total_raised),
    );

    Ok(allocation)
}

/// Allocation `payment_amount` would buy at the presale's rate. Read-only.
pub fn quote_allocation(
    e: &Env,
    sale_asset: &Address,
    payment_amount: i128,
) -> Result<i128, LaunchpadError> {
    let presale = storage::get_presale(e, sale_asset).ok_or(LaunchpadError::PresaleNotFound)?;
    if !Validation::is_positive(payment_amount) {
        return Err(LaunchpadError::InvalidAmount);
    }
    allocation_for(&presale, payment_amount)
}

pub fn get_contribution(e: &Env, sale_asset: &Address, contributor: &Address) -> i128 {
    storage::get_contribution(e, sale_asset, contributor)
}

pub fn get_allocation(e: &Env, sale_asset: &Address, contributor: &Address) -> i128 {
    storage::get_allocation(e, sale_asset, contributor)
}

/// Up to `limit` contributors of `sale_asset` in first-contribution order,
/// starting at position `start`. Unknown presales have no contributors.
pub fn get_contributors(
    e: &Env,
    sale_asset: &Address,
    start: u32,
    limit: u32,
) -> Result<Vec<Address>, LaunchpadError> {
    if !Validation::is_in_range(limit, 1, MAX_PAGE_SIZE) {
        return Err(LaunchpadError::InvalidParameters);
    }
    let count = contributor_count(e, sale_asset);
    let end = count.min(start.saturating_add(limit));

    let mut contributors = Vec::new(e);
    for index in start..end {
        if let Some(contributor) = storage::contributor_at(e, sale_asset, index) {
            contributors.push_back(contributor);
        }
    }
    Ok(contributors)
}

pub fn contributor_count(e: &Env, sale_asset: &Address) -> u32 {
    storage::get_presale(e, sale_asset)
        .map(|presale| presale.contributor_count)
        .unwrap_or(0)
}

pub fn remaining_capacity(e: &Env, sale_asset: &Address) -> Result<i128, LaunchpadError> {
    let presale = storage::get_presale(e, sale_asset).ok_or(LaunchpadError::PresaleNotFound)?;
    Ok(presale.remaining_capacity())
}

fn allocation_for(presale: &Presale, payment_amount: i128) -> Result<i128, LaunchpadError> {
    FixedPoint::sale_amount_for(payment_amount, presale.rate)
        .ok_or(LaunchpadError::ArithmeticOverflow)
}

pub(crate) fn add(a: i128, b: i128) -> Result<i128, LaunchpadError> {
    SafeMath::add(a, b).ok_or(LaunchpadError::ArithmeticOverflow)
}
