//! Presale registry: creation, lookup and enumeration.

use shared_utils::{Events, PauseControl, Storage, TimeUtils, TimeWindow, Validation};
use soroban_sdk::{symbol_short, Address, Env, Vec};

use crate::constants::MAX_PAGE_SIZE;
use crate::error::LaunchpadError;
use crate::storage;
use crate::types::{Presale, PresaleStatus};

/// Register a new presale for `sale_asset`.
///
/// # Errors
/// * `NotInitialized` - launchpad has no admin
/// * `LaunchpadPaused` - creation is paused
/// * `InvalidParameters` - same asset on both legs, non-positive rate or cap,
///   empty window, or a window that already closed
/// * `DuplicatePresale` - `sale_asset` already has a presale
#[allow(clippy::too_many_arguments)]
pub fn create_presale(
    e: &Env,
    creator: Address,
    sale_asset: Address,
    payment_asset: Address,
    rate: i128,
    start_time: u64,
    end_time: u64,
    hard_cap: i128,
) -> Result<Presale, LaunchpadError> {
    creator.require_auth();

    if !Storage::is_initialized(e) {
        return Err(LaunchpadError::NotInitialized);
    }
    if PauseControl::is_paused(e) {
        return Err(LaunchpadError::LaunchpadPaused);
    }

    let now = TimeUtils::now(e);
    let window = TimeWindow::new(start_time, end_time);
    if !Validation::are_distinct(&sale_asset, &payment_asset)
        || !Validation::is_positive(rate)
        || !Validation::is_positive(hard_cap)
        || !Validation::is_open_ended_in_future(&window, now)
    {
        return Err(LaunchpadError::InvalidParameters);
    }

    if storage::has_presale(e, &sale_asset) {
        return Err(LaunchpadError::DuplicatePresale);
    }

    let presale = Presale {
        sale_asset: sale_asset.clone(),
        payment_asset: payment_asset.clone(),
        creator: creator.clone(),
        rate,
        start_time,
        end_time,
        hard_cap,
        total_raised: 0,
        total_allocated: 0,
        sale_tokens_funded: 0,
        tokens_claimed: 0,
        unsold_withdrawn: 0,
        settled: false,
        withdrawn: false,
        created_at: now,
        ended_at: 0,
        contributor_count: 0,
    };

    storage::set_presale(e, &presale);
    let index = storage::push_index(e, &sale_asset);
    Storage::extend_instance(e);

    Events::emit_for_asset(
        e,
        symbol_short!("created"),
        &sale_asset,
        (creator, payment_asset, rate, start_time, end_time, hard_cap, index),
    );

    Ok(presale)
}

pub fn get_presale(e: &Env, sale_asset: &Address) -> Result<Presale, LaunchpadError> {
    storage::get_presale(e, sale_asset).ok_or(LaunchpadError::PresaleNotFound)
}

/// Every presale in creation order
pub fn get_all_presales(e: &Env) -> Vec<Presale> {
    collect_range(e, 0, storage::presale_count(e))
}

/// Up to `limit` presales starting at creation index `start`.
///
/// Paging past the end yields an empty page, so callers can walk the
/// registry with `start += page.len()` until the page is empty.
pub fn get_presales(e: &Env, start: u32, limit: u32) -> Result<Vec<Presale>, LaunchpadError> {
    if !Validation::is_in_range(limit, 1, MAX_PAGE_SIZE) {
        return Err(LaunchpadError::InvalidParameters);
    }
    let end = storage::presale_count(e).min(start.saturating_add(limit));
    Ok(collect_range(e, start, end))
}

pub fn presale_count(e: &Env) -> u32 {
    storage::presale_count(e)
}

pub fn presale_status(e: &Env, sale_asset: &Address) -> Result<PresaleStatus, LaunchpadError> {
    let presale = get_presale(e, sale_asset)?;
    Ok(presale.status(TimeUtils::now(e)))
}

fn collect_range(e: &Env, start: u32, end: u32) -> Vec<Presale> {
    let mut presales = Vec::new(e);
    for index in start..end {
        if let Some(sale_asset) = storage::sale_asset_at(e, index) {
            if let Some(presale) = storage::get_presale(e, &sale_asset) {
                presales.push_back(presale);
            }
        }
    }
    presales
}
