#![no_std]

//! Launchpad contract
//!
//! Runs any number of independent token presales. Each presale is keyed by
//! its sale asset, accepts a payment asset inside `[start_time, end_time)`
//! up to a hard cap at a fixed rate, and pays the raise to its creator once
//! settled. Sold tokens are escrowed by the creator and claimed by
//! contributors after settlement.

use shared_utils::{AccessControl, Events, PauseControl, Storage};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};

pub mod constants;
mod contribution;
pub mod error;
mod escrow;
mod registry;
mod settlement;
mod storage;
mod transfer;
pub mod types;

pub use error::LaunchpadError;
pub use types::{DataKey, Presale, PresaleStatus};


#[contract]
pub struct LaunchpadContract;

#[contractimpl]
impl LaunchpadContract {
    // ========================================================================
    // Administration
    // ========================================================================

    /// Initialize the launchpad with its admin
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the launchpad has already been initialized
    pub fn initialize(e: Env, admin: Address) -> Result<(), LaunchpadError> {
        if Storage::is_initialized(&e) {
            return Err(LaunchpadError::AlreadyInitialized);
        }
        admin.require_auth();

        Storage::set_admin(&e, &admin);
        Storage::set_initialized(&e);
        Storage::extend_instance(&e);

        Events::emit(&e, symbol_short!("init"), (admin, e.ledger().timestamp()));
        Ok(())
    }

    pub fn get_admin(e: Env) -> Result<Address, LaunchpadError> {
        Storage::get_admin(&e).ok_or(LaunchpadError::NotInitialized)
    }

    /// Pause or resume presale creation and purchases (admin only).
    /// Settlement, withdrawals and claims are never paused.
    pub fn set_paused(e: Env, admin: Address, paused: bool) -> Result<(), LaunchpadError> {
        if !Storage::is_initialized(&e) {
            return Err(LaunchpadError::NotInitialized);
        }
        if !AccessControl::authorize_admin(&e, &admin) {
            return Err(LaunchpadError::Unauthorized);
        }
        PauseControl::set_paused(&e, paused);
        Ok(())
    }

    pub fn is_paused(e: Env) -> bool {
        PauseControl::is_paused(&e)
    }

    // ========================================================================
    // Registry
    // ========================================================================

    /// Create a presale selling `sale_asset` for `payment_asset`.
    ///
    /// # Arguments
    /// * `creator` - Receives the raise on settlement
    /// * `rate` - Payment units per sale unit, 18-decimal fixed point
    /// * `start_time`, `end_time` - Sale window `[start_time, end_time)`
    /// * `hard_cap` - Maximum total payment accepted
    #[allow(clippy::too_many_arguments)]
    pub fn create_presale(
        e: Env,
        creator: Address,
        sale_asset: Address,
        payment_asset: Address,
        rate: i128,
        start_time: u64,
        end_time: u64,
        hard_cap: i128,
    ) -> Result<Presale, LaunchpadError> {
        registry::create_presale(
            &e,
            creator,
            sale_asset,
            payment_asset,
            rate,
            start_time,
            end_time,
            hard_cap,
        )
    }

    pub fn get_presale(e: Env, sale_asset: Address) -> Result<Presale, LaunchpadError> {
        registry::get_presale(&e, &sale_asset)
    }

    /// All presales in creation order
    pub fn get_all_presales(e: Env) -> Vec<Presale> {
        registry::get_all_presales(&e)
    }

    /// A page of presales in creation order, `limit` in `1..=MAX_PAGE_SIZE`
    pub fn get_presales(e: Env, start: u32, limit: u32) -> Result<Vec<Presale>, LaunchpadError> {
        registry::get_presales(&e, start, limit)
    }

    pub fn get_presale_count(e: Env) -> u32 {
        registry::presale_count(&e)
    }

    pub fn get_presale_status(e: Env, sale_asset: Address) -> Result<PresaleStatus, LaunchpadError> {
        registry::presale_status(&e, &sale_asset)
    }

    // ========================================================================
    // Contributions
    // ========================================================================

    /// Contribute `payment_amount` and receive a sale-asset allocation
    pub fn buy_token(
        e: Env,
        contributor: Address,
        sale_asset: Address,
        payment_amount: i128,
    ) -> Result<i128, LaunchpadError> {
        contribution::buy_token(&e, contributor, sale_asset, payment_amount)
    }

    pub fn quote_allocation(
        e: Env,
        sale_asset: Address,
        payment_amount: i128,
    ) -> Result<i128, LaunchpadError> {
        contribution::quote_allocation(&e, &sale_asset, payment_amount)
    }

    pub fn get_contribution(e: Env, sale_asset: Address, contributor: Address) -> i128 {
        contribution::get_contribution(&e, &sale_asset, &contributor)
    }

    pub fn get_allocation(e: Env, sale_asset: Address, contributor: Address) -> i128 {
        contribution::get_allocation(&e, &sale_asset, &contributor)
    }

    /// A page of contributors in first-contribution order, `limit` in `1..=MAX_PAGE_SIZE`
    pub fn get_contributors(
        e: Env,
        sale_asset: Address,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Address>, LaunchpadError> {
        contribution::get_contributors(&e, &sale_asset, start, limit)
    }

    pub fn get_contributor_count(e: Env, sale_asset: Address) -> u32 {
        contribution::contributor_count(&e, &sale_asset)
    }

    /// Payment still accepted before the hard cap is reached
    pub fn get_remaining_capacity(e: Env, sale_asset: Address) -> Result<i128, LaunchpadError> {
        contribution::remaining_capacity(&e, &sale_asset)
    }

    // ========================================================================
    // Settlement
    // ========================================================================

    /// Close a presale. Anyone after `end_time`, the admin at any time.
    pub fn end_presale(e: Env, caller: Address, sale_asset: Address) -> Result<(), LaunchpadError> {
        settlement::end_presale(&e, caller, sale_asset)
    }

    /// Pay the raise to the creator (creator only, once)
    pub fn withdraw_funds(
        e: Env,
        caller: Address,
        sale_asset: Address,
    ) -> Result<(), LaunchpadError> {
        settlement::withdraw_funds(&e, caller, sale_asset)
    }

    // ========================================================================
    // Sale-asset escrow
    // ========================================================================

    pub fn fund_presale(
        e: Env,
        creator: Address,
        sale_asset: Address,
        amount: i128,
    ) -> Result<(), LaunchpadError> {
        escrow::fund_presale(&e, creator, sale_asset, amount)
    }

    pub fn claim_tokens(
        e: Env,
        contributor: Address,
        sale_asset: Address,
    ) -> Result<i128, LaunchpadError> {
        escrow::claim_tokens(&e, contributor, sale_asset)
    }

    pub fn withdraw_unsold(
        e: Env,
        creator: Address,
        sale_asset: Address,
    ) -> Result<i128, LaunchpadError> {
        escrow::withdraw_unsold(&e, creator, sale_asset)
    }
}
