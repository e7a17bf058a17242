//! Settlement engine: closes presales and pays the raise out once.

use shared_utils::{AccessControl, Events, Storage, TimeUtils};
use soroban_sdk::{symbol_short, Address, Env};

use crate::constants::CTX_WITHDRAW;
use crate::error::LaunchpadError;
use crate::storage;
use crate::transfer;

/// Settle `sale_asset`'s presale.
///
/// Anyone may settle once the window has closed; before that only the
/// launchpad admin can force-end the sale.
///
/// # Errors
/// * `PresaleNotFound`
/// * `AlreadySettled`
/// * `PresaleStillActive` - window open and caller is not the admin
pub fn end_presale(e: &Env, caller: Address, sale_asset: Address) -> Result<(), LaunchpadError> {
    caller.require_auth();

    let mut presale =
        storage::get_presale(e, &sale_asset).ok_or(LaunchpadError::PresaleNotFound)?;
    if presale.settled {
        return Err(LaunchpadError::AlreadySettled);
    }

    let now = TimeUtils::now(e);
    let forced = !presale.window().is_after(now);
    if forced && !AccessControl::is_admin(e, &caller) {
        return Err(LaunchpadError::PresaleStillActive);
    }

    presale.settled = true;
    presale.ended_at = now;
    storage::set_presale(e, &presale);
    Storage::extend_instance(e);

    Events::emit_for_asset(
        e,
        symbol_short!("ended"),
        &sale_asset,
        (caller, presale.total_raised, forced, now),
    );

    Ok(())
}

/// Pay the raised payment asset to the presale creator. At most once.
///
/// # Errors
/// * `PresaleNotFound`
/// * `PresaleNotSettled`
/// * `Unauthorized` - caller is not the creator
/// * `AlreadyWithdrawn`
/// * `TransferFailed` - nothing is recorded, the call can be retried
pub fn withdraw_funds(e: &Env, caller: Address, sale_asset: Address) -> Result<(), LaunchpadError> {
    let mut presale =
        storage::get_presale(e, &sale_asset).ok_or(LaunchpadError::PresaleNotFound)?;
    if !presale.settled {
        return Err(LaunchpadError::PresaleNotSettled);
    }
    if !AccessControl::authorize_owner(&caller, &presale.creator) {
        return Err(LaunchpadError::Unauthorized);
    }
    if presale.withdrawn {
        return Err(LaunchpadError::AlreadyWithdrawn);
    }

    if presale.total_raised > 0 {
        transfer::out_of_escrow(
            e,
            &presale.payment_asset,
            &presale.creator,
            presale.total_raised,
            CTX_WITHDRAW,
        )?;
    }

    presale.withdrawn = true;
    storage::set_presale(e, &presale);
    Storage::extend_instance(e);

    Events::emit_for_asset(
        e,
        symbol_short!("withdrawn"),
        &sale_asset,
        (caller, presale.total_raised),
    );

    Ok(())
}
