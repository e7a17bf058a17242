//! Presale record store.
//!
//! Presales and per-contributor ledgers live in persistent storage and are
//! never deleted. The creation-order index is `PresaleAt(i)` for
//! `i < PresaleCount`; each presale's contributor index is
//! `ContributorAt(sale_asset, i)` for `i < Presale::contributor_count`.
//!
//! Only writes extend TTL, so read-only views never write to the ledger.

use shared_utils::Storage;
use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Presale};

// --- Presale records ---

pub fn has_presale(e: &Env, sale_asset: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Presale(sale_asset.clone()))
}

/// Read a presale record. Reads never extend TTL; `set_presale` does.
pub fn get_presale(e: &Env, sale_asset: &Address) -> Option<Presale> {
    e.storage()
        .persistent()
        .get(&DataKey::Presale(sale_asset.clone()))
}

pub fn set_presale(e: &Env, presale: &Presale) {
    let key = DataKey::Presale(presale.sale_asset.clone());
    e.storage().persistent().set(&key, presale);
    Storage::extend_persistent(e, &key);
}

// --- Creation-order index ---

pub fn presale_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::PresaleCount)
        .unwrap_or(0)
}

/// Append `sale_asset` to the index and return its position
pub fn push_index(e: &Env, sale_asset: &Address) -> u32 {
    let index = presale_count(e);
    let key = DataKey::PresaleAt(index);
    e.storage().persistent().set(&key, sale_asset);
    Storage::extend_persistent(e, &key);
    e.storage()
        .instance()
        .set(&DataKey::PresaleCount, &(index + 1));
    index
}

pub fn sale_asset_at(e: &Env, index: u32) -> Option<Address> {
    e.storage().persistent().get(&DataKey::PresaleAt(index))
}

// --- Contributor ledgers ---

pub fn get_contribution(e: &Env, sale_asset: &Address, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Contribution(sale_asset.clone(), contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(e: &Env, sale_asset: &Address, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(sale_asset.clone(), contributor.clone());
    e.storage().persistent().set(&key, &amount);
    Storage::extend_persistent(e, &key);
}

pub fn get_allocation(e: &Env, sale_asset: &Address, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Allocation(sale_asset.clone(), contributor.clone()))
        .unwrap_or(0)
}

pub fn set_allocation(e: &Env, sale_asset: &Address, contributor: &Address, amount: i128) {
    let key = DataKey::Allocation(sale_asset.clone(), contributor.clone());
    e.storage().persistent().set(&key, &amount);
    Storage::extend_persistent(e, &key);
}

pub fn is_claimed(e: &Env, sale_asset: &Address, contributor: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Claimed(sale_asset.clone(), contributor.clone()))
        .unwrap_or(false)
}

pub fn set_claimed(e: &Env, sale_asset: &Address, contributor: &Address) {
    let key = DataKey::Claimed(sale_asset.clone(), contributor.clone());
    e.storage().persistent().set(&key, &true);
    Storage::extend_persistent(e, &key);
}

/// Record `contributor` at position `index` of the presale's contributor index
pub fn set_contributor_at(e: &Env, sale_asset: &Address, index: u32, contributor: &Address) {
    let key = DataKey::ContributorAt(sale_asset.clone(), index);
    e.storage().persistent().set(&key, contributor);
    Storage::extend_persistent(e, &key);
}

pub fn contributor_at(e: &Env, sale_asset: &Address, index: u32) -> Option<Address> {
    e.storage()
        .persistent()
        .get(&DataKey::ContributorAt(sale_asset.clone(), index))
}
