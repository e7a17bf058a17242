//! Pause (circuit breaker) utilities
use super::events::Events;
use soroban_sdk::{symbol_short, Env};

pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};
    pub const PAUSED: Symbol = symbol_short!("PAUSED");
}

pub struct PauseControl;

impl PauseControl {
    /// Check if the contract is paused
    pub fn is_paused(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&keys::PAUSED)
            .unwrap_or(false)
    }

    /// Set pause status and publish a `paused` event
    pub fn set_paused(e: &Env, paused: bool) {
        e.storage().instance().set(&keys::PAUSED, &paused);

        Events::emit(
            e,
            symbol_short!("paused"),
            (paused, e.ledger().timestamp()),
        );
    }
}
