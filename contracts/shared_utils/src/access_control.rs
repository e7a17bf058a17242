//! Access control patterns and utilities

use super::storage::Storage;
use soroban_sdk::{Address, Env};

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Check if an address is the admin
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `address` - The address to check
    ///
    /// # Returns
    /// `true` if address is admin, `false` otherwise (including before initialization)
    pub fn is_admin(e: &Env, address: &Address) -> bool {
        match Storage::get_admin(e) {
            Some(admin) => admin == *address,
            None => false,
        }
    }

    /// Authenticate `caller` and check it is the admin
    ///
    /// # Returns
    /// `true` if the authenticated caller is the admin
    pub fn authorize_admin(e: &Env, caller: &Address) -> bool {
        caller.require_auth();
        Self::is_admin(e, caller)
    }

    /// Authenticate `caller` and check it matches `owner`
    ///
    /// # Arguments
    /// * `caller` - The caller address
    /// * `owner` - The owner recorded on the resource
    pub fn authorize_owner(caller: &Address, owner: &Address) -> bool {
        caller.require_auth();
        caller == owner
    }
}
