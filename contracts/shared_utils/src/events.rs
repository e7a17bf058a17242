//! Event emission patterns and utilities

use soroban_sdk::{Address, Env, Symbol, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with topic and data
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event topic (Symbol)
    /// * `data` - The event data (tuple)
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit an event scoped to an asset, topics `(topic, asset)`
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event topic
    /// * `asset` - The asset the event concerns
    /// * `data` - Additional event data
    pub fn emit_for_asset<T>(e: &Env, topic: Symbol, asset: &Address, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        Self::emit_with_topics(e, (topic, asset.clone()), data);
    }
}
