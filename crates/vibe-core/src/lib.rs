//! Vibe core — chat wire types, configuration, and the persisted state store.

pub mod config;
pub mod state;
pub mod types;
pub mod utils;
