//! Authenticated-session state for the Hive client core.
//!
//! Replaces the ambient browser-storage session access of the host
//! applications with an explicit, injectable interface:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
