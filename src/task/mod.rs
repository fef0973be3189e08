//! Task status derivation, classification, and lifecycle for Hive.
//!
//! This module is the one shared home for the predicate and transition
//! logic the host dashboards, kanban board, and list views all repeat:
//! deriving the display status (including the read-only overdue view),
//! partitioning tasks into UI buckets, and guarding stored-status
//! transitions. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
