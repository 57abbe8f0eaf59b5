//! Repository layer for persisted atom state.
//!
//! # Responsibility
//! - Define snapshot persistence contracts.
//! - Isolate SQLite query details from engine and service code.
//!
//! # Invariants
//! - Only the four `AtomConfiguration` fields are persisted, never history.

pub mod snapshot_repo;
