//! Domain model for the atom builder, element table and quiz bank.
//!
//! # Responsibility
//! - Define canonical value types and static reference data.
//! - Keep derived calculations pure and storage-free.
//!
//! # Invariants
//! - `AtomConfiguration` values produced by core always satisfy the clamp rules.
//! - Reference tables are read-only for the whole process lifetime.

pub mod atom;
pub mod derived;
pub mod element;
pub mod quiz;
