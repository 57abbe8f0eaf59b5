//! Atom builder state engine.
//!
//! # Responsibility
//! - Hold the single mutable atom state and its bounded history.
//! - Keep randomness behind an injectable source.
//!
//! # Invariants
//! - All state changes flow through `AtomEngine` mutators.

pub mod atom_engine;
pub mod history;
pub mod random;
