//! Flutter-facing bindings for the AtomLab core.

pub mod api;
