//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate engine, reference data and repository calls into use-case APIs.
//! - Keep FFI/CLI layers decoupled from storage details.

pub mod atom_service;
pub mod element_service;
pub mod quiz_service;
