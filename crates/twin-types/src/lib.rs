//! Shared domain types for Twin.
//!
//! This crate contains the types passed between the loader, the prompt
//! builder and the CLI: Identity, ProfileSnapshot, ResourceKind, the
//! configuration model and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod profile;
