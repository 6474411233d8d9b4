//! Infrastructure layer for Twin.
//!
//! Loads persona resource files from a data directory into an immutable
//! `ProfileSnapshot`, reads `twin.toml`, and scaffolds new data directories.

pub mod config;
pub mod filesystem;
