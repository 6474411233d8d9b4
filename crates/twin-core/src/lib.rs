//! Prompt assembly and port trait definitions for Twin.
//!
//! This crate defines the ports (`ProfileSource`, `Clock`) that the
//! infrastructure layer implements, plus the pure system prompt builder.
//! It depends only on `twin-types` -- never on `twin-infra` or any IO crate.

pub mod clock;
pub mod profile;
pub mod prompt;
pub mod service;
pub mod source;
pub mod templates;
