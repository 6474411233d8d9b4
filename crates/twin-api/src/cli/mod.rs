//! CLI command definitions and dispatch for the `twin` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod check;
pub mod init;
pub mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build the system prompt for your website's digital twin.
#[derive(Parser)]
#[command(name = "twin", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding twin.toml and the persona resource files.
    #[arg(long, global = true, env = "TWIN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors. Command output is still printed.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the system prompt to stdout.
    Prompt {
        /// Pin the embedded timestamp ("YYYY-MM-DD HH:MM:SS") instead of reading the clock.
        #[arg(long)]
        at: Option<String>,
    },

    /// Check that every persona resource is present.
    Check,

    /// Create a data directory with starter resource files.
    Init {
        /// Display name, e.g. "Jane Q. Doe".
        #[arg(long)]
        full_name: String,

        /// Short or preferred name, e.g. "Jane".
        #[arg(long)]
        name: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
