//! Twin CLI entry point.
//!
//! Binary name: `twin`
//!
//! Parses CLI arguments, resolves the data directory and its configuration,
//! then dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use twin_observe::tracing_setup::{init_tracing, shutdown_tracing, TracingOptions};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "twin", &mut std::io::stdout());
        return Ok(());
    }

    // twin.toml is read before the subscriber exists, so its own fallback
    // warnings are not logged.
    let state = AppState::init(cli.data_dir.clone()).await;

    let options = TracingOptions {
        json: state.config.logging.json,
        otel: state.config.logging.otel,
        ..TracingOptions::from_verbosity(cli.verbose, cli.quiet)
    };
    if let Err(e) = init_tracing(&options) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    tracing::debug!(data_dir = %state.data_dir.display(), "Resolved data directory");

    let result = match cli.command {
        Commands::Prompt { at } => cli::prompt::render_prompt(&state, at.as_deref(), cli.json).await,
        Commands::Check => cli::check::check(&state, cli.json).await,
        Commands::Init { full_name, name } => {
            cli::init::init(&state, &full_name, &name, cli.json).await
        }
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
