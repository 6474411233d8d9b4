//! `twin init`: scaffold a persona data directory.

use anyhow::Result;
use console::style;
use twin_types::profile::STARTER_MARKER;

use crate::state::AppState;

/// Write twin.toml and starter resource files, keeping any that exist.
///
/// # Examples
///
/// ```bash
/// twin init --full-name "Jane Q. Doe" --name Jane
/// ```
pub async fn init(state: &AppState, full_name: &str, name: &str, json: bool) -> Result<()> {
    if full_name.trim().is_empty() || name.trim().is_empty() {
        anyhow::bail!("--full-name and --name must not be empty");
    }

    let created = state.loader.scaffold(full_name, name).await?;

    if json {
        let created: Vec<String> = created.iter().map(|p| p.display().to_string()).collect();
        let output = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "created": created,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    if created.is_empty() {
        println!(
            "  Nothing to do: {} already has every file.",
            style(state.data_dir.display()).cyan()
        );
    } else {
        for path in &created {
            println!("  {} {}", style("created").green().bold(), path.display());
        }
        println!();
        println!(
            "  Replace the starter text (and its {} line), then run {} to confirm.",
            style(STARTER_MARKER).yellow(),
            style("twin check").bold()
        );
    }
    println!();

    Ok(())
}
