//! `twin check`: report which persona resources are present.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

/// Show each resource's path and whether it is usable.
///
/// Fails (non-zero exit) when any resource is missing, so the command can
/// gate deploys.
pub async fn check(state: &AppState, json: bool) -> Result<()> {
    let snapshot = state.loader.load().await?;
    let statuses = state.loader.status(&snapshot);
    let missing: Vec<String> = statuses
        .iter()
        .filter(|s| !s.present)
        .map(|s| s.kind.to_string())
        .collect();

    if json {
        let resources: Vec<serde_json::Value> = statuses
            .iter()
            .map(|s| {
                serde_json::json!({
                    "resource": s.kind.to_string(),
                    "path": s.path.display().to_string(),
                    "present": s.present,
                })
            })
            .collect();
        let report = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "persona": snapshot.identity.as_ref().map(|i| i.full_name.clone()),
            "resources": resources,
            "ready": missing.is_empty(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Resource").fg(Color::White),
            Cell::new("Path").fg(Color::White),
            Cell::new("Status").fg(Color::White),
        ]);

        for status in &statuses {
            let status_cell = if status.present {
                Cell::new("● present").fg(Color::Green)
            } else {
                Cell::new("○ missing").fg(Color::Red)
            };
            table.add_row(vec![
                Cell::new(status.kind.to_string()),
                Cell::new(status.path.display().to_string()),
                status_cell,
            ]);
        }

        println!();
        println!(
            "  Resources in {}",
            style(state.data_dir.display()).cyan()
        );
        println!("{table}");
        println!();
        if missing.is_empty() {
            println!("  {} Ready to build the prompt.", style("ok").green().bold());
            println!();
        }
    }

    if !missing.is_empty() {
        anyhow::bail!("missing resources: {}", missing.join(", "));
    }

    Ok(())
}
