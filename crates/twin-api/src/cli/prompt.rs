//! `twin prompt`: render the system prompt.

use std::sync::Arc;

use anyhow::{Context, Result};

use twin_core::clock::{format_timestamp, Clock, FixedClock, SystemClock};
use twin_core::service::{PromptService, RenderedPrompt};
use twin_types::error::PromptError;
use twin_types::profile::ProfileSnapshot;

use crate::state::AppState;

/// Load the persona resources and print the system prompt.
///
/// With `at`, the timestamp is pinned instead of read from the clock, which
/// makes the output reproducible. Nothing is written to stdout on failure.
///
/// # Examples
///
/// ```bash
/// twin prompt
/// twin prompt --at "2024-03-07 09:05:03" --json
/// ```
pub async fn render_prompt(state: &AppState, at: Option<&str>, json: bool) -> Result<()> {
    let snapshot = Arc::new(state.loader.load().await?);

    let rendered = match at {
        Some(value) => {
            let clock = FixedClock::parse(value)
                .with_context(|| format!("invalid --at '{value}', expected YYYY-MM-DD HH:MM:SS"))?;
            render_with(snapshot, clock)?
        }
        None => render_with(snapshot, SystemClock)?,
    };

    if json {
        let output = serde_json::json!({
            "generated_at": format_timestamp(rendered.generated_at),
            "prompt": rendered.prompt,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", rendered.prompt);
    }

    Ok(())
}

fn render_with<C: Clock>(
    snapshot: Arc<ProfileSnapshot>,
    clock: C,
) -> Result<RenderedPrompt, PromptError> {
    PromptService::new(snapshot, clock).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use twin_types::profile::{Identity, ResourceKind};

    #[test]
    fn render_with_fixed_clock_embeds_time() {
        let snapshot = Arc::new(ProfileSnapshot {
            identity: Some(Identity::new("Jane Q. Doe", "Jane")),
            summary: Some("Senior backend engineer.".to_string()),
            linkedin: Some("10 years at Acme Corp.".to_string()),
            style: Some("Concise, warm.".to_string()),
        });
        let clock = FixedClock::parse("2024-03-07 09:05:03").unwrap();
        let rendered = render_with(snapshot, clock).unwrap();
        assert!(rendered.prompt.contains("2024-03-07 09:05:03"));
    }

    #[test]
    fn render_with_missing_style_fails() {
        let snapshot = Arc::new(ProfileSnapshot {
            identity: Some(Identity::new("Jane Q. Doe", "Jane")),
            summary: Some("Senior backend engineer.".to_string()),
            linkedin: Some("10 years at Acme Corp.".to_string()),
            style: None,
        });
        let err = render_with(snapshot, SystemClock).unwrap_err();
        assert!(matches!(
            err,
            PromptError::MissingResource {
                resource: ResourceKind::Style
            }
        ));
    }

    #[tokio::test]
    async fn render_prompt_rejects_bad_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::init(Some(dir.path().to_path_buf())).await;
        state.loader.scaffold("Jane Q. Doe", "Jane").await.unwrap();

        let err = render_prompt(&state, Some("yesterday"), false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid --at 'yesterday'"));
    }

    #[tokio::test]
    async fn render_prompt_surfaces_missing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::init(Some(dir.path().to_path_buf())).await;

        let err = render_prompt(&state, None, false).await.unwrap_err();
        let prompt_err = err.downcast_ref::<PromptError>().unwrap();
        assert!(matches!(
            prompt_err,
            PromptError::MissingResource {
                resource: ResourceKind::Facts
            }
        ));
    }
}
