//! Prompt service: the `build_prompt` use case.
//!
//! Wires a [`ProfileSource`] and a [`Clock`] together. Each call validates
//! the resources, reads the clock once and assembles a fresh prompt. Nothing
//! is cached between calls.

use chrono::NaiveDateTime;
use twin_types::error::PromptError;

use crate::clock::{format_timestamp, Clock};
use crate::profile::PersonaProfile;
use crate::prompt::SystemPromptBuilder;
use crate::source::ProfileSource;

/// A freshly built system prompt and the instant it was stamped with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub prompt: String,
    pub generated_at: NaiveDateTime,
}

/// Builds system prompts from an immutable resource snapshot.
///
/// Generic over the source and clock so callers can share one loaded
/// snapshot (`Arc<ProfileSnapshot>`) across concurrent requests and tests
/// can pin the clock.
pub struct PromptService<S: ProfileSource, C: Clock> {
    source: S,
    clock: C,
}

impl<S: ProfileSource, C: Clock> PromptService<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    /// Build the system prompt string.
    ///
    /// Fails with `MissingResource` before reading the clock if any resource
    /// is absent or blank, and with `ClockUnavailable` if the clock read fails.
    pub fn build_prompt(&self) -> Result<String, PromptError> {
        self.render().map(|rendered| rendered.prompt)
    }

    /// Build the system prompt and report the timestamp embedded in it.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn render(&self) -> Result<RenderedPrompt, PromptError> {
        let profile = PersonaProfile::from_source(&self.source).inspect_err(|e| {
            tracing::warn!("Refusing to build prompt: {e}");
        })?;

        let generated_at = self.clock.now()?;
        let prompt = SystemPromptBuilder::build(&profile, &format_timestamp(generated_at));

        tracing::debug!(
            persona = %profile.identity.name,
            chars = prompt.len(),
            "Built system prompt"
        );

        Ok(RenderedPrompt {
            prompt,
            generated_at,
        })
    }
}
