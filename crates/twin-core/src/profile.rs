//! Validated view over a persona's resources.

use twin_types::error::PromptError;
use twin_types::profile::{is_filled_in, Identity, ResourceKind};

use crate::source::ProfileSource;

/// All four resources, each guaranteed present, non-blank and edited past
/// the starter template.
///
/// Borrows from the underlying source; text is kept exactly as loaded.
#[derive(Debug, Clone, Copy)]
pub struct PersonaProfile<'a> {
    pub identity: &'a Identity,
    pub summary: &'a str,
    pub linkedin: &'a str,
    pub style: &'a str,
}

impl<'a> PersonaProfile<'a> {
    /// Validate a source, failing on the first missing resource.
    ///
    /// Resources are checked in [`ResourceKind::ALL`] order. An identity with
    /// a blank `full_name` or `name` counts as missing facts.
    pub fn from_source<S: ProfileSource + ?Sized>(source: &'a S) -> Result<Self, PromptError> {
        let identity = source
            .identity()
            .filter(|identity| identity.is_complete())
            .ok_or(PromptError::MissingResource {
                resource: ResourceKind::Facts,
            })?;

        Ok(Self {
            identity,
            summary: require(source.summary(), ResourceKind::Summary)?,
            linkedin: require(source.linkedin(), ResourceKind::LinkedIn)?,
            style: require(source.style(), ResourceKind::Style)?,
        })
    }
}

fn require(text: Option<&str>, resource: ResourceKind) -> Result<&str, PromptError> {
    match text {
        Some(t) if is_filled_in(t) => Ok(t),
        _ => Err(PromptError::MissingResource { resource }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twin_types::profile::ProfileSnapshot;

    fn complete() -> ProfileSnapshot {
        ProfileSnapshot {
            identity: Some(Identity::new("Jane Q. Doe", "Jane")),
            summary: Some("Senior backend engineer.".to_string()),
            linkedin: Some("10 years at Acme Corp.".to_string()),
            style: Some("Concise, warm.".to_string()),
        }
    }

    fn missing_of(snapshot: &ProfileSnapshot) -> Option<ResourceKind> {
        match PersonaProfile::from_source(snapshot) {
            Err(PromptError::MissingResource { resource }) => Some(resource),
            _ => None,
        }
    }

    #[test]
    fn test_complete_snapshot_validates() {
        let snapshot = complete();
        let profile = PersonaProfile::from_source(&snapshot).unwrap();
        assert_eq!(profile.identity.full_name, "Jane Q. Doe");
        assert_eq!(profile.summary, "Senior backend engineer.");
        assert_eq!(profile.linkedin, "10 years at Acme Corp.");
        assert_eq!(profile.style, "Concise, warm.");
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let mut snapshot = complete();
        snapshot.summary = Some("\n  Senior backend engineer.\n".to_string());
        let profile = PersonaProfile::from_source(&snapshot).unwrap();
        assert_eq!(profile.summary, "\n  Senior backend engineer.\n");
    }

    #[test]
    fn test_absent_summary_is_missing() {
        let mut snapshot = complete();
        snapshot.summary = None;
        assert_eq!(missing_of(&snapshot), Some(ResourceKind::Summary));
    }

    #[test]
    fn test_blank_style_is_missing() {
        let mut snapshot = complete();
        snapshot.style = Some(" \t\n".to_string());
        assert_eq!(missing_of(&snapshot), Some(ResourceKind::Style));
    }

    #[test]
    fn test_unedited_starter_summary_is_missing() {
        let mut snapshot = complete();
        snapshot.summary = Some(crate::templates::generate_default_summary("Jane"));
        assert_eq!(missing_of(&snapshot), Some(ResourceKind::Summary));
    }

    #[test]
    fn test_blank_name_is_missing_facts() {
        let mut snapshot = complete();
        snapshot.identity = Some(Identity::new("Jane Q. Doe", ""));
        assert_eq!(missing_of(&snapshot), Some(ResourceKind::Facts));
    }

    #[test]
    fn test_first_missing_resource_wins() {
        let snapshot = ProfileSnapshot::default();
        assert_eq!(missing_of(&snapshot), Some(ResourceKind::Facts));

        let mut snapshot = complete();
        snapshot.linkedin = None;
        snapshot.style = None;
        assert_eq!(missing_of(&snapshot), Some(ResourceKind::LinkedIn));
    }
}
