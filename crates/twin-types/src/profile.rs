use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four biographical resources a persona is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Identity facts (`facts.json`).
    Facts,
    /// Free-text background summary.
    Summary,
    /// Flattened LinkedIn profile.
    LinkedIn,
    /// Communication style notes.
    Style,
}

impl ResourceKind {
    /// All resource kinds, in the order they are validated and rendered.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Facts,
        ResourceKind::Summary,
        ResourceKind::LinkedIn,
        ResourceKind::Style,
    ];

    /// Default file name for this resource inside the data directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ResourceKind::Facts => "facts.json",
            ResourceKind::Summary => "summary.txt",
            ResourceKind::LinkedIn => "linkedin.txt",
            ResourceKind::Style => "style.txt",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Facts => "facts",
            ResourceKind::Summary => "summary",
            ResourceKind::LinkedIn => "linkedin",
            ResourceKind::Style => "style",
        };
        write!(f, "{s}")
    }
}

/// Identity facts for the represented person (stored in `facts.json`).
///
/// Only `full_name` and `name` are required. Any other keys in the file are
/// kept in `extra` and rendered into the prompt as additional facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name, e.g. "Jane Q. Doe".
    pub full_name: String,
    /// Short or preferred name, e.g. "Jane".
    pub name: String,
    /// Any further facts (location, specialties, links, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Identity {
    /// Create an identity with no extra facts.
    pub fn new(full_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an extra fact.
    pub fn with_fact(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether both name fields carry visible text.
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.name.trim().is_empty()
    }
}

/// Immutable snapshot of everything the loader found for one persona.
///
/// A resource that was not found is `None`. The snapshot is loaded once at
/// startup and shared read-only by every prompt build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSnapshot {
    pub identity: Option<Identity>,
    pub summary: Option<String>,
    pub linkedin: Option<String>,
    pub style: Option<String>,
}

impl ProfileSnapshot {
    /// Whether the given resource was found, is not blank and is not an
    /// unedited starter template.
    pub fn has(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Facts => self.identity.as_ref().is_some_and(Identity::is_complete),
            ResourceKind::Summary => is_present(self.summary.as_deref()),
            ResourceKind::LinkedIn => is_present(self.linkedin.as_deref()),
            ResourceKind::Style => is_present(self.style.as_deref()),
        }
    }

    /// Resource kinds that are absent or blank, in validation order.
    pub fn missing(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| !self.has(*kind))
            .collect()
    }
}

/// First line of every text file written by `twin init`.
pub const STARTER_MARKER: &str = "[twin:starter]";

/// Whether resource text carries real content: not blank, and no longer the
/// untouched starter template.
pub fn is_filled_in(text: &str) -> bool {
    !text.trim().is_empty() && !text.contains(STARTER_MARKER)
}

fn is_present(text: Option<&str>) -> bool {
    text.is_some_and(is_filled_in)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_deserialize_keeps_extra_facts() {
        let json = r#"{"full_name": "Jane Q. Doe", "name": "Jane", "location": "Lisbon", "years": 10}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.full_name, "Jane Q. Doe");
        assert_eq!(identity.name, "Jane");
        assert_eq!(identity.extra.len(), 2);
        assert_eq!(identity.extra["location"], "Lisbon");
        assert_eq!(identity.extra["years"], 10);
    }

    #[test]
    fn test_identity_requires_name_fields() {
        let json = r#"{"full_name": "Jane Q. Doe"}"#;
        assert!(serde_json::from_str::<Identity>(json).is_err());
    }

    #[test]
    fn test_identity_serializes_flat() {
        let identity = Identity::new("Jane Q. Doe", "Jane").with_fact("city", "Lisbon");
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["full_name"], "Jane Q. Doe");
        assert_eq!(value["city"], "Lisbon");
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_identity_blank_name_is_incomplete() {
        assert!(Identity::new("Jane Q. Doe", "Jane").is_complete());
        assert!(!Identity::new("Jane Q. Doe", "   ").is_complete());
        assert!(!Identity::new("", "Jane").is_complete());
    }

    #[test]
    fn test_snapshot_missing_lists_blank_and_absent() {
        let snapshot = ProfileSnapshot {
            identity: Some(Identity::new("Jane Q. Doe", "Jane")),
            summary: Some("  \n".to_string()),
            linkedin: None,
            style: Some("Concise, warm.".to_string()),
        };
        assert_eq!(
            snapshot.missing(),
            vec![ResourceKind::Summary, ResourceKind::LinkedIn]
        );
        assert!(snapshot.has(ResourceKind::Style));
    }

    #[test]
    fn test_starter_text_is_not_filled_in() {
        assert!(is_filled_in("Concise, warm."));
        assert!(!is_filled_in(" \n"));
        assert!(!is_filled_in("[twin:starter] Delete this line.\nJane writes clearly."));

        let snapshot = ProfileSnapshot {
            identity: Some(Identity::new("Jane Q. Doe", "Jane")),
            summary: Some("Senior backend engineer.".to_string()),
            linkedin: Some(format!("{STARTER_MARKER}\n(role) at (company)")),
            style: Some("Concise, warm.".to_string()),
        };
        assert_eq!(snapshot.missing(), vec![ResourceKind::LinkedIn]);
    }

    #[test]
    fn test_resource_kind_display_and_file_names() {
        assert_eq!(ResourceKind::LinkedIn.to_string(), "linkedin");
        assert_eq!(ResourceKind::Facts.default_file_name(), "facts.json");
        assert_eq!(ResourceKind::Style.default_file_name(), "style.txt");
    }
}
