//! facts.json parsing.
//!
//! Format: a single JSON object. `full_name` and `name` are required strings;
//! every other key is kept as an extra fact.
//! ```text
//! {
//!   "full_name": "Jane Q. Doe",
//!   "name": "Jane",
//!   "location": "Lisbon"
//! }
//! ```

use std::path::Path;

use twin_types::error::ResourceError;
use twin_types::profile::Identity;

/// Parse facts.json content into an [`Identity`].
///
/// Blank name fields are accepted here; the prompt builder rejects them as a
/// missing resource so `twin check` can still report the file as found.
pub fn parse_facts(path: &Path, content: &str) -> Result<Identity, ResourceError> {
    serde_json::from_str::<Identity>(content).map_err(|e| ResourceError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FACTS: &str = r#"{
  "full_name": "Jane Q. Doe",
  "name": "Jane",
  "location": "Lisbon",
  "specialties": ["distributed systems", "Rust"]
}"#;

    #[test]
    fn test_parse_facts() {
        let identity = parse_facts(Path::new("facts.json"), SAMPLE_FACTS).unwrap();
        assert_eq!(identity.full_name, "Jane Q. Doe");
        assert_eq!(identity.name, "Jane");
        assert_eq!(identity.extra["location"], "Lisbon");
        assert!(identity.extra["specialties"].is_array());
    }

    #[test]
    fn test_parse_facts_not_an_object() {
        let err = parse_facts(Path::new("/data/facts.json"), r#"["Jane"]"#).unwrap_err();
        assert!(matches!(err, ResourceError::Parse { .. }));
        assert!(err.to_string().contains("/data/facts.json"));
    }

    #[test]
    fn test_parse_facts_missing_name() {
        let err = parse_facts(Path::new("facts.json"), r#"{"full_name": "Jane Q. Doe"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_parse_facts_non_string_name() {
        let content = r#"{"full_name": "Jane Q. Doe", "name": 42}"#;
        assert!(parse_facts(Path::new("facts.json"), content).is_err());
    }

    #[test]
    fn test_parse_facts_blank_name_is_accepted() {
        let content = r#"{"full_name": "Jane Q. Doe", "name": ""}"#;
        let identity = parse_facts(Path::new("facts.json"), content).unwrap();
        assert!(!identity.is_complete());
    }
}
