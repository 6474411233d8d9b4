//! Starter content for a new persona data directory.
//!
//! `twin init` writes these as a guide for the owner. Each text template
//! starts with [`STARTER_MARKER`], and a resource still carrying it counts
//! as missing, so `twin check` and `twin prompt` fail until it is edited.

use serde_json::json;
use twin_types::profile::{ResourceKind, STARTER_MARKER};

/// Default `facts.json` content: just the two required name fields.
///
/// Further facts are added by hand; the file is complete as written.
pub fn generate_default_facts(full_name: &str, name: &str) -> String {
    let facts = json!({
        "full_name": full_name,
        "name": name,
    });
    format!("{facts:#}\n")
}

fn starter_header() -> String {
    format!("{STARTER_MARKER} Delete this line once the notes below are your own.\n\n")
}

/// Default `summary.txt` content.
pub fn generate_default_summary(name: &str) -> String {
    starter_header()
        + &format!(
        "{name} is a professional with a background worth telling.\n\
        \n\
        Replace this paragraph with a few notes in {name}'s own words: career path,\n\
        what they are working on now, what they care about, and what they are looking for.\n"
    )
}

/// Default `linkedin.txt` content.
pub fn generate_default_linkedin(full_name: &str) -> String {
    starter_header()
        + &format!(
        "{full_name}\n\
        \n\
        Experience\n\
        - (role) at (company), (start) - (end)\n\
        \n\
        Education\n\
        - (degree), (institution)\n\
        \n\
        Paste the text of the LinkedIn profile export here.\n"
    )
}

/// Default `style.txt` content.
pub fn generate_default_style(name: &str) -> String {
    starter_header()
        + &format!(
        "{name} writes in a clear, friendly and direct way.\n\
        Short paragraphs, concrete examples, no corporate jargon.\n\
        Comfortable saying \"I don't know\" rather than guessing.\n"
    )
}

/// Starter content for one resource.
pub fn generate_default(kind: ResourceKind, full_name: &str, name: &str) -> String {
    match kind {
        ResourceKind::Facts => generate_default_facts(full_name, name),
        ResourceKind::Summary => generate_default_summary(name),
        ResourceKind::LinkedIn => generate_default_linkedin(full_name),
        ResourceKind::Style => generate_default_style(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twin_types::profile::{is_filled_in, Identity};

    #[test]
    fn test_default_facts_parse_as_identity() {
        let content = generate_default_facts("Jane \"JQ\" Doe", "Jane");
        let identity: Identity = serde_json::from_str(&content).unwrap();
        assert_eq!(identity.full_name, "Jane \"JQ\" Doe");
        assert_eq!(identity.name, "Jane");
        assert!(identity.extra.is_empty());
        assert!(identity.is_complete());
    }

    #[test]
    fn test_default_templates_mention_person() {
        assert!(generate_default_summary("Jane").contains("Jane's own words"));
        assert!(generate_default_linkedin("Jane Q. Doe").contains("\n\nJane Q. Doe\n"));
        assert!(generate_default_style("Jane").contains("Jane writes"));
    }

    #[test]
    fn test_text_templates_start_with_marker() {
        for kind in [ResourceKind::Summary, ResourceKind::LinkedIn, ResourceKind::Style] {
            let content = generate_default(kind, "Jane Q. Doe", "Jane");
            assert!(content.starts_with(STARTER_MARKER), "{kind} template is unmarked");
            assert!(!is_filled_in(&content), "{kind} template counts as filled in");
        }
        let facts = generate_default(ResourceKind::Facts, "Jane Q. Doe", "Jane");
        assert!(!facts.contains(STARTER_MARKER));
    }
}
