//! Resume document tree — classified sections plus header assembly.
//!
//! This is the structure the client-side renderer consumes: a display
//! name, a partial contact map, and ordered sections of typed items.
//! Pagination and line wrapping belong to the renderer, not here.

use serde::{Deserialize, Serialize};

use crate::resume::parser;

/// Placeholder shown when the caller supplies no display name.
pub const DEFAULT_NAME: &str = "Your Name";

/// Optional contact fields. Absent fields contribute nothing to the
/// rendered header — no dangling separators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

/// A single content line, classified for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Item {
    Bullet(String),
    Link(String),
    Paragraph(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<Item>,
}

/// A request-scoped document: built fresh per render call, discarded
/// after the artifact is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub name: String,
    pub contact_info: ContactInfo,
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Builds the document tree from raw content. Section and item order
    /// follow the source text; classification happens here, after parsing.
    pub fn build(content: &str, contact_info: ContactInfo, name: Option<String>) -> Self {
        let sections = parser::parse(content)
            .into_iter()
            .map(|section| Section {
                title: section.title,
                items: section.items.iter().map(|line| classify(line)).collect(),
            })
            .collect();

        Self {
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            contact_info,
            sections,
        }
    }

    /// The header contact line: mobile then email, each suffixed with a
    /// separator only when present.
    pub fn contact_line(&self) -> String {
        let mut line = String::new();
        if let Some(mobile) = &self.contact_info.mobile {
            line.push_str(mobile);
            line.push_str(" | ");
        }
        if let Some(email) = &self.contact_info.email {
            line.push_str(email);
            line.push_str(" | ");
        }
        line
    }

    /// Labelled hyperlinks for the header row, present fields only.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(url) = &self.contact_info.linkedin {
            links.push(("LinkedIn", url.as_str()));
        }
        if let Some(url) = &self.contact_info.github {
            links.push(("GitHub", url.as_str()));
        }
        if let Some(url) = &self.contact_info.portfolio {
            links.push(("Portfolio", url.as_str()));
        }
        links
    }
}

/// Boundary contract for a layout engine that turns a document tree into
/// a paginated artifact. Production rendering happens client-side; the
/// trait pins down what any renderer receives.
pub trait DocumentRenderer {
    fn render(&self, document: &ResumeDocument) -> anyhow::Result<Vec<u8>>;
}

/// Classifies one content line. Precedence is fixed: bullet marker, then
/// URL prefix, then paragraph — "- https://x.com" is a bullet, not a link.
pub fn classify(line: &str) -> Item {
    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('•')) {
        return Item::Bullet(format!("• {}", rest.trim_start()));
    }
    if is_url(line) {
        return Item::Link(line.to_string());
    }
    Item::Paragraph(line.to_string())
}

fn is_url(line: &str) -> bool {
    let has_prefix = |p: &str| {
        line.get(..p.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(p))
    };
    has_prefix("http://") || has_prefix("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_contact() -> ContactInfo {
        ContactInfo {
            mobile: Some("+1 555 0100".to_string()),
            email: Some("dev@example.com".to_string()),
            linkedin: Some("https://linkedin.com/in/dev".to_string()),
            github: Some("https://github.com/dev".to_string()),
            portfolio: Some("https://dev.example.com".to_string()),
        }
    }

    #[test]
    fn test_classify_dash_bullet_normalizes_marker() {
        assert_eq!(
            classify("- Python"),
            Item::Bullet("• Python".to_string())
        );
        assert_eq!(
            classify("-   spaced out"),
            Item::Bullet("• spaced out".to_string())
        );
    }

    #[test]
    fn test_classify_dot_bullet_normalizes_marker() {
        assert_eq!(classify("•Go"), Item::Bullet("• Go".to_string()));
    }

    #[test]
    fn test_classify_url_case_insensitive() {
        assert_eq!(
            classify("HTTPS://x.com"),
            Item::Link("HTTPS://x.com".to_string())
        );
        assert_eq!(
            classify("http://plain.example"),
            Item::Link("http://plain.example".to_string())
        );
    }

    #[test]
    fn test_bullet_takes_precedence_over_url() {
        assert_eq!(
            classify("- https://x.com"),
            Item::Bullet("• https://x.com".to_string())
        );
    }

    #[test]
    fn test_classify_fallback_is_verbatim_paragraph() {
        assert_eq!(
            classify("Shipped the thing."),
            Item::Paragraph("Shipped the thing.".to_string())
        );
        // "http" embedded mid-line is not a link
        assert_eq!(
            classify("see https://x.com for details"),
            Item::Paragraph("see https://x.com for details".to_string())
        );
    }

    #[test]
    fn test_build_classifies_round_trip() {
        let doc = ResumeDocument::build(
            "## Skills\n- Python\n- Go\nhttps://x.com",
            ContactInfo::default(),
            None,
        );
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Skills");
        assert_eq!(
            doc.sections[0].items,
            vec![
                Item::Bullet("• Python".to_string()),
                Item::Bullet("• Go".to_string()),
                Item::Link("https://x.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_defaults_name() {
        let doc = ResumeDocument::build("", ContactInfo::default(), None);
        assert_eq!(doc.name, DEFAULT_NAME);
        assert!(doc.sections.is_empty());

        let named = ResumeDocument::build("", ContactInfo::default(), Some("Ada".to_string()));
        assert_eq!(named.name, "Ada");
    }

    #[test]
    fn test_contact_line_suffixes_only_present_fields() {
        let both = ResumeDocument::build("", full_contact(), None);
        assert_eq!(both.contact_line(), "+1 555 0100 | dev@example.com | ");

        let email_only = ResumeDocument::build(
            "",
            ContactInfo {
                email: Some("dev@example.com".to_string()),
                ..Default::default()
            },
            None,
        );
        assert_eq!(email_only.contact_line(), "dev@example.com | ");

        let none = ResumeDocument::build("", ContactInfo::default(), None);
        assert_eq!(none.contact_line(), "");
    }

    #[test]
    fn test_links_row_skips_absent_fields() {
        let doc = ResumeDocument::build(
            "",
            ContactInfo {
                github: Some("https://github.com/dev".to_string()),
                ..Default::default()
            },
            None,
        );
        assert_eq!(doc.links(), vec![("GitHub", "https://github.com/dev")]);

        let all = ResumeDocument::build("", full_contact(), None);
        let labels: Vec<&str> = all.links().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["LinkedIn", "GitHub", "Portfolio"]);
    }

    #[test]
    fn test_item_wire_shape_is_tagged() {
        let json = serde_json::to_value(Item::Bullet("• Go".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"type": "bullet", "text": "• Go"}));
        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, Item::Bullet("• Go".to_string()));
    }

    /// Minimal renderer double exercising the boundary contract: header
    /// first, sections in order, items styled per variant.
    struct PlainTextRenderer;

    impl DocumentRenderer for PlainTextRenderer {
        fn render(&self, document: &ResumeDocument) -> anyhow::Result<Vec<u8>> {
            let mut out = String::new();
            out.push_str(&document.name);
            out.push('\n');
            out.push_str(&document.contact_line());
            out.push('\n');
            for (label, url) in document.links() {
                out.push_str(&format!("[{label}]({url}) "));
            }
            out.push('\n');
            for section in &document.sections {
                out.push_str(&format!("# {}\n", section.title));
                for item in &section.items {
                    match item {
                        Item::Bullet(text) => out.push_str(&format!("  {text}\n")),
                        Item::Link(url) => out.push_str(&format!("  <{url}>\n")),
                        Item::Paragraph(text) => out.push_str(&format!("  {text}\n")),
                    }
                }
            }
            Ok(out.into_bytes())
        }
    }

    #[test]
    fn test_renderer_boundary_receives_header_then_sections() {
        let doc = ResumeDocument::build(
            "## Skills\n- Rust\n## Projects\nhttps://x.com",
            full_contact(),
            Some("Ada Lovelace".to_string()),
        );
        let bytes = PlainTextRenderer.render(&doc).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let name_pos = text.find("Ada Lovelace").unwrap();
        let skills_pos = text.find("# Skills").unwrap();
        let projects_pos = text.find("# Projects").unwrap();
        assert!(name_pos < skills_pos && skills_pos < projects_pos);
        assert!(text.contains("• Rust"));
        assert!(text.contains("<https://x.com>"));
    }
}
