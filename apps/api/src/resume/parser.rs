//! Resume content parser — splits markdown-ish text into titled sections.
//!
//! Pure and total: malformed input degrades to best-effort sectioning,
//! never an error. Only the heading/bullet/link subset used by resume
//! content is understood; this is not a Markdown parser.

/// Title given to content that precedes the first heading.
pub const IMPLICIT_TITLE: &str = "General";

/// A parsed section: a title and its raw content lines, in source order.
/// Classification into bullet/link/paragraph happens at document-build
/// time, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    pub title: String,
    pub items: Vec<String>,
}

impl RawSection {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }
}

/// Splits raw resume text into ordered sections.
///
/// Per line: markup tags are stripped, whitespace trimmed, empties
/// dropped. A heading closes the open section and starts a new one;
/// sections never nest. Content before the first heading lands in an
/// implicit "General" section.
pub fn parse(raw_text: &str) -> Vec<RawSection> {
    let mut sections = Vec::new();
    let mut current: Option<RawSection> = None;

    for raw_line in raw_text.lines() {
        let stripped = strip_markup(raw_line);
        let line = stripped.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(title) = heading_title(line) {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(RawSection::new(title));
        } else {
            current
                .get_or_insert_with(|| RawSection::new(IMPLICIT_TITLE))
                .items
                .push(line.to_string());
        }
    }

    if let Some(section) = current {
        sections.push(section);
    }

    sections
}

/// Returns the trimmed title when the line is a heading.
///
/// A heading is the literal "## " prefix; a bare "##" is the only way a
/// title-less heading survives trimming, and it is still a valid section
/// boundary with an empty title. "##text" without the space is content.
fn heading_title(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix(' ').map(str::trim)
}

/// Removes every angle-bracket-delimited span from the line. The span is
/// deleted whole ("<div>" contributes nothing); a '<' with no closing '>'
/// is left as-is. A scan, not markup parsing.
pub fn strip_markup(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
