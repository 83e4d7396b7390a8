use crate::parser::sections::Document;

const SECTION: &str = "Full Description";

pub const FALLBACK: &str = "<p>No description available.</p>";

/// Paragraphs of the Full Description section, or `None` when the section
/// is missing or not laid out as label line, guidance line, body.
///
/// Layout:
///
/// ```text
/// ## Full Description
/// **1-2 Paragraphs:**
/// (guidance, ends with a closing paren)
///
/// First paragraph...
/// ```
pub fn extract(doc: &Document) -> Option<String> {
    let section = doc.section(SECTION)?;
    let lines = &section.lines;

    let label = lines.iter().position(|l| !l.trim().is_empty())?;
    if !is_bold_label(lines[label]) {
        return None;
    }

    // guidance may wrap; it ends at the first `)` line followed by a blank
    let guidance_end = (label + 1..lines.len()).find(|&i| {
        lines[i].trim_end().ends_with(')')
            && lines.get(i + 1).is_some_and(|next| next.trim().is_empty())
    })?;

    let html: String = paragraphs(&lines[guidance_end + 1..])
        .iter()
        .map(|p| format!("<p>{}</p>", p))
        .collect();

    if html.is_empty() {
        None
    } else {
        Some(html)
    }
}

fn is_bold_label(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 4 && t.starts_with("**") && t.ends_with("**")
}

/// Group lines into blank-line separated paragraphs, each trimmed.
fn paragraphs(lines: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for &line in lines {
        if line.trim().is_empty() {
            flush(&mut current, &mut out);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut out);
    out
}

fn flush(current: &mut Vec<&str>, out: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let text = current.join("\n").trim().to_string();
    current.clear();
    if !text.is_empty() {
        out.push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = "\
## Full Description
**1-2 Paragraphs:**
(What it is, who it is for, why it exists)

Orbit Ledger keeps a local record of spending.

It never phones home.
Not once.

## Feature List
";

    #[test]
    fn wraps_each_paragraph() {
        let doc = Document::parse(CARD);
        assert_eq!(
            extract(&doc).as_deref(),
            Some("<p>Orbit Ledger keeps a local record of spending.</p><p>It never phones home.\nNot once.</p>")
        );
    }

    #[test]
    fn rerun_is_identical() {
        let doc = Document::parse(CARD);
        assert_eq!(extract(&doc), extract(&doc));
    }

    #[test]
    fn guidance_may_wrap() {
        let md = "## Full Description\n**1-2 Paragraphs:**\n(long guidance\nthat wraps)\n\nBody.\n";
        let doc = Document::parse(md);
        assert_eq!(extract(&doc).as_deref(), Some("<p>Body.</p>"));
    }

    #[test]
    fn runs_to_end_of_document() {
        let md = "## Full Description\n**Paragraphs:**\n(guidance)\n\nLast section body.";
        let doc = Document::parse(md);
        assert_eq!(extract(&doc).as_deref(), Some("<p>Last section body.</p>"));
    }

    #[test]
    fn missing_label_line() {
        let md = "## Full Description\nJust prose here.\n\nMore prose.\n";
        assert!(extract(&Document::parse(md)).is_none());
    }

    #[test]
    fn missing_guidance_line() {
        let md = "## Full Description\n**1-2 Paragraphs:**\nNo paren here.\n\nBody.\n";
        assert!(extract(&Document::parse(md)).is_none());
    }

    #[test]
    fn empty_body() {
        let md = "## Full Description\n**1-2 Paragraphs:**\n(guidance)\n\n\n## Feature List\n";
        assert!(extract(&Document::parse(md)).is_none());
    }

    #[test]
    fn missing_section() {
        assert!(extract(&Document::parse("**Real Name:** X")).is_none());
    }
}
