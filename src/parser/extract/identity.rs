use crate::parser::sections::Document;

pub const REAL_NAME: &str = "Real Name";
pub const CODENAME: &str = "Codename";
const STATUS_DISPLAY: &str = "Status Label (Display)";
const STATUS_LEGACY: &str = "Status";
const SHORT_TAGLINE: &str = "Short Tagline (7-12 words)";
const FLAVOR_PREFIX: &str = "**Flavor Description";

pub const UNKNOWN_STATUS: &str = "UNKNOWN";

/// Value of `**<label>:** value`. An empty same-line value falls through to
/// the next non-blank line, or to `""` when none is left.
pub fn inline_value(doc: &Document, label: &str) -> Option<String> {
    let marker = format!("**{}:**", label);
    let lines = doc.lines();
    lines.iter().enumerate().find_map(|(i, line)| {
        let (_, rest) = line.split_once(marker.as_str())?;
        let rest = rest.trim();
        if rest.is_empty() {
            Some(next_non_blank(lines, i + 1).unwrap_or_default().to_string())
        } else {
            Some(rest.to_string())
        }
    })
}

/// Display label wins, then the legacy `Status` line, then `UNKNOWN`.
pub fn status_display(doc: &Document) -> String {
    inline_value(doc, STATUS_DISPLAY)
        .or_else(|| inline_value(doc, STATUS_LEGACY))
        .unwrap_or_else(|| UNKNOWN_STATUS.to_string())
}

/// The line after a bare `**Short Tagline (7-12 words):**` label.
pub fn short_tagline(doc: &Document) -> Option<String> {
    let marker = format!("**{}:**", SHORT_TAGLINE);
    value_below(doc, |line| {
        line.split_once(marker.as_str())
            .is_some_and(|(_, rest)| rest.trim().is_empty())
    })
}

/// The line after a `**Flavor Description ...**` label; the label suffix varies
/// between card revisions.
pub fn flavor(doc: &Document) -> Option<String> {
    value_below(doc, |line| {
        line.find(FLAVOR_PREFIX).is_some_and(|at| {
            let tail = line[at + FLAVOR_PREFIX.len()..].trim_end();
            tail.ends_with("**")
        })
    })
}

fn value_below<F>(doc: &Document, is_label: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    let lines = doc.lines();
    let idx = lines.iter().position(|l| is_label(l))?;
    Some(next_non_blank(lines, idx + 1).unwrap_or_default().to_string())
}

fn next_non_blank<'a>(lines: &[&'a str], from: usize) -> Option<&'a str> {
    lines
        .get(from..)?
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_value_is_trimmed() {
        let doc = Document::parse("**Real Name:**   Orbit Ledger  \n**Codename:** KESTREL");
        assert_eq!(inline_value(&doc, REAL_NAME).as_deref(), Some("Orbit Ledger"));
        assert_eq!(inline_value(&doc, CODENAME).as_deref(), Some("KESTREL"));
    }

    #[test]
    fn inline_value_may_follow_list_marker() {
        let doc = Document::parse("- **Codename:** WREN");
        assert_eq!(inline_value(&doc, CODENAME).as_deref(), Some("WREN"));
    }

    #[test]
    fn empty_inline_value_reads_next_line() {
        let doc = Document::parse("**Real Name:**\n\nOrbit Ledger");
        assert_eq!(inline_value(&doc, REAL_NAME).as_deref(), Some("Orbit Ledger"));
    }

    #[test]
    fn empty_inline_value_at_end_is_blank() {
        let doc = Document::parse("**Codename:** WREN\n**Real Name:**\n\n");
        assert_eq!(inline_value(&doc, REAL_NAME).as_deref(), Some(""));
        assert!(inline_value(&Document::parse("**Codename:** WREN"), REAL_NAME).is_none());
    }

    #[test]
    fn display_status_beats_legacy() {
        let doc = Document::parse("**Status:** beta\n**Status Label (Display):** IN ORBIT");
        assert_eq!(status_display(&doc), "IN ORBIT");
    }

    #[test]
    fn legacy_status_fallback() {
        let doc = Document::parse("**Status:** beta");
        assert_eq!(status_display(&doc), "beta");
    }

    #[test]
    fn machine_status_is_not_legacy_status() {
        let doc = Document::parse("**Status (Machine):** active");
        assert_eq!(status_display(&doc), UNKNOWN_STATUS);
    }

    #[test]
    fn tagline_on_following_line() {
        let doc = Document::parse("**Short Tagline (7-12 words):**\nTrack every coin you spend.\n");
        assert_eq!(short_tagline(&doc).as_deref(), Some("Track every coin you spend."));
    }

    #[test]
    fn tagline_on_same_line_is_not_a_label() {
        let doc = Document::parse("**Short Tagline (7-12 words):** inline\nnext");
        assert!(short_tagline(&doc).is_none());
    }

    #[test]
    fn tagline_label_at_end_of_document() {
        let doc = Document::parse("**Short Tagline (7-12 words):**\n");
        assert_eq!(short_tagline(&doc).as_deref(), Some(""));
    }

    #[test]
    fn flavor_label_suffix_varies() {
        let doc = Document::parse("**Flavor Description (1 sentence, myth tone):**\nForged in the ledger wars.");
        assert_eq!(flavor(&doc).as_deref(), Some("Forged in the ledger wars."));
        let doc = Document::parse("**Flavor Description:**\nShort one.");
        assert_eq!(flavor(&doc).as_deref(), Some("Short one."));
    }

    #[test]
    fn flavor_absent() {
        let doc = Document::parse("**Real Name:** X");
        assert!(flavor(&doc).is_none());
    }
}
