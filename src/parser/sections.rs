/// A run of lines under one `## ` header. The preamble before the first
/// header is a section with an empty title.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub title: &'a str,
    pub lines: Vec<&'a str>,
    /// Index of the first body line in the document.
    start: usize,
}

/// A project card split into its top-level sections.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
    sections: Vec<Section<'a>>,
}

impl<'a> Document<'a> {
    pub fn parse(markdown: &'a str) -> Self {
        let lines: Vec<&str> = markdown.lines().collect();
        let sections = cluster_sections(&lines);
        Document { lines, sections }
    }

    /// Every line of the document, headers included.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// First section titled exactly `title`.
    pub fn section(&self, title: &str) -> Option<&Section<'a>> {
        self.position(0, |t| t == title).map(|i| &self.sections[i])
    }

    /// Lines after the `from` header up to (not including) the next header
    /// whose title starts with `until`. Headers in between are kept as plain
    /// lines. Both headers must exist, in that order.
    pub fn span(&self, from: &str, until: &str) -> Option<&[&'a str]> {
        let i = self.position(0, |t| t == from)?;
        let j = self.position(i + 1, |t| t.starts_with(until))?;
        let start = self.sections[i].start;
        // the `until` header line sits right before its body
        let end = self.sections[j].start - 1;
        Some(&self.lines[start..end])
    }

    fn position<F>(&self, from: usize, matches: F) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.sections
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, s)| !s.title.is_empty() && matches(s.title))
            .map(|(i, _)| i)
    }
}

/// `## Title` → `Title`. Deeper headers (`###`) are ordinary lines.
pub fn header_title(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix("## ").map(str::trim)
}

/// Split lines into sections at every `## ` header.
fn cluster_sections<'a>(lines: &[&'a str]) -> Vec<Section<'a>> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section {
        title: "",
        lines: Vec::new(),
        start: 0,
    };

    for (i, &line) in lines.iter().enumerate() {
        if let Some(title) = header_title(line) {
            let next = Section {
                title,
                lines: Vec::new(),
                start: i + 1,
            };
            let done = std::mem::replace(&mut current, next);
            if !done.title.is_empty() || !done.lines.is_empty() {
                sections.push(done);
            }
            continue;
        }
        current.lines.push(line);
    }

    if !current.title.is_empty() || !current.lines.is_empty() {
        sections.push(current);
    }

    sections
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(md: &str) -> Vec<String> {
        Document::parse(md)
            .sections
            .iter()
            .map(|s| s.title.to_string())
            .collect()
    }

    #[test]
    fn splits_on_level_two_headers() {
        let md = "# Card\n**Real Name:** X\n\n## Full Description\ntext\n## Roadmap\n1. a";
        assert_eq!(titles(md), vec!["", "Full Description", "Roadmap"]);
    }

    #[test]
    fn deeper_headers_stay_in_section() {
        let doc = Document::parse("## Roadmap\n### Phase one\n1. a");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].lines, vec!["### Phase one", "1. a"]);
    }

    #[test]
    fn section_matches_whole_title() {
        let doc = Document::parse("## Feature List Notes\n- a\n## Feature List\n- b");
        let s = doc.section("Feature List").unwrap();
        assert_eq!(s.title, "Feature List");
        assert_eq!(s.lines, vec!["- b"]);
        assert!(doc.section("Feature").is_none());
    }

    #[test]
    fn span_opening_header_matches_whole_title() {
        let md = "## Roadmap Notes\nx\n## Trust Facts\ny\n## Roadmap\n1. a\n## Trust Facts\nz";
        let doc = Document::parse(md);
        assert_eq!(doc.span("Roadmap", "Trust Facts").unwrap(), &["1. a"]);

        let doc = Document::parse("## Roadmap Notes\n1. a\n## Trust Facts\nz");
        assert!(doc.span("Roadmap", "Trust Facts").is_none());
    }

    #[test]
    fn span_closing_header_matches_title_prefix() {
        let doc = Document::parse("## Trust Facts\n- **A:** b\n## Downloads + Links\n- [x](y)");
        assert_eq!(doc.span("Trust Facts", "Downloads").unwrap(), &["- **A:** b"]);
    }

    #[test]
    fn span_crosses_intermediate_headers() {
        let md = "## Roadmap\na\n## Notes\nb\n## Trust Facts\nc";
        let doc = Document::parse(md);
        let span = doc.span("Roadmap", "Trust Facts").unwrap();
        assert_eq!(span, &["a", "## Notes", "b"]);
    }

    #[test]
    fn span_requires_closing_header() {
        let doc = Document::parse("## Roadmap\n1. a\n");
        assert!(doc.span("Roadmap", "Trust Facts").is_none());
    }

    #[test]
    fn span_ignores_closing_header_before_opening() {
        let doc = Document::parse("## Trust Facts\nx\n## Roadmap\n1. a");
        assert!(doc.span("Roadmap", "Trust Facts").is_none());
    }

    #[test]
    fn empty_document_has_no_sections() {
        assert!(Document::parse("").sections.is_empty());
        assert!(Document::parse("").section("Roadmap").is_none());
    }
}
