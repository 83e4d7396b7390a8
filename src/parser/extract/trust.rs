use crate::parser::sections::Document;

const SECTION: &str = "Trust Facts";
const NEXT_SECTION: &str = "Downloads";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustFact {
    pub label: String,
    pub value: String,
}

impl TrustFact {
    /// `- **Label:** value`. Anything else is not a fact.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with("- **") {
            return None;
        }
        let mut parts = line.split("**");
        parts.next()?;
        let label = parts.next()?;
        let value = parts.next()?;
        Some(TrustFact {
            label: label.trim().trim_end_matches(':').to_string(),
            value: value.trim().trim_start_matches(':').trim().to_string(),
        })
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<li><span style="color:var(--text-muted);">{}:</span> {}</li>"#,
            self.label, self.value
        )
    }
}

/// Facts between `## Trust Facts` and `## Downloads`.
pub fn extract(doc: &Document) -> Option<Vec<TrustFact>> {
    let lines = doc.span(SECTION, NEXT_SECTION)?;
    Some(
        lines
            .iter()
            .filter_map(|l| TrustFact::parse(l))
            .collect(),
    )
}

pub fn render(facts: &[TrustFact]) -> String {
    facts.iter().map(TrustFact::to_html).collect()
}
