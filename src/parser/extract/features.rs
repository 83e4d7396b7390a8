use crate::parser::sections::Document;

const SECTION: &str = "Feature List";

/// One bullet of the feature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    Titled { title: String, desc: String },
    Plain(String),
}

impl Feature {
    pub fn parse(text: &str) -> Self {
        let parts: Vec<&str> = text.split("**").collect();
        if parts.len() >= 3 {
            Feature::Titled {
                title: parts[1].to_string(),
                desc: parts[2].trim().trim_start_matches(':').trim().to_string(),
            }
        } else {
            Feature::Plain(text.to_string())
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Feature::Titled { title, desc } => format!(
                r#"<div class="feature-card"><h4 style="color:var(--accent-gold); margin-bottom:0.5rem;">{}</h4><p>{}</p></div>"#,
                title, desc
            ),
            Feature::Plain(text) => format!(r#"<div class="feature-card"><p>{}</p></div>"#, text),
        }
    }
}

/// Bullets between the section's own bold label and the next bold line
/// (the flagship label in current cards).
pub fn extract(doc: &Document) -> Option<Vec<Feature>> {
    let section = doc.section(SECTION)?;
    let lines = &section.lines;

    let label = lines.iter().position(|l| !l.trim().is_empty())?;
    if !is_plain_bold_label(lines[label]) {
        return None;
    }

    let features = lines[label + 1..]
        .iter()
        .take_while(|l| !l.starts_with("**"))
        .filter_map(|l| l.strip_prefix("- "))
        .map(|text| Feature::parse(text.trim()))
        .collect();

    Some(features)
}

pub fn render(features: &[Feature]) -> String {
    features.iter().map(Feature::to_html).collect()
}

/// `**label**` with no asterisks inside the label.
fn is_plain_bold_label(line: &str) -> bool {
    line.trim()
        .strip_prefix("**")
        .and_then(|rest| rest.strip_suffix("**"))
        .is_some_and(|inner| !inner.contains('*'))
}
