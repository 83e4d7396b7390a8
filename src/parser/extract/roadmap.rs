use crate::parser::sections::Document;

const SECTION: &str = "Roadmap";
const NEXT_SECTION: &str = "Trust Facts";
const ORDINALS: &[&str] = &["1. ", "2. ", "3. "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NearTerm,
    MidTerm,
    LongTerm,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::NearTerm => "NEAR-TERM",
            Phase::MidTerm => "MID-TERM",
            Phase::LongTerm => "LONG-TERM",
        }
    }

    /// Bold lines naming a horizon switch the phase.
    fn detect(line: &str) -> Option<Phase> {
        if !line.contains("**") {
            return None;
        }
        if line.contains("Near-term") {
            Some(Phase::NearTerm)
        } else if line.contains("Mid-term") {
            Some(Phase::MidTerm)
        } else if line.contains("Long-term") {
            Some(Phase::LongTerm)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapItem {
    pub phase: Option<Phase>,
    pub text: String,
}

impl RoadmapItem {
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="roadmap-item"><div class="roadmap-phase">{}</div><div style="flex-grow:1;">{}</div></div>"#,
            self.phase.map(Phase::label).unwrap_or(""),
            self.text
        )
    }
}

/// One line of the roadmap: phase in, phase out, and the item the line
/// produced, if any.
///
/// Prose continuation lines only survive under LONG-TERM; near- and
/// mid-term prose outside the numbered tasks is dropped. That asymmetry is
/// carried over from the page generator as-is until the card authors say
/// otherwise.
pub fn step(phase: Option<Phase>, line: &str) -> (Option<Phase>, Option<RoadmapItem>) {
    let line = line.trim();

    if let Some(next) = Phase::detect(line) {
        return (Some(next), None);
    }

    if ORDINALS.iter().any(|o| line.starts_with(o)) {
        let item = RoadmapItem {
            phase,
            text: line[3..].trim().to_string(),
        };
        return (phase, Some(item));
    }

    let is_prose = !line.is_empty() && !line.starts_with("**") && !line.starts_with('(');
    if is_prose && phase == Some(Phase::LongTerm) {
        let item = RoadmapItem {
            phase,
            text: line.to_string(),
        };
        return (phase, Some(item));
    }

    (phase, None)
}

/// Items between `## Roadmap` and `## Trust Facts`. `None` unless both
/// headers are present.
pub fn extract(doc: &Document) -> Option<Vec<RoadmapItem>> {
    let lines = doc.span(SECTION, NEXT_SECTION)?;
    let mut phase = None;
    let mut items = Vec::new();

    for line in lines {
        let (next, item) = step(phase, line);
        phase = next;
        items.extend(item);
    }

    Some(items)
}

pub fn render(items: &[RoadmapItem]) -> String {
    items.iter().map(RoadmapItem::to_html).collect()
}
