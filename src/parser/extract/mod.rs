pub mod description;
pub mod features;
pub mod identity;
pub mod roadmap;
pub mod trust;

use thiserror::Error;

use super::sections::Document;

/// A card that cannot be rendered at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),
}

/// Everything the page template needs from one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    pub real_name: String,
    pub codename: String,
    pub status_display: String,
    pub short_tagline: String,
    pub flavor: String,
    pub full_desc: String,
    pub features_html: String,
    pub roadmap_html: String,
    pub trust_html: String,
}

pub fn extract_all(doc: &Document) -> Result<CardFields, CardError> {
    let real_name = identity::inline_value(doc, identity::REAL_NAME)
        .ok_or(CardError::MissingRequiredField("real_name"))?;
    let codename = identity::inline_value(doc, identity::CODENAME)
        .ok_or(CardError::MissingRequiredField("codename"))?;
    let short_tagline =
        identity::short_tagline(doc).ok_or(CardError::MissingRequiredField("short_tagline"))?;

    Ok(CardFields {
        real_name,
        codename,
        status_display: identity::status_display(doc),
        short_tagline,
        flavor: identity::flavor(doc).unwrap_or_default(),
        full_desc: description::extract(doc)
            .unwrap_or_else(|| description::FALLBACK.to_string()),
        features_html: features::extract(doc)
            .map(|f| features::render(&f))
            .unwrap_or_default(),
        roadmap_html: roadmap::extract(doc)
            .map(|r| roadmap::render(&r))
            .unwrap_or_default(),
        trust_html: trust::extract(doc)
            .map(|t| trust::render(&t))
            .unwrap_or_default(),
    })
}

// ── Tests ──
