pub mod extract;
pub mod sections;

use extract::{CardError, CardFields};

/// Two-pass pipeline: markdown → sections → card fields.
pub fn parse_card(markdown: &str) -> Result<CardFields, CardError> {
    let doc = sections::Document::parse(markdown);
    extract::extract_all(&doc)
}
