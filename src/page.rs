use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::parser::extract::{CardError, CardFields};
use crate::parser::parse_card;
use crate::store::{Link, ProjectRecord};

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").unwrap());

pub const NO_ARTIFACTS: &str =
    r#"<div class="mono" style="color:var(--text-muted);">// NO ARTIFACTS AVAILABLE</div>"#;

/// Every token the renderer can fill.
pub const TOKENS: [&str; 10] = [
    "REAL_NAME",
    "CODENAME",
    "STATUS_DISPLAY",
    "SHORT_TAGLINE",
    "FLAVOR_DESCRIPTION",
    "FULL_DESCRIPTION",
    "FEATURES_HTML",
    "ROADMAP_HTML",
    "TRUST_FACTS_HTML",
    "DOWNLOAD_LINKS_HTML",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error("template placeholder {{{{{0}}}}} has no value")]
    UnresolvedPlaceholder(String),
}

pub fn download_links_html(links: &[Link]) -> String {
    if links.is_empty() {
        return NO_ARTIFACTS.to_string();
    }
    links
        .iter()
        .map(|l| format!(r#"<a href="{}" class="btn btn-primary">{}</a>"#, l.url, l.label))
        .collect()
}

/// Token name → replacement for every placeholder the renderer knows.
pub fn placeholders(fields: &CardFields, links_html: String) -> HashMap<&'static str, String> {
    HashMap::from([
        ("REAL_NAME", fields.real_name.clone()),
        ("CODENAME", fields.codename.clone()),
        ("STATUS_DISPLAY", fields.status_display.clone()),
        ("SHORT_TAGLINE", fields.short_tagline.clone()),
        ("FLAVOR_DESCRIPTION", fields.flavor.clone()),
        ("FULL_DESCRIPTION", fields.full_desc.clone()),
        ("FEATURES_HTML", fields.features_html.clone()),
        ("ROADMAP_HTML", fields.roadmap_html.clone()),
        ("TRUST_FACTS_HTML", fields.trust_html.clone()),
        ("DOWNLOAD_LINKS_HTML", links_html),
    ])
}

/// Tokens used by the template that no card can ever fill.
pub fn unknown_tokens(template: &str) -> Vec<String> {
    template_tokens(template)
        .into_iter()
        .filter(|t| !TOKENS.iter().any(|k| *k == t.as_str()))
        .collect()
}

/// Distinct token names used by the template, sorted.
pub fn template_tokens(template: &str) -> BTreeSet<String> {
    TOKEN_RE
        .captures_iter(template)
        .map(|c| c[1].to_string())
        .collect()
}

/// Replace every `{{NAME}}` in one pass. Substituted values are not scanned
/// again, so card text that happens to contain `{{...}}` comes out verbatim.
pub fn fill_template(
    template: &str,
    values: &HashMap<&'static str, String>,
) -> Result<String, PageError> {
    if let Some(missing) = template_tokens(template)
        .into_iter()
        .find(|t| !values.contains_key(t.as_str()))
    {
        return Err(PageError::UnresolvedPlaceholder(missing));
    }

    let html = TOKEN_RE.replace_all(template, |c: &Captures| {
        values.get(&c[1]).cloned().unwrap_or_default()
    });
    Ok(html.into_owned())
}

/// A complete page for one project, or the reason there is none.
pub fn render_project(
    template: &str,
    record: &ProjectRecord,
    markdown: &str,
) -> Result<String, PageError> {
    let fields = parse_card(markdown)?;
    let values = placeholders(&fields, download_links_html(record.links()));
    fill_template(template, &values)
}
