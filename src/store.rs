use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const PROJECTS_JSON: &str = "data/projects.json";
pub const CARDS_DIR: &str = "project_cards";
pub const TEMPLATE_FILE: &str = "project_template.html";
pub const OUTPUT_DIR: &str = "projects";

/// Where everything is read from and written to.
#[derive(Debug, Clone)]
pub struct Paths {
    pub projects: PathBuf,
    pub cards: PathBuf,
    pub template: PathBuf,
    pub out: PathBuf,
}

// ── Project index ──

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub url: String,
    pub label: String,
}

/// One entry of `projects.json`. Other keys in the index are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub links: Option<Vec<Link>>,
}

impl ProjectRecord {
    /// Absent, `null` and `[]` all mean no links.
    pub fn links(&self) -> &[Link] {
        self.links.as_deref().unwrap_or(&[])
    }
}

pub fn load_projects(path: &Path) -> Result<Vec<ProjectRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project index {}", path.display()))?;
    parse_projects(&raw).with_context(|| format!("Invalid project index {}", path.display()))
}

pub fn parse_projects(raw: &str) -> Result<Vec<ProjectRecord>> {
    Ok(serde_json::from_str(raw)?)
}

/// Drop records without an id and repeated ids (first one wins). Returns the
/// usable records and one message per dropped record.
pub fn validate_projects(records: Vec<ProjectRecord>) -> (Vec<ProjectRecord>, Vec<String>) {
    let mut seen = HashSet::new();
    let mut usable = Vec::with_capacity(records.len());
    let mut issues = Vec::new();

    for (i, record) in records.into_iter().enumerate() {
        if record.id.trim().is_empty() {
            issues.push(format!("[{}] missing 'id'", i));
            continue;
        }
        if !seen.insert(record.id.clone()) {
            issues.push(format!("[{}] duplicate id: {}", i, record.id));
            continue;
        }
        usable.push(record);
    }

    (usable, issues)
}

// ── Template, cards, pages ──

pub fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))
}

pub fn card_path(cards: &Path, id: &str) -> PathBuf {
    cards.join(format!("{}.md", id))
}

pub fn page_path(out: &Path, id: &str) -> PathBuf {
    out.join(format!("{}.html", id))
}

/// Markdown for `id`, or `None` when the project has no card.
pub fn read_card(cards: &Path, id: &str) -> Result<Option<String>> {
    let path = card_path(cards, id);
    match fs::read_to_string(&path) {
        Ok(md) => Ok(Some(md)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read card {}", path.display())),
    }
}

pub fn write_page(out: &Path, id: &str, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output dir {}", out.display()))?;
    let path = page_path(out, id);
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
