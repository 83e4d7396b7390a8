mod page;
mod parser;
mod store;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error, info, warn};

use page::PageError;
use store::{Paths, ProjectRecord};

const CHUNK_SIZE: usize = 64;

#[derive(Parser)]
#[command(name = "cardpress", about = "Render markdown project cards into static HTML pages")]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct PathArgs {
    /// Project index (JSON array of {id, links})
    #[arg(long, global = true, default_value = store::PROJECTS_JSON)]
    projects: PathBuf,
    /// Directory holding <id>.md project cards
    #[arg(long, global = true, default_value = store::CARDS_DIR)]
    cards: PathBuf,
    /// HTML template with {{PLACEHOLDER}} tokens
    #[arg(long, global = true, default_value = store::TEMPLATE_FILE)]
    template: PathBuf,
    /// Output directory for <id>.html pages
    #[arg(long, global = true, default_value = store::OUTPUT_DIR)]
    out: PathBuf,
}

impl From<PathArgs> for Paths {
    fn from(a: PathArgs) -> Self {
        Paths {
            projects: a.projects,
            cards: a.cards,
            template: a.template,
            out: a.out,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page for every project (default)
    Generate,
    /// Parse every card and report problems without writing pages
    Check,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let paths: Paths = cli.paths.into();
    let write = !matches!(cli.command, Some(Commands::Check));

    info!("Loading data...");
    let projects = store::load_projects(&paths.projects)?;
    let (projects, issues) = store::validate_projects(projects);
    for issue in &issues {
        warn!("{}: {}", paths.projects.display(), issue);
    }
    let template = store::load_template(&paths.template)?;
    for token in page::unknown_tokens(&template) {
        warn!("Template token {{{{{}}}}} has no source; every page will fail", token);
    }

    println!("{} {} projects...", if write { "Generating" } else { "Checking" }, projects.len());
    let counts = process_projects(&paths, &template, &projects, write)?;
    counts.print(write);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    } else {
        println!("Done.");
    }

    if !write && counts.failed > 0 {
        anyhow::bail!("{} card(s) failed to parse", counts.failed);
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct RunCounts {
    rendered: usize,
    missing: usize,
    failed: usize,
}

impl RunCounts {
    fn print(&self, wrote: bool) {
        println!(
            "{} {} pages, skipped {} without a card, {} failed.",
            if wrote { "Wrote" } else { "Rendered" },
            self.rendered,
            self.missing,
            self.failed,
        );
    }
}

enum Outcome {
    Page(String),
    MissingCard,
    Unreadable(anyhow::Error),
    Failed(PageError),
}

fn render_one(paths: &Paths, template: &str, record: &ProjectRecord) -> Outcome {
    let markdown = match store::read_card(&paths.cards, &record.id) {
        Ok(Some(md)) => md,
        Ok(None) => return Outcome::MissingCard,
        Err(e) => return Outcome::Unreadable(e),
    };
    match page::render_project(template, record, &markdown) {
        Ok(html) => Outcome::Page(html),
        Err(e) => Outcome::Failed(e),
    }
}

/// Render in parallel chunks, then log and write each result in index order.
/// A failing card costs only its own page.
fn process_projects(
    paths: &Paths,
    template: &str,
    projects: &[ProjectRecord],
    write: bool,
) -> anyhow::Result<RunCounts> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(projects.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );

    let mut counts = RunCounts::default();

    for chunk in projects.chunks(CHUNK_SIZE) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|p| render_one(paths, template, p))
            .collect();

        for (record, result) in chunk.iter().zip(results) {
            match result {
                Outcome::MissingCard => {
                    warn!("Skipping {}: No markdown found.", record.id);
                    counts.missing += 1;
                }
                Outcome::Unreadable(e) => {
                    error!("Error reading {}: {:#}", record.id, e);
                    counts.failed += 1;
                }
                Outcome::Failed(e) => {
                    error!("Error parsing {}: {}", record.id, e);
                    counts.failed += 1;
                }
                Outcome::Page(html) => {
                    info!("Processing {}...", record.id);
                    if write {
                        let path = store::write_page(&paths.out, &record.id, &html)?;
                        debug!("Wrote {}", path.display());
                    }
                    counts.rendered += 1;
                }
            }
            pb.inc(1);
        }
    }

    pb.finish_and_clear();
    Ok(counts)
}

// ── Tests ──
