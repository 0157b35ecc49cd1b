use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::allow_list;
use crate::collate::HebrewCollator;
use crate::config::{Mode, ScrapeConfig};
use crate::fetch::PageSource;
use crate::model::Project;
use crate::output::write_projects;
use crate::parser::{extract, links, Document};
use crate::sample::{manual_project, sample_projects};

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrapeStats {
    pub links_found: usize,
    pub scraped: usize,
    pub failed: usize,
}

/// Why the built-in sample dataset was written instead of scraped data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackReason {
    #[error("listing page {0} is unavailable")]
    ListingUnavailable(String),
    #[error("no project links found")]
    NoCandidates,
    #[error("scraping failed for all {attempted} projects")]
    AllProjectsFailed { attempted: usize },
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug)]
pub enum Outcome {
    Scraped {
        projects: Vec<Project>,
        stats: ScrapeStats,
    },
    Fallback {
        reason: FallbackReason,
        projects: Vec<Project>,
    },
}

impl Outcome {
    pub fn projects(&self) -> &[Project] {
        match self {
            Outcome::Scraped { projects, .. } | Outcome::Fallback { projects, .. } => projects,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }
}

fn fallback(cfg: &ScrapeConfig, reason: FallbackReason) -> Outcome {
    warn!("{}. Using sample data...", reason);
    Outcome::Fallback {
        reason,
        projects: sample_projects(&cfg.base_url),
    }
}

/// Scrape the listing and every project page, one request at a time.
pub async fn scrape<S: PageSource>(cfg: &ScrapeConfig, source: &S) -> Result<Outcome> {
    let base = cfg
        .base()
        .with_context(|| format!("Invalid base URL {:?}", cfg.base_url))?;

    info!("Fetching listing page {}", cfg.listing_url);
    let Some(listing) = source.fetch(&cfg.listing_url).await else {
        return Ok(fallback(
            cfg,
            FallbackReason::ListingUnavailable(cfg.listing_url.clone()),
        ));
    };

    let mut candidates = links::collect(&Document::parse(&listing), cfg);
    let links_found = candidates.len();
    if cfg.mode == Mode::Curated {
        candidates = allow_list::filter(candidates, &cfg.allow_list);
    }
    if candidates.is_empty() {
        return Ok(fallback(cfg, FallbackReason::NoCandidates));
    }

    let pb = ProgressBar::new(candidates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut projects = Vec::with_capacity(candidates.len());
    let mut failed = 0usize;

    for (i, candidate) in candidates.iter().enumerate() {
        let index = i + 1;
        info!("[{}] Scraping: {}", index, candidate.name);
        pb.set_message(candidate.name.clone());

        match source.fetch(&candidate.link).await {
            Some(html) => {
                let project = extract::extract(candidate, &Document::parse(&html), index, Some(&base));
                info!(
                    "  ✓ {} ({})",
                    project.name,
                    project.city.as_deref().unwrap_or("unknown city")
                );
                projects.push(project);
            }
            None => {
                warn!("  Failed to fetch project page {}", candidate.link);
                failed += 1;
            }
        }

        pb.inc(1);
        tokio::time::sleep(cfg.request_delay).await;
    }
    pb.finish_and_clear();

    if projects.is_empty() {
        return Ok(fallback(
            cfg,
            FallbackReason::AllProjectsFailed {
                attempted: candidates.len(),
            },
        ));
    }

    let stats = ScrapeStats {
        links_found,
        scraped: projects.len(),
        failed,
    };

    let collator = HebrewCollator::new()?;
    projects.sort_by(|a, b| collator.compare(&a.name, &b.name));
    if cfg.mode == Mode::Curated {
        projects.push(manual_project());
    }

    Ok(Outcome::Scraped { projects, stats })
}

/// Scrape and write the dataset. Always leaves a non-empty dataset on disk
/// unless even the sample cannot be written.
pub async fn run<S: PageSource>(cfg: &ScrapeConfig, source: &S) -> Result<Outcome> {
    let outcome = match scrape(cfg, source).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            fallback(cfg, FallbackReason::Unexpected(format!("{:#}", e)))
        }
    };

    match write_projects(&cfg.output_path, outcome.projects()) {
        Ok(()) => {
            info!(
                "Wrote {} projects to {}",
                outcome.projects().len(),
                cfg.output_path.display()
            );
            Ok(outcome)
        }
        Err(e) if !outcome.is_fallback() => {
            error!("Fatal error: {:#}", e);
            let outcome = fallback(cfg, FallbackReason::Unexpected(format!("{:#}", e)));
            write_projects(&cfg.output_path, outcome.projects())?;
            Ok(outcome)
        }
        Err(e) => Err(e),
    }
}

// ── Tests ──
