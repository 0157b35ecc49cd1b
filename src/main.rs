mod allow_list;
mod collate;
mod config;
mod fetch;
mod model;
mod output;
mod parser;
mod pipeline;
mod sample;
mod sanitize;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use config::{Mode, ScrapeConfig};
use fetch::HttpFetcher;
use pipeline::Outcome;

#[derive(Parser)]
#[command(
    name = "renewal_scraper",
    about = "Scrape urban-renewal projects into the website's projects.json"
)]
struct Cli {
    /// Output JSON path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Keep only allow-listed projects and append the curated record
    #[arg(long)]
    curated: bool,
    /// Site to scrape (listing page is its homepage)
    #[arg(long)]
    base_url: Option<String>,
    /// Pause between project pages, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl Cli {
    fn into_config(self) -> ScrapeConfig {
        let mut cfg = ScrapeConfig::default();
        if let Some(base) = self.base_url {
            cfg = cfg.with_base_url(&base);
        }
        if let Some(path) = self.output {
            cfg.output_path = path;
        }
        if let Some(ms) = self.delay_ms {
            cfg.request_delay = Duration::from_millis(ms);
        }
        if self.curated {
            cfg.mode = Mode::Curated;
        }
        cfg
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cfg = Cli::parse().into_config();

    println!("{}", "=".repeat(60));
    println!("Urban Renewal Projects Scraper");
    println!("{}", "=".repeat(60));

    let fetcher = HttpFetcher::new(&cfg)?;
    let outcome = pipeline::run(&cfg, &fetcher).await?;

    println!("{}", "=".repeat(60));
    match &outcome {
        Outcome::Scraped { stats, .. } => {
            println!("Summary:");
            println!("  Total links found:     {}", stats.links_found);
            println!("  Successfully scraped:  {}", stats.scraped);
            println!("  Failed:                {}", stats.failed);
        }
        Outcome::Fallback { reason, projects } => {
            println!("Fallback: {}", reason);
            println!("  Wrote {} sample projects", projects.len());
        }
    }
    println!("  Output: {}", cfg.output_path.display());
    println!("  Done in {:.1}s", t0.elapsed().as_secs_f64());
    println!("{}", "=".repeat(60));

    Ok(())
}
