// src/main.rs
// =============================================================================
// This is the entry point of the wikigraph CLI.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "info", written to stderr)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the subcommand handler
// 4. Exit with a proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wikigraph::extract::{extract_links, score};
use wikigraph::{CrawlReport, CrawlerConfig, FetchConfig, FrontierCrawler, HttpFetcher, PacedFetcher};

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so `--json` output on stdout stays machine readable
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            seed,
            max,
            mut topics,
            topics_file,
            output,
            focused,
            base_url,
            timeout_secs,
            requests_per_window,
            pause_ms,
            json,
        } => {
            if let Some(path) = topics_file {
                topics.extend(read_topics(&path).await?);
            }
            let config = CrawlerConfig::new(seed, max.get(), topics, output)?;
            let fetch = FetchConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
                requests_per_window,
                pause: Duration::from_millis(pause_ms),
                ..FetchConfig::default()
            };
            handle_crawl(config, fetch, focused, json).await
        }
        Commands::Inspect { path, topics } => handle_inspect(&path, &topics).await,
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(config: CrawlerConfig, fetch: FetchConfig, focused: bool, json: bool) -> Result<()> {
    let http = HttpFetcher::new(&fetch).context("could not set up the HTTP fetcher")?;
    let fetcher = PacedFetcher::new(http, fetch.requests_per_window, fetch.pause);

    let mut crawler = FrontierCrawler::new(config, fetcher);
    let report = crawler.crawl(focused).await?;

    print_report(&report, json)
}

// Handles the 'inspect' subcommand
async fn handle_inspect(path: &Path, topics: &[String]) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read {}", path.display()))?;

    let links = extract_links(&content);
    println!("{} link(s) in {}", links.len(), path.display());
    for link in &links {
        println!("   {}", link);
    }
    if !topics.is_empty() {
        println!("Relevance score: {}", score(&content, topics));
    }
    Ok(())
}

// Reads one topic per line, skipping blank lines
async fn read_topics(path: &Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read topics file {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Summary:");
    println!("   {:<18} {}", "Mode:", report.mode);
    println!("   {:<18} {}", "Seed:", report.seed);
    println!("   {:<18} {}", "Pages discovered:", report.pages_discovered);
    println!("   {:<18} {}", "Edges written:", report.edges_written);
    println!("   {:<18} {} ({} failed)", "Fetches:", report.fetches, report.fetch_failures);
    println!("   {:<18} {}", "Output:", report.output.display());
    Ok(())
}
