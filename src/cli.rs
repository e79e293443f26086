// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - crawl: Explore the wiki from a seed page and write the link graph
// - inspect: Show what the extractors see in a saved page (offline)
// =============================================================================

use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wikigraph",
    version,
    about = "Crawl a wiki from a seed page and write the discovered link graph",
    long_about = "wikigraph explores a wiki starting from a seed page, admits at most --max pages, \
                  and writes the link graph over those pages to a file. With --focused and at least \
                  one --topic, the pages most relevant to the topics are expanded first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl from a seed page and write the link graph
    ///
    /// Example: wikigraph crawl /wiki/Complexity_theory --max 100 --focused --topic complexity
    Crawl {
        /// Seed page id, relative to the base URL (e.g. /wiki/Complexity_theory)
        seed: String,

        /// Maximum number of pages to admit (the seed counts as the first)
        #[arg(long, default_value = "100")]
        max: NonZeroUsize,

        /// A topic keyword; repeat for several
        #[arg(long = "topic")]
        topics: Vec<String>,

        /// File with one topic keyword per line, added to --topic
        #[arg(long)]
        topics_file: Option<PathBuf>,

        /// Where the graph is written
        #[arg(long, short, default_value = "graph.txt")]
        output: PathBuf,

        /// Expand the most topic-relevant pages first
        ///
        /// Without any topics this falls back to breadth-first crawling
        #[arg(long)]
        focused: bool,

        /// Base address page ids are joined onto
        #[arg(long, default_value = wikigraph::config::DEFAULT_BASE_URL)]
        base_url: String,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,

        /// Requests allowed before pausing
        #[arg(long, default_value_t = wikigraph::config::DEFAULT_REQUESTS_PER_WINDOW)]
        requests_per_window: u32,

        /// Length of the pause in milliseconds
        #[arg(long, default_value_t = 3500)]
        pause_ms: u64,

        /// Print the crawl summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the links and relevance score the crawler would see in a saved page
    ///
    /// Example: wikigraph inspect page.html --topic graph
    Inspect {
        /// Path to a saved page
        path: PathBuf,

        /// A topic keyword; repeat for several
        #[arg(long = "topic")]
        topics: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crawl_defaults() {
        let cli = Cli::try_parse_from(["wikigraph", "crawl", "/wiki/Graph"]).unwrap();
        match cli.command {
            Commands::Crawl { seed, max, topics, output, focused, requests_per_window, .. } => {
                assert_eq!(seed, "/wiki/Graph");
                assert_eq!(max.get(), 100);
                assert!(topics.is_empty());
                assert_eq!(output, PathBuf::from("graph.txt"));
                assert!(!focused);
                assert_eq!(requests_per_window, 20);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_repeated_topics() {
        let cli = Cli::try_parse_from([
            "wikigraph", "crawl", "/wiki/Graph", "--focused", "--topic", "graph", "--topic", "tree",
        ])
        .unwrap();
        match cli.command {
            Commands::Crawl { topics, focused, .. } => {
                assert!(focused);
                assert_eq!(topics, vec!["graph", "tree"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_zero_budget_rejected() {
        let result = Cli::try_parse_from(["wikigraph", "crawl", "/wiki/Graph", "--max", "0"]);
        assert!(result.is_err());
    }
}
