// src/crawl/frontier.rs
// =============================================================================
// This module implements the two traversal strategies of the crawler.
//
// How it works (both modes):
// 1. Admit the seed page
// 2. Take the next page off the frontier and look at its links
// 3. For each link, record an edge if the target is already discovered or
//    the page budget still has room; admit the target if it is new
// 4. Repeat until the frontier is empty
//
// The modes differ only in the frontier:
// - Breadth-first: a FIFO queue; a page is fetched when it is expanded
// - Focused: a max-heap keyed by relevance score; a page is fetched (and
//   scored) when it is discovered, and its links are cached until expansion
//
// Fetch failures never stop a crawl. A page that cannot be fetched is
// treated as empty: no links, score 0.
//
// Rust concepts:
// - Generics: FrontierCrawler<F> works with any Fetcher
// - VecDeque: FIFO frontier for breadth-first traversal
// - std::mem::take: Moves a cached link list out of the cache exactly once
// =============================================================================

use super::discovered::DiscoveredSet;
use super::heap::PriorityHeap;
use crate::config::CrawlerConfig;
use crate::error::CrawlError;
use crate::extract::{extract_links, RelevanceScorer};
use crate::fetch::Fetcher;
use crate::graph::{CrawlGraph, Edge, GraphWriter};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Order in which discovered pages are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalMode {
    BreadthFirst,
    Focused,
}

impl TraversalMode {
    // Focused traversal needs something to score against; without a
    // vocabulary it is demoted to breadth-first
    pub fn select(focused: bool, scoring_enabled: bool) -> Self {
        if focused && scoring_enabled {
            TraversalMode::Focused
        } else {
            TraversalMode::BreadthFirst
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalMode::BreadthFirst => write!(f, "breadth-first"),
            TraversalMode::Focused => write!(f, "focused"),
        }
    }
}

/// Summary of a finished crawl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    pub mode: TraversalMode,
    pub seed: String,
    pub pages_discovered: usize,
    pub edges_written: usize,
    pub fetches: usize,
    pub fetch_failures: usize,
    pub output: PathBuf,
}

// Outcome of following one link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    // Self-loop, or a new page the budget has no room for
    Rejected,
    // Edge recorded to an already discovered page
    Known,
    // Edge recorded and the target admitted
    New,
}

// Discovered set, edge list and budget shared by both traversal modes
struct Traversal {
    discovered: DiscoveredSet,
    edges: Vec<Edge>,
    max_pages: usize,
}

impl Traversal {
    // The seed is always the first admission, whatever the budget
    fn start(seed: &str, max_pages: usize) -> Self {
        let mut discovered = DiscoveredSet::new();
        discovered.insert(seed);
        Self {
            discovered,
            edges: Vec::new(),
            max_pages,
        }
    }

    fn follow(&mut self, source: &str, target: &str) -> Admission {
        if source == target {
            return Admission::Rejected;
        }
        let known = self.discovered.contains(target);
        if !known && self.discovered.len() >= self.max_pages {
            return Admission::Rejected;
        }

        self.edges.push(Edge::new(source, target));
        if known {
            Admission::Known
        } else {
            self.discovered.insert(target);
            Admission::New
        }
    }

    fn into_graph(self) -> CrawlGraph {
        CrawlGraph {
            pages: self.discovered.into_pages(),
            edges: self.edges,
        }
    }
}

// Heap priorities are signed; scores are counts
fn priority(score: usize) -> i64 {
    i64::try_from(score).unwrap_or(i64::MAX)
}

/// Explores the wiki from a seed page within a page budget.
pub struct FrontierCrawler<F> {
    config: CrawlerConfig,
    scorer: RelevanceScorer,
    fetcher: F,
    fetches: usize,
    fetch_failures: usize,
}

impl<F: Fetcher> FrontierCrawler<F> {
    pub fn new(config: CrawlerConfig, fetcher: F) -> Self {
        let scorer = RelevanceScorer::new(config.topics.clone());
        Self {
            config,
            scorer,
            fetcher,
            fetches: 0,
            fetch_failures: 0,
        }
    }

    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn into_fetcher(self) -> F {
        self.fetcher
    }

    // Crawls and writes the graph to the configured output file
    //
    // Parameters:
    //   focused: expand the most relevant pages first (needs topics)
    //
    // Returns: a report of the crawl, or Err if the output cannot be written.
    // The output file is created before the first fetch.
    pub async fn crawl(&mut self, focused: bool) -> Result<CrawlReport, CrawlError> {
        let mode = TraversalMode::select(focused, self.scorer.is_enabled());
        if focused && mode == TraversalMode::BreadthFirst {
            info!("no topics given, falling back to breadth-first traversal");
        }

        let writer = GraphWriter::create(&self.config.output).await?;

        info!(
            %mode,
            seed = %self.config.seed,
            max_pages = self.config.max_pages,
            "starting crawl"
        );
        let graph = self.explore(mode).await;
        writer.write(&graph).await?;

        let report = CrawlReport {
            mode,
            seed: self.config.seed.clone(),
            pages_discovered: graph.page_count(),
            edges_written: graph.edges.len(),
            fetches: self.fetches,
            fetch_failures: self.fetch_failures,
            output: self.config.output.clone(),
        };
        info!(
            pages = report.pages_discovered,
            edges = report.edges_written,
            failures = report.fetch_failures,
            output = %report.output.display(),
            "crawl finished"
        );
        Ok(report)
    }

    // Runs one traversal and returns the graph without writing it
    pub async fn explore(&mut self, mode: TraversalMode) -> CrawlGraph {
        self.fetches = 0;
        self.fetch_failures = 0;
        match mode {
            TraversalMode::BreadthFirst => self.breadth_first().await,
            TraversalMode::Focused => self.focused().await,
        }
    }

    async fn breadth_first(&mut self) -> CrawlGraph {
        let seed = self.config.seed.clone();
        let mut traversal = Traversal::start(&seed, self.config.max_pages);
        let mut queue = VecDeque::from([seed]);

        while let Some(curr) = queue.pop_front() {
            let content = self.fetch_content(&curr).await;
            let links = extract_links(&content);
            debug!(page = %curr, links = links.len(), discovered = traversal.discovered.len(), "expanding");

            for link in links {
                if traversal.follow(&curr, &link) == Admission::New {
                    queue.push_back(link);
                }
            }
        }

        traversal.into_graph()
    }

    async fn focused(&mut self) -> CrawlGraph {
        let seed = self.config.seed.clone();
        let mut heap = PriorityHeap::new();
        // link_cache[i] belongs to the i-th discovered page
        let mut link_cache: Vec<Vec<String>> = Vec::new();

        let content = self.fetch_content(&seed).await;
        heap.insert(seed.clone(), priority(self.scorer.score(&content)));
        link_cache.push(extract_links(&content));
        let mut traversal = Traversal::start(&seed, self.config.max_pages);

        while !heap.is_empty() {
            let priority_of_curr = heap.priority_at(0);
            let curr = heap.extract_max();
            let links = match traversal.discovered.index_of(&curr) {
                Some(index) => std::mem::take(&mut link_cache[index]),
                None => unreachable!("page {} was expanded without being discovered", curr),
            };
            debug!(
                page = %curr,
                score = priority_of_curr,
                links = links.len(),
                discovered = traversal.discovered.len(),
                "expanding"
            );

            for link in links {
                if traversal.follow(&curr, &link) != Admission::New {
                    continue;
                }
                let content = self.fetch_content(&link).await;
                let score = self.scorer.score(&content);
                link_cache.push(extract_links(&content));
                heap.insert(link, priority(score));
            }
        }

        traversal.into_graph()
    }

    // Fetches a page, absorbing any failure as an empty page
    async fn fetch_content(&mut self, page: &str) -> String {
        self.fetches += 1;
        match self.fetcher.fetch(page).await {
            Ok(content) => content,
            Err(e) => {
                self.fetch_failures += 1;
                warn!(page, error = %e, "fetch failed, treating page as empty");
                String::new()
            }
        }
    }
}
