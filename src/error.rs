use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a crawl.
///
/// Fetch failures are not here: the crawler absorbs them as empty pages.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("page budget must be at least 1, got {0}")]
    InvalidBudget(usize),
    #[error("failed to write graph to {}: {source}", .path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
