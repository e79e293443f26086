// src/extract/mod.rs
// =============================================================================
// This module contains the pure string functions the crawler runs on pages.
//
// Submodules:
// - links: Finds same-wiki links in raw page text
// - relevance: Scores a page against a topic vocabulary
//
// Both skip the page preamble (navigation, scripts, etc.) by starting at
// the first paragraph marker, so they agree on where "content" begins.
// =============================================================================

mod links;
mod relevance;

pub use links::{extract_links, LINK_PREFIX};
pub use relevance::{score, RelevanceScorer};

// Byte offset of the first "<p>" or "<P>", whichever comes first
//
// Returns 0 when the page has no paragraph marker at all.
pub(crate) fn content_start(content: &str) -> usize {
    match (content.find("<p>"), content.find("<P>")) {
        (Some(lower), Some(upper)) => lower.min(upper),
        (Some(pos), None) | (None, Some(pos)) => pos,
        (None, None) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_start_picks_earliest_marker() {
        assert_eq!(content_start("ab<P>cd<p>"), 2);
        assert_eq!(content_start("abcd<p>x<P>"), 4);
    }

    #[test]
    fn test_content_start_without_marker() {
        assert_eq!(content_start("no paragraphs here"), 0);
    }
}
