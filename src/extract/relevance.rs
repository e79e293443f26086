// src/extract/relevance.rs
// =============================================================================
// This module scores how relevant a page is to a topic vocabulary.
//
// The score is a plain occurrence count: every non-overlapping, case-sensitive
// match of every topic after the first paragraph marker adds one.
// =============================================================================

use super::content_start;

// Counts topic occurrences in a page
//
// Parameters:
//   content: raw page text
//   topics: the vocabulary (empty strings are ignored)
//
// Returns: the summed occurrence count (0 for an empty vocabulary)
pub fn score(content: &str, topics: &[String]) -> usize {
    let body = &content[content_start(content)..];
    topics
        .iter()
        .filter(|topic| !topic.is_empty())
        .map(|topic| body.matches(topic.as_str()).count())
        .sum()
}

/// A topic vocabulary bound to the scoring function.
///
/// An empty vocabulary disables scoring, which the crawler uses to fall
/// back to breadth-first traversal.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    topics: Vec<String>,
}

impl RelevanceScorer {
    pub fn new(topics: Vec<String>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn is_enabled(&self) -> bool {
        !self.topics.is_empty()
    }

    pub fn score(&self, content: &str) -> usize {
        score(content, &self.topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts_each_topic() {
        let page = "<p>graph theory studies graph structure and trees</p>";
        assert_eq!(score(page, &topics(&["graph", "tree"])), 3);
    }

    #[test]
    fn test_ignores_text_before_paragraph() {
        let page = "graph graph graph<p>one graph</p>";
        assert_eq!(score(page, &topics(&["graph"])), 1);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        assert_eq!(score("<p>aaaa", &topics(&["aa"])), 2);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(score("<p>Graph GRAPH graph", &topics(&["graph"])), 1);
    }

    #[test]
    fn test_empty_vocabulary_scores_zero() {
        assert_eq!(score("<p>anything", &[]), 0);
        assert!(!RelevanceScorer::new(Vec::new()).is_enabled());
    }

    #[test]
    fn test_empty_topic_is_ignored() {
        assert_eq!(score("<p>abc", &topics(&["", "b"])), 1);
    }

    #[test]
    fn test_scorer_uses_its_vocabulary() {
        let scorer = RelevanceScorer::new(topics(&["x"]));
        assert!(scorer.is_enabled());
        assert_eq!(scorer.score("<P>x y x"), 2);
    }
}
