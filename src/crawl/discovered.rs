// src/crawl/discovered.rs
// Insertion-ordered set of discovered pages.
//
// The insertion index of a page is stable for the whole crawl; focused
// crawling uses it to find the link list cached for that page.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DiscoveredSet {
    order: Vec<String>,
    index: HashMap<String, usize>,
}

impl DiscoveredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    // Adds a page and returns its insertion index
    //
    // A page that is already present keeps its original index.
    pub fn insert(&mut self, page: impl Into<String>) -> usize {
        let page = page.into();
        if let Some(&existing) = self.index.get(&page) {
            return existing;
        }
        let next = self.order.len();
        self.index.insert(page.clone(), next);
        self.order.push(page);
        next
    }

    pub fn pages(&self) -> &[String] {
        &self.order
    }

    pub fn into_pages(self) -> Vec<String> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_and_index() {
        let mut set = DiscoveredSet::new();
        assert_eq!(set.insert("/wiki/S"), 0);
        assert_eq!(set.insert("/wiki/A"), 1);
        assert_eq!(set.index_of("/wiki/A"), Some(1));
        assert_eq!(set.pages(), ["/wiki/S", "/wiki/A"]);
    }

    #[test]
    fn test_reinsert_keeps_first_index() {
        let mut set = DiscoveredSet::new();
        set.insert("/wiki/S");
        set.insert("/wiki/A");
        assert_eq!(set.insert("/wiki/S"), 0);
        assert_eq!(set.len(), 2);
        assert!(set.contains("/wiki/S"));
        assert!(!set.contains("/wiki/B"));
    }
}
