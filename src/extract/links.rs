// src/extract/links.rs
// =============================================================================
// This module extracts wiki links from raw page text.
//
// This is deliberately not an HTML parser. It looks for quoted references
// that start with the wiki path prefix, e.g. href="/wiki/Graph_theory", and
// keeps the first occurrence of each.
//
// A link is rejected if it contains:
// - ':' (namespaced pages such as /wiki/File:x.png or /wiki/Talk:y)
// - '#' (fragments of a page)
// =============================================================================

use super::content_start;

/// Path prefix every accepted link starts with.
pub const LINK_PREFIX: &str = "/wiki/";

// Extracts the ordered, duplicate-free list of wiki links in a page
//
// Parameters:
//   content: raw page text
//
// Returns: links in first-seen order, e.g. ["/wiki/A", "/wiki/B"]
//
// Scanning starts at the first paragraph marker. An opening quote with no
// closing quote ends the scan: nothing after it can be a complete link.
pub fn extract_links(content: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    let needle = format!("\"{}", LINK_PREFIX);

    let mut pos = content_start(content);
    while let Some(found) = content[pos..].find(&needle) {
        let open = pos + found;
        let Some(len) = content[open + 1..].find('"') else {
            break;
        };
        let close = open + 1 + len;
        let link = &content[open + 1..close];

        if !link.contains(':') && !link.contains('#') && !links.iter().any(|l| l == link) {
            links.push(link.to_string());
        }

        // The closing quote may itself open the next link
        pos = close;
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_links() {
        let page = r#"<p>See <a href="/wiki/Graph">graphs</a> and <a href="/wiki/Tree">trees</a>.</p>"#;
        assert_eq!(extract_links(page), vec!["/wiki/Graph", "/wiki/Tree"]);
    }

    #[test]
    fn test_skip_links_before_first_paragraph() {
        let page = r#"<a href="/wiki/Main_Page">home</a><p><a href="/wiki/Body">x</a>"#;
        assert_eq!(extract_links(page), vec!["/wiki/Body"]);
    }

    #[test]
    fn test_uppercase_paragraph_marker() {
        let page = r#"<a href="/wiki/Nav">n</a><P><a href="/wiki/Body">x</a>"#;
        assert_eq!(extract_links(page), vec!["/wiki/Body"]);
    }

    #[test]
    fn test_no_paragraph_scans_whole_page() {
        let page = r#"<a href="/wiki/One">1</a> <a href="/wiki/Two">2</a>"#;
        assert_eq!(extract_links(page), vec!["/wiki/One", "/wiki/Two"]);
    }

    #[test]
    fn test_skip_namespaced_and_fragment_links() {
        let page = r#"<p><a href="/wiki/File:Map.png">f</a>
            <a href="/wiki/Graph#History">h</a>
            <a href="/wiki/Talk:Graph">t</a>
            <a href="/wiki/Vertex">v</a>"#;
        assert_eq!(extract_links(page), vec!["/wiki/Vertex"]);
    }

    #[test]
    fn test_ignore_other_prefixes() {
        let page = r#"<p><a href="https://example.com/wiki/X">x</a> <a href="/w/index.php">i</a>"#;
        assert!(extract_links(page).is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_order() {
        let page = r#"<p><a href="/wiki/B">b</a><a href="/wiki/A">a</a><a href="/wiki/B">b</a>"#;
        assert_eq!(extract_links(page), vec!["/wiki/B", "/wiki/A"]);
    }

    #[test]
    fn test_unterminated_quote_stops_extraction() {
        let page = r#"<p><a href="/wiki/Good">g</a> <a href="/wiki/Broken"#;
        assert_eq!(extract_links(page), vec!["/wiki/Good"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let page = r#"<p><a href="/wiki/A">a</a><a href="/wiki/B">b</a><a href="/wiki/A">a</a>"#;
        let first = extract_links(page);
        let second = extract_links(page);
        assert_eq!(first, second);
        assert_eq!(first, vec!["/wiki/A", "/wiki/B"]);
    }

    #[test]
    fn test_non_ascii_content() {
        let page = "<p>Über <a href=\"/wiki/Zürich\">Zürich</a> - <a href=\"/wiki/Bern\">Bern</a>";
        assert_eq!(extract_links(page), vec!["/wiki/Zürich", "/wiki/Bern"]);
    }
}
