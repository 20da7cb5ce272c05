//! Link extraction from parsed pages
//!
//! Every `<a>` element on a page yields one link, in document order, resolved
//! with [`canonicalize`]. Duplicates are kept.

use crate::url::canonicalize;
use scraper::{Html, Selector};
use url::Url;

/// Extracts all followable links from a parsed document
///
/// # Link Extraction Rules
///
/// - Every `<a>` element contributes, including those nested inside inline SVG
/// - No scheme filtering: `mailto:` and friends resolve as relative paths
/// - An `<a>` without `href` resolves like an empty link (the origin root),
///   unless `skip_missing_href` is set, in which case it is dropped
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `base_url` - Final URL of the page, after redirects
/// * `skip_missing_href` - Drop anchors that have no `href` attribute
///
/// # Returns
///
/// Absolute URL strings in document order
pub fn extract_links(document: &Html, base_url: &Url, skip_missing_href: bool) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a") {
        for element in document.select(&a_selector) {
            let href = match element.value().attr("href") {
                Some(href) => href,
                None if skip_missing_href => continue,
                None => "",
            };
            links.push(canonicalize(href, base_url));
        }
    }

    links
}

/// Convenience function for extracting links straight from HTML text
///
/// # Example
///
/// ```
/// use svg_sweep::crawler::extract_links_simple;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/a/b").unwrap();
/// assert_eq!(extract_links_simple(html, &base_url), vec!["https://example.com/page"]);
/// ```
pub fn extract_links_simple(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    extract_links(&document, base_url, false)
}
