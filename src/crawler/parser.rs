//! HTML parser for extracting candidate links
//!
//! Every `<a href="...">` on the page is resolved against a base URL and
//! handed to the traversal in document order. No filtering happens here:
//! deciding what to follow is the traversal's job.

use crate::url::resolve;
use scraper::{Html, Selector};
use url::Url;

/// Extracts absolute candidate URLs from an HTML page
///
/// Parsing never fails: malformed markup is recovered by the HTML parser and
/// yields whatever anchors it could find. Hrefs that cannot be resolved are
/// skipped silently.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The base URL for resolving relative links
///
/// # Returns
///
/// The resolved URLs, in document order, duplicates included
///
/// # Example
///
/// ```
/// use product_scout::crawler::extract_candidates;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/item/1">One</a><a href="about">About</a></body></html>"#;
/// let base_url = Url::parse("https://shop.test/").unwrap();
/// let links = extract_candidates(html, &base_url);
///
/// assert_eq!(links[0].as_str(), "https://shop.test/item/1");
/// assert_eq!(links[1].as_str(), "https://shop.test/about");
/// ```
pub fn extract_candidates(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve(base_url, href))
        .collect()
}
