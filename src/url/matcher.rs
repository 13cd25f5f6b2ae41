/// Product path patterns used when none are configured
pub const DEFAULT_PRODUCT_PATTERNS: &[&str] = &["/product/", "/item/", "/p/", "/catalogue/"];

/// Checks if a URL is a product page
///
/// A URL is a product page when any pattern occurs anywhere in it as a
/// literal, case-sensitive substring. There is no path-segment anchoring:
/// a pattern inside the query string counts too.
///
/// # Arguments
///
/// * `url` - The absolute URL string to check
/// * `patterns` - The product patterns
///
/// # Examples
///
/// ```
/// use product_scout::url::is_product_url;
///
/// let patterns = vec!["/item/".to_string(), "/p/".to_string()];
///
/// assert!(is_product_url("https://shop.test/item/42", &patterns));
/// assert!(is_product_url("https://shop.test/search?next=/p/7", &patterns));
/// assert!(!is_product_url("https://shop.test/about", &patterns));
/// assert!(!is_product_url("https://shop.test/ITEM/42", &patterns));
/// ```
pub fn is_product_url(url: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| url.contains(pattern.as_str()))
}
