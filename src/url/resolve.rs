use url::Url;

/// Resolves a possibly-relative href against a base URL
///
/// Resolution follows the WHATWG URL rules, so dot segments are removed and
/// surrounding whitespace is stripped, but fragments and trailing slashes are
/// kept as written. Hrefs that cannot be resolved are dropped.
///
/// # Arguments
///
/// * `base` - The URL to resolve against
/// * `href` - The raw `href` attribute value
///
/// # Returns
///
/// * `Some(Url)` - The absolute URL
/// * `None` - If the href is malformed
///
/// # Examples
///
/// ```
/// use url::Url;
/// use product_scout::url::resolve;
///
/// let base = Url::parse("https://shop.test/").unwrap();
///
/// let url = resolve(&base, "item/1").unwrap();
/// assert_eq!(url.as_str(), "https://shop.test/item/1");
///
/// let url = resolve(&base, "https://other.test/p/2").unwrap();
/// assert_eq!(url.as_str(), "https://other.test/p/2");
///
/// assert!(resolve(&base, "http://[::1").is_none());
/// ```
pub fn resolve(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}
