use url::Url;

/// Returns the network location of a URL as `host[:port]`
///
/// The host is lowercased by the URL parser. The port is only present when
/// it is not the default port for the scheme, so `http://a.test:80/` and
/// `http://a.test/` share a network location.
///
/// # Arguments
///
/// * `url` - The URL to inspect
///
/// # Returns
///
/// * `Some(String)` - The `host[:port]` component
/// * `None` - If the URL has no host (`mailto:`, `javascript:`, `data:` ...)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use product_scout::url::network_location;
///
/// let url = Url::parse("https://Shop.Example.com/item/1").unwrap();
/// assert_eq!(network_location(&url), Some("shop.example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(network_location(&url), Some("127.0.0.1:8080".to_string()));
///
/// let url = Url::parse("mailto:sales@example.com").unwrap();
/// assert_eq!(network_location(&url), None);
/// ```
pub fn network_location(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Checks whether a candidate URL lives on the same domain as the base
///
/// Only the network location is compared. The scheme is ignored, so
/// `http://shop.test/` and `https://shop.test/about` are the same domain.
/// URLs without a host never match.
pub fn same_origin(base: &Url, candidate: &Url) -> bool {
    match (network_location(base), network_location(candidate)) {
        (Some(base), Some(candidate)) => base == candidate,
        _ => false,
    }
}
