//! URL handling module for Product-Scout
//!
//! This module provides href resolution, network-location comparison,
//! product pattern matching, and the `Domain` crawl input type.

mod matcher;
mod origin;
mod resolve;

use crate::{UrlError, UrlResult};
use ::url::Url;
use std::fmt;

// Re-export main functions
pub use matcher::{is_product_url, DEFAULT_PRODUCT_PATTERNS};
pub use origin::{network_location, same_origin};
pub use resolve::resolve;

/// A domain to crawl
///
/// Holds the root URL exactly as it was supplied (used as the key in the
/// crawl result) alongside its parsed form (used for fetching, resolution
/// and same-origin checks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    name: String,
    root: Url,
}

impl Domain {
    /// Parses a domain root URL
    ///
    /// The root must be an absolute `http` or `https` URL with a host.
    ///
    /// # Examples
    ///
    /// ```
    /// use product_scout::url::Domain;
    ///
    /// let domain = Domain::parse("https://shop.example.com").unwrap();
    /// assert_eq!(domain.name(), "https://shop.example.com");
    /// assert_eq!(domain.root().as_str(), "https://shop.example.com/");
    ///
    /// assert!(Domain::parse("ftp://shop.example.com").is_err());
    /// assert!(Domain::parse("/relative/path").is_err());
    /// ```
    pub fn parse(name: &str) -> UrlResult<Self> {
        let root = Url::parse(name).map_err(|e| UrlError::Parse(format!("{}: {}", name, e)))?;

        if root.scheme() != "http" && root.scheme() != "https" {
            return Err(UrlError::InvalidScheme(root.scheme().to_string()));
        }

        if root.host_str().map_or(true, str::is_empty) {
            return Err(UrlError::MissingHost(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            root,
        })
    }

    /// The root URL as supplied by the caller
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed root URL
    pub fn root(&self) -> &Url {
        &self.root
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
