//! Product-Scout: a same-domain product page finder
//!
//! This crate walks each configured domain breadth-first from its root,
//! following same-origin links and collecting every URL that matches a
//! product pattern. Domains are crawled concurrently and independently.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Top-level error for Product-Scout
///
/// Nothing raised during a crawl ends up here: fetch failures are absorbed
/// by the fetcher. These are the fatal errors around the crawl.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Bad domain root: {0}")]
    Domain(#[from] UrlError),

    #[error("Could not write results: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors raised while loading or checking a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No domains to crawl")]
    NoDomains,

    #[error("Invalid domain '{domain}': {source}")]
    InvalidDomain {
        domain: String,
        #[source]
        source: UrlError,
    },

    #[error("Domain '{0}' is listed more than once")]
    DuplicateDomain(String),
}

/// Reasons a domain root is rejected
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Unsupported scheme '{0}', expected http or https")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for Product-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub type UrlResult<T> = std::result::Result<T, UrlError>;

pub use config::Config;
pub use crawler::{crawl, Coordinator, CrawlResult, DomainOutcome};
pub use crate::url::{is_product_url, resolve, same_origin, Domain};
