//! Crawler module for product discovery
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching that never fails, only comes back empty
//! - HTML parsing and link extraction
//! - The per-domain frontier and breadth-first traversal
//! - Overall crawl coordination across domains

mod coordinator;
mod fetcher;
mod frontier;
mod outcome;
mod parser;
#[cfg(test)]
mod testing;
mod traversal;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_url, AbsentReason, FetchResult, HttpFetcher, PageFetcher};
pub use frontier::Frontier;
pub use outcome::{CrawlResult, DomainOutcome};
pub use parser::extract_candidates;
pub use traversal::{crawl_domain, DomainTraversal};

use crate::config::Config;
use crate::url::Domain;
use crate::ScoutError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Parse the configured domain roots
/// 2. Build the HTTP client
/// 3. Crawl every domain concurrently
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed
/// * `Err(ScoutError)` - A domain root was invalid or the client could not be built
pub async fn crawl(config: &Config) -> Result<CrawlResult, ScoutError> {
    let domains = config
        .domains
        .iter()
        .map(|d| Domain::parse(d))
        .collect::<Result<Vec<_>, _>>()?;

    let coordinator = Coordinator::from_config(&config.crawler)?;
    Ok(coordinator.crawl_all(&domains).await)
}
