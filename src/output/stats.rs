//! Statistics generation from a crawl result
//!
//! This module provides functionality for summarising and displaying
//! what a crawl did per domain.

use crate::crawler::{CrawlResult, DomainOutcome};
use chrono::{DateTime, Utc};

/// Per-domain crawl statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStatistics {
    /// The domain as supplied
    pub domain: String,

    /// Pages fetched with content
    pub pages_fetched: usize,

    /// Pages that produced no content
    pub pages_absent: usize,

    /// Candidate links seen, duplicates included
    pub links_seen: usize,

    /// Product URLs found
    pub products: usize,
}

impl From<&DomainOutcome> for DomainStatistics {
    fn from(outcome: &DomainOutcome) -> Self {
        Self {
            domain: outcome.domain.name().to_string(),
            pages_fetched: outcome.pages_fetched,
            pages_absent: outcome.pages_absent,
            links_seen: outcome.links_seen,
            products: outcome.products.len(),
        }
    }
}

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When the crawl finished
    pub finished_at: DateTime<Utc>,

    /// Statistics per domain, in input order
    pub domains: Vec<DomainStatistics>,
}

impl CrawlStatistics {
    /// Summarises a crawl result
    pub fn from_result(result: &CrawlResult) -> Self {
        Self {
            started_at: result.started_at(),
            finished_at: result.finished_at(),
            domains: result.outcomes().iter().map(DomainStatistics::from).collect(),
        }
    }

    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    pub fn total_pages_fetched(&self) -> usize {
        self.domains.iter().map(|d| d.pages_fetched).sum()
    }

    pub fn total_pages_absent(&self) -> usize {
        self.domains.iter().map(|d| d.pages_absent).sum()
    }

    pub fn total_products(&self) -> usize {
        self.domains.iter().map(|d| d.products).sum()
    }

    /// Domains whose root could not be fetched
    pub fn unreachable_domains(&self) -> Vec<&str> {
        self.domains
            .iter()
            .filter(|d| d.pages_fetched == 0)
            .map(|d| d.domain.as_str())
            .collect()
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Started: {}", stats.started_at.to_rfc3339());
    println!("  Finished: {}", stats.finished_at.to_rfc3339());
    println!("  Duration: {:.2}s", stats.duration_seconds());
    println!("  Domains: {}", stats.domains.len());
    println!("  Pages fetched: {}", stats.total_pages_fetched());
    println!("  Pages without content: {}", stats.total_pages_absent());
    println!("  Product URLs: {}", stats.total_products());
    println!();

    println!("Per Domain:");
    for domain in &stats.domains {
        println!(
            "  {}: {} products ({} pages fetched, {} absent, {} links seen)",
            domain.domain, domain.products, domain.pages_fetched, domain.pages_absent, domain.links_seen
        );
    }
    println!();

    let unreachable = stats.unreachable_domains();
    if !unreachable.is_empty() {
        println!("Unreachable Domains ({}):", unreachable.len());
        for domain in unreachable {
            println!("  - {}", domain);
        }
        println!();
    }
}
