//! Per-domain and whole-crawl results

use crate::url::Domain;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use url::Url;

/// What one domain traversal produced
#[derive(Debug, Clone)]
pub struct DomainOutcome {
    /// The domain that was crawled
    pub domain: Domain,

    /// Product URLs in discovery order, each listed once
    pub products: Vec<Url>,

    /// Pages fetched with content
    pub pages_fetched: usize,

    /// Pages whose fetch produced no content
    pub pages_absent: usize,

    /// Candidate links extracted across all fetched pages, duplicates included
    pub links_seen: usize,
}

impl DomainOutcome {
    /// An outcome with nothing fetched and nothing found
    pub fn empty(domain: Domain) -> Self {
        Self {
            domain,
            products: Vec::new(),
            pages_fetched: 0,
            pages_absent: 0,
            links_seen: 0,
        }
    }

    /// Product URLs as strings
    pub fn product_urls(&self) -> Vec<&str> {
        self.products.iter().map(Url::as_str).collect()
    }
}

/// Mapping from each crawled domain to its product URLs
///
/// Built once by the coordinator when every traversal has finished. Domains
/// keep their input order. Serializes as a JSON object keyed by the domain
/// string as supplied, with product URL arrays as values.
#[derive(Debug, Clone)]
pub struct CrawlResult {
    outcomes: Vec<DomainOutcome>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl CrawlResult {
    pub(crate) fn new(
        outcomes: Vec<DomainOutcome>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            outcomes,
            started_at,
            finished_at,
        }
    }

    /// Per-domain outcomes in input order
    pub fn outcomes(&self) -> &[DomainOutcome] {
        &self.outcomes
    }

    /// Looks up the product URLs of a domain by its input string
    pub fn products(&self, domain: &str) -> Option<Vec<&str>> {
        self.outcomes
            .iter()
            .find(|o| o.domain.name() == domain)
            .map(DomainOutcome::product_urls)
    }

    /// Number of domains in the result
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the result holds no domains
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Total product URLs across all domains
    pub fn total_products(&self) -> usize {
        self.outcomes.iter().map(|o| o.products.len()).sum()
    }

    /// When the crawl started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the last traversal finished
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

impl Serialize for CrawlResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.outcomes.len()))?;
        for outcome in &self.outcomes {
            map.serialize_entry(outcome.domain.name(), &outcome.product_urls())?;
        }
        map.end()
    }
}
