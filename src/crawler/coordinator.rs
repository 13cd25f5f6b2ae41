//! Crawler coordinator - runs one traversal per domain
//!
//! All traversals are started together and driven cooperatively on the
//! caller's task, so they interleave only while waiting on a fetch. They
//! share the fetcher (and with it the HTTP connection pool) and nothing else.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::outcome::CrawlResult;
use crate::crawler::traversal::crawl_domain;
use crate::url::Domain;
use crate::ScoutError;
use chrono::Utc;
use futures::future::join_all;

/// Main crawler coordinator structure
pub struct Coordinator<F: PageFetcher = HttpFetcher> {
    fetcher: F,
    patterns: Vec<String>,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator backed by a real HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to crawl
    /// * `Err(ScoutError)` - The HTTP client could not be built
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, ScoutError> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(fetcher, config.product_patterns.clone()))
    }
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a coordinator over any page fetcher
    pub fn new(fetcher: F, patterns: Vec<String>) -> Self {
        Self { fetcher, patterns }
    }

    /// The fetcher shared by all traversals
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The product patterns applied to every domain
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Crawls every domain and collects their product URLs
    ///
    /// Domains are fully independent: each gets its own frontier and visited
    /// set, and a failing domain only empties its own entry. The result lists
    /// the domains in the order given.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use product_scout::config::CrawlerConfig;
    /// use product_scout::crawler::Coordinator;
    /// use product_scout::url::Domain;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let coordinator = Coordinator::from_config(&CrawlerConfig::default())?;
    /// let domains = vec![Domain::parse("https://books.toscrape.com")?];
    /// let result = coordinator.crawl_all(&domains).await;
    /// println!("{} products", result.total_products());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl_all(&self, domains: &[Domain]) -> CrawlResult {
        let started_at = Utc::now();
        tracing::info!("Starting crawl of {} domains", domains.len());

        let traversals = domains
            .iter()
            .cloned()
            .map(|domain| crawl_domain(domain, &self.fetcher, &self.patterns));
        let outcomes = join_all(traversals).await;

        let result = CrawlResult::new(outcomes, started_at, Utc::now());
        tracing::info!(
            "Crawl completed: {} products across {} domains in {}ms",
            result.total_products(),
            result.len(),
            (result.finished_at() - result.started_at()).num_milliseconds()
        );
        result
    }
}
