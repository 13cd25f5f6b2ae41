//! Domain traversal - the breadth-first frontier engine
//!
//! One traversal crawls one domain:
//! 1. Pop the oldest URL from the frontier
//! 2. Fetch it; an absent page contributes nothing
//! 3. Extract candidate links, resolved against the domain root
//! 4. Classify each unseen candidate:
//!    - other network location → dropped
//!    - matches a product pattern → collected, never fetched
//!    - anything else → appended to the frontier
//! 5. Repeat until the frontier is empty
//!
//! Every candidate is marked visited before it is classified, so no URL is
//! fetched twice and cycles in the link graph cannot keep the loop alive.

use crate::crawler::fetcher::{FetchResult, PageFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::outcome::DomainOutcome;
use crate::crawler::parser::extract_candidates;
use crate::url::{is_product_url, same_origin, Domain};
use tracing::Instrument;
use url::Url;

/// State of a single domain's breadth-first crawl
pub struct DomainTraversal<'a, F: PageFetcher + ?Sized> {
    domain: Domain,
    fetcher: &'a F,
    patterns: &'a [String],
    frontier: Frontier,
    products: Vec<Url>,
    pages_fetched: usize,
    pages_absent: usize,
    links_seen: usize,
}

impl<'a, F: PageFetcher + ?Sized> DomainTraversal<'a, F> {
    /// Creates a traversal whose frontier holds only the domain root
    ///
    /// An ordinary root is marked visited up front, so a link back to it
    /// never fetches it twice. A root that itself matches a product pattern
    /// stays unvisited: the first same-origin link to it collects it as a
    /// product, and products are never enqueued.
    ///
    /// # Arguments
    ///
    /// * `domain` - The domain to crawl
    /// * `fetcher` - Source of page content, possibly shared with other traversals
    /// * `patterns` - Product URL patterns
    pub fn new(domain: Domain, fetcher: &'a F, patterns: &'a [String]) -> Self {
        let mut frontier = Frontier::new(domain.root().clone());
        if !is_product_url(domain.root().as_str(), patterns) {
            frontier.mark_visited(domain.root());
        }
        Self {
            domain,
            fetcher,
            patterns,
            frontier,
            products: Vec::new(),
            pages_fetched: 0,
            pages_absent: 0,
            links_seen: 0,
        }
    }

    /// Runs the traversal until the frontier is empty
    ///
    /// Never fails. A domain whose root cannot be fetched finishes straight
    /// away with no products.
    pub async fn run(self) -> DomainOutcome {
        let span = tracing::info_span!("domain", root = %self.domain);
        self.drain().instrument(span).await
    }

    async fn drain(mut self) -> DomainOutcome {
        while let Some(current) = self.frontier.next_url() {
            tracing::info!("Crawling {}", current);

            // The only suspension point: everything below runs to completion
            match self.fetcher.fetch(&current).await {
                FetchResult::Content { body, .. } => {
                    self.pages_fetched += 1;
                    let candidates = extract_candidates(&body, self.domain.root());
                    self.classify_candidates(candidates);
                }
                FetchResult::Absent(reason) => {
                    self.pages_absent += 1;
                    tracing::debug!("No content from {}: {}", current, reason);
                }
            }
        }

        tracing::info!(
            "Finished {}: {} products, {} pages fetched, {} absent",
            self.domain,
            self.products.len(),
            self.pages_fetched,
            self.pages_absent
        );

        DomainOutcome {
            domain: self.domain,
            products: self.products,
            pages_fetched: self.pages_fetched,
            pages_absent: self.pages_absent,
            links_seen: self.links_seen,
        }
    }

    /// Sorts the candidates of one page into dropped, products and frontier
    fn classify_candidates(&mut self, candidates: Vec<Url>) {
        self.links_seen += candidates.len();

        for candidate in candidates {
            if !self.frontier.mark_visited(&candidate) {
                continue;
            }

            if !same_origin(self.domain.root(), &candidate) {
                tracing::trace!("Dropping off-domain link {}", candidate);
                continue;
            }

            if is_product_url(candidate.as_str(), self.patterns) {
                tracing::debug!("Found product {}", candidate);
                self.products.push(candidate);
            } else {
                self.frontier.add_to_frontier(candidate);
            }
        }

        tracing::trace!(
            "{} URLs in frontier, {} visited",
            self.frontier.frontier_size(),
            self.frontier.visited_count()
        );
    }
}

/// Crawls a single domain to completion
pub async fn crawl_domain<F: PageFetcher + ?Sized>(
    domain: Domain,
    fetcher: &F,
    patterns: &[String],
) -> DomainOutcome {
    DomainTraversal::new(domain, fetcher, patterns).run().await
}
