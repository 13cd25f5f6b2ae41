//! Frontier for a single domain traversal
//!
//! This module handles:
//! - FIFO queue management for URLs waiting to be fetched
//! - The visited set that keeps any URL from being scheduled twice
//!
//! A frontier belongs to exactly one traversal and is never shared.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Frontier manages the pending queue and the visited set of one domain
///
/// URL identity is the serialized string produced by resolution. The visited
/// set only grows; a URL leaves the queue when it is popped but stays visited.
#[derive(Debug)]
pub struct Frontier {
    /// URLs waiting to be fetched, in discovery order
    queue: VecDeque<Url>,

    /// Every URL seen so far, fetched or merely classified
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the domain root
    ///
    /// The visited set starts empty. Whether the root counts as seen is up to
    /// the traversal.
    pub fn new(root: Url) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);

        Self {
            queue,
            visited: HashSet::new(),
        }
    }

    /// Pops the next URL to fetch
    ///
    /// # Returns
    ///
    /// * `Some(Url)` - The oldest pending URL
    /// * `None` - The frontier is empty and the traversal is done
    pub fn next_url(&mut self) -> Option<Url> {
        self.queue.pop_front()
    }

    /// Marks a URL as visited
    ///
    /// # Returns
    ///
    /// * `true` - The URL was not seen before and is now visited
    /// * `false` - The URL was already visited
    pub fn mark_visited(&mut self, url: &Url) -> bool {
        self.visited.insert(url.as_str().to_string())
    }

    /// Returns whether a URL has been seen
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    /// Appends a URL to the back of the frontier
    ///
    /// Callers must have marked the URL visited first.
    pub fn add_to_frontier(&mut self, url: Url) {
        debug_assert!(self.is_visited(&url), "enqueued unvisited URL {}", url);
        self.queue.push_back(url);
    }

    /// Returns the number of URLs in the frontier
    pub fn frontier_size(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of visited URLs
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
