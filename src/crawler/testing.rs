//! In-memory link graph fetcher for unit tests

use crate::crawler::fetcher::{AbsentReason, FetchResult, PageFetcher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Serves pages from a map and records every fetch
///
/// Unknown URLs answer 404. Each fetch yields to the scheduler once so
/// concurrent traversals interleave the way network I/O would make them.
#[derive(Debug, Default)]
pub(crate) struct GraphFetcher {
    pages: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

impl GraphFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a page whose body is a list of anchors
    pub(crate) fn page(mut self, url: &str, hrefs: &[&str]) -> Self {
        let body = hrefs
            .iter()
            .map(|href| format!(r#"<a href="{}">link</a>"#, href))
            .collect::<String>();
        self.pages
            .insert(url.to_string(), format!("<html><body>{}</body></html>", body));
        self
    }

    /// Every URL fetched so far, in fetch order
    pub(crate) fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub(crate) fn fetch_count(&self, url: &str) -> usize {
        self.fetched
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }
}

#[async_trait]
impl PageFetcher for GraphFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult {
        self.fetched.lock().unwrap().push(url.to_string());
        tokio::task::yield_now().await;

        match self.pages.get(url.as_str()) {
            Some(body) => FetchResult::Content {
                final_url: url.to_string(),
                status_code: 200,
                body: body.clone(),
            },
            None => FetchResult::Absent(AbsentReason::HttpStatus(404)),
        }
    }
}
