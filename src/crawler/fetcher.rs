//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client with the configured user agent and timeout
//! - GET requests to fetch page content
//! - Mapping every failure to an explicit `Absent` result
//!
//! A fetch is a single attempt. There is no retry.

use crate::config::CrawlerConfig;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Content {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// No content could be retrieved
    Absent(AbsentReason),
}

/// Why a fetch produced no content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsentReason {
    /// The server answered with something other than 200 OK
    HttpStatus(u16),

    /// The request did not complete within the configured timeout
    Timeout,

    /// The connection could not be established
    Connect(String),

    /// The response body could not be read or decoded
    Body(String),

    /// Any other transport failure
    Transport(String),
}

impl fmt::Display for AbsentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsentReason::HttpStatus(code) => write!(f, "HTTP status {}", code),
            AbsentReason::Timeout => f.write_str("request timeout"),
            AbsentReason::Connect(e) => write!(f, "connection failed: {}", e),
            AbsentReason::Body(e) => write!(f, "failed to read body: {}", e),
            AbsentReason::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

/// Source of page content for a traversal
///
/// Implementations must never fail: every problem is reported as
/// `FetchResult::Absent`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieves the content of a single page
    async fn fetch(&self, url: &Url) -> FetchResult;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use product_scout::config::CrawlerConfig;
/// use product_scout::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, mapping every failure to `FetchResult::Absent`
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 with readable body | Content |
/// | Any other status | Absent(HttpStatus), logged as warning |
/// | Timeout | Absent(Timeout), logged as error |
/// | Connection refused / TLS failure | Absent(Connect), logged as error |
/// | Body read or decode failure | Absent(Body), logged as error |
/// | Anything else | Absent(Transport), logged as error |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &Url) -> FetchResult {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            let reason = classify_transport_error(&e);
            tracing::error!("Error fetching {}: {}", url, reason);
            return FetchResult::Absent(reason);
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!("Failed to fetch {} with status {}", url, status.as_u16());
        return FetchResult::Absent(AbsentReason::HttpStatus(status.as_u16()));
    }

    let final_url = response.url().to_string();

    match response.text().await {
        Ok(body) => FetchResult::Content {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => {
            let reason = if e.is_timeout() {
                AbsentReason::Timeout
            } else {
                AbsentReason::Body(e.to_string())
            };
            tracing::error!("Error fetching {}: {}", url, reason);
            FetchResult::Absent(reason)
        }
    }
}

/// Classifies a request error into an absent reason
fn classify_transport_error(e: &reqwest::Error) -> AbsentReason {
    if e.is_timeout() {
        AbsentReason::Timeout
    } else if e.is_connect() {
        AbsentReason::Connect(e.to_string())
    } else {
        AbsentReason::Transport(e.to_string())
    }
}

/// The production `PageFetcher`, backed by one shared reqwest client
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the crawler configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}
