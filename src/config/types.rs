use crate::url::DEFAULT_PRODUCT_PATTERNS;
use serde::Deserialize;

/// Main configuration structure for Product-Scout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Domain root URLs to crawl, in output order
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Applies command-line settings on top of a loaded configuration
    ///
    /// A non-empty `domains` list replaces the configured one; a results path
    /// replaces the configured path. The result is not validated.
    pub fn with_overrides(mut self, domains: &[String], results_path: Option<String>) -> Self {
        if !domains.is_empty() {
            self.domains = domains.to_vec();
        }
        if let Some(path) = results_path {
            self.output.results_path = path;
        }
        self
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Timeout for a single page fetch (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Substrings that mark a URL as a product page
    #[serde(rename = "product-patterns")]
    pub product_patterns: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0".to_string(),
            product_patterns: DEFAULT_PRODUCT_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the JSON results file
    #[serde(rename = "results-path")]
    pub results_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: "product_urls.json".to_string(),
        }
    }
}
