//! TOML configuration for a crawl
//!
//! A config names the domains to crawl, how pages are fetched and
//! classified (`[crawler]`), and where results go (`[output]`). Every field
//! except `domains` has a default.
//!
//! # Example
//!
//! ```
//! use product_scout::config::parse_config;
//!
//! let config = parse_config(r#"
//! domains = ["https://books.toscrape.com"]
//!
//! [crawler]
//! product-patterns = ["/catalogue/"]
//! "#).unwrap();
//!
//! assert_eq!(config.crawler.timeout_secs, 10);
//! assert_eq!(config.output.results_path, "product_urls.json");
//! ```

mod parser;
mod types;
mod validation;

pub use parser::{
    config_hash, load_config, load_config_with_hash, parse_config, read_config_with_hash,
};
pub use types::{Config, CrawlerConfig, OutputConfig};
pub use validation::validate;
