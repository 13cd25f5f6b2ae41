//! Output module for persisting crawl results
//!
//! This module handles:
//! - Serializing the crawl result as a pretty-printed JSON document
//! - Writing the document to disk
//! - Summarising crawl statistics

pub mod stats;

pub use stats::{print_statistics, CrawlStatistics, DomainStatistics};

use crate::crawler::CrawlResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Formats a crawl result as JSON
///
/// The document is one object: keys are the domains as supplied, in input
/// order, values are arrays of product URLs in discovery order. Indented
/// with four spaces.
///
/// # Example
///
/// ```json
/// {
///     "https://books.toscrape.com": [
///         "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
///     ]
/// }
/// ```
pub fn format_results(result: &CrawlResult) -> OutputResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    result.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes a crawl result to a JSON file, replacing any existing file
///
/// # Arguments
///
/// * `result` - The crawl result
/// * `path` - Destination file
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the results
/// * `Err(OutputError)` - Failed to serialize or write
pub async fn write_results(result: &CrawlResult, path: &Path) -> OutputResult<()> {
    let json = format_results(result)?;
    tokio::fs::write(path, json).await?;
    tracing::info!("Results saved to {}", path.display());
    Ok(())
}
