//! Product-Scout main entry point
//!
//! This is the command-line interface for the Product-Scout product page finder.

use anyhow::Context;
use clap::Parser;
use product_scout::config::{read_config_with_hash, validate, Config};
use product_scout::crawler::crawl;
use product_scout::output::{print_statistics, write_results, CrawlStatistics};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Product-Scout: a same-domain product page finder
///
/// Product-Scout crawls each domain breadth-first from its root, following
/// links on the same host, and records every URL that looks like a product
/// page. Results are written as a JSON object keyed by domain.
#[derive(Parser, Debug)]
#[command(name = "product-scout")]
#[command(version = "1.0.0")]
#[command(about = "A same-domain product page finder", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Domain root to crawl (repeatable, replaces configured domains)
    #[arg(short, long = "domain", value_name = "URL")]
    domains: Vec<String>,

    /// Where to write the JSON results (overrides the config)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config, cli.quiet).await
}

/// Installs the fmt subscriber
///
/// `RUST_LOG` wins when set; otherwise `-q`/`-v` pick the level. Each event
/// carries the `domain` span of the traversal that emitted it.
fn setup_logging(verbose: u8, quiet: bool) {
    let directives = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "product_scout=info,warn",
        (false, 1) => "product_scout=debug,info",
        (false, 2) => "product_scout=trace,info",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Loads the config file (if any), applies command-line overrides, then validates
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = read_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let results_path = cli.output.as_ref().map(|p| p.display().to_string());
    let config = config.with_overrides(&cli.domains, results_path);

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Product-Scout Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Timeout: {}s", config.crawler.timeout_secs);
    println!("  User agent: {}", config.crawler.user_agent);
    println!("  Product patterns:");
    for pattern in &config.crawler.product_patterns {
        println!("    * {}", pattern);
    }

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);

    println!("\nDomains ({}):", config.domains.len());
    for domain in &config.domains {
        println!("  - {}", domain);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, quiet: bool) -> anyhow::Result<()> {
    tracing::info!("Crawling {} domains", config.domains.len());

    let result = crawl(config).await.context("crawl could not start")?;

    let results_path = Path::new(&config.output.results_path);
    write_results(&result, results_path)
        .await
        .with_context(|| format!("failed to write {}", results_path.display()))?;

    if !quiet {
        print_statistics(&CrawlStatistics::from_result(&result));
    }

    Ok(())
}
