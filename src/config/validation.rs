use crate::config::types::{Config, CrawlerConfig, OutputConfig};
use crate::url::Domain;
use crate::ConfigError;
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    validate_domains(&config.domains)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.product_patterns.is_empty() {
        return Err(ConfigError::Validation(
            "product_patterns must contain at least one pattern".to_string(),
        ));
    }

    // An empty pattern is a substring of every URL
    if config.product_patterns.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::Validation(
            "product_patterns cannot contain an empty pattern".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the domain list
fn validate_domains(domains: &[String]) -> Result<(), ConfigError> {
    if domains.is_empty() {
        return Err(ConfigError::NoDomains);
    }

    let mut seen = HashSet::new();
    for domain in domains {
        Domain::parse(domain).map_err(|source| ConfigError::InvalidDomain {
            domain: domain.clone(),
            source,
        })?;

        // Domains are keys of the results document
        if !seen.insert(domain.as_str()) {
            return Err(ConfigError::DuplicateDomain(domain.clone()));
        }
    }

    Ok(())
}
