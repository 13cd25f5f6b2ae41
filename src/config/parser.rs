use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigResult;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Parses and validates a configuration from TOML text
///
/// Sections and keys that are left out take their defaults; only the
/// `domains` list is mandatory.
pub fn parse_config(content: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Reads, parses and validates the configuration file at `path`
///
/// # Returns
///
/// * `Ok(Config)` - A configuration ready to crawl with
/// * `Err(ConfigError)` - The file is unreadable, not TOML, or fails validation
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Hex-encoded SHA-256 of configuration text
///
/// Logged at startup so a results file can be traced back to the
/// configuration that produced it.
pub fn config_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Like [`load_config`], also returning the hash of the file as read
pub fn load_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let (config, hash) = read_config_with_hash(path)?;
    validate(&config)?;
    Ok((config, hash))
}

/// Reads and parses a configuration file without validating it
///
/// For callers that merge in more settings first, such as command-line
/// domains, and then call [`validate`] on the result.
pub fn read_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok((config, config_hash(&content)))
}
