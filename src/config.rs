//! Configuration management for hostblock.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::HostblockError;

/// Default block-target address written in front of every blocked domain
pub const DEFAULT_SENTINEL: &str = "0.0.0.0";

/// System hosts file, used both as prior content and as destination
pub const DEFAULT_HOSTS_PATH: &str = "/etc/hosts";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Where the prior hosts content is read from
    pub input_path: PathBuf,

    /// Where the final hosts content is written to
    pub output_path: PathBuf,

    /// Copy of the output file taken before its first overwrite
    pub backup_path: PathBuf,

    /// Address every blocked domain is mapped to
    pub sentinel_address: String,

    /// File listing blacklist source URLs, one per line
    pub blacklist_sources: PathBuf,

    /// File listing whitelist source URLs, one per line
    pub whitelist_sources: PathBuf,

    /// Per-request timeout in seconds. Unset means requests never time out.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_HOSTS_PATH),
            output_path: PathBuf::from(DEFAULT_HOSTS_PATH),
            backup_path: PathBuf::from("/etc/hosts.hostblock.bak"),
            sentinel_address: DEFAULT_SENTINEL.to_string(),
            blacklist_sources: PathBuf::from("./lists/blacklist.sources"),
            whitelist_sources: PathBuf::from("./lists/whitelist.sources"),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from YAML file.
    ///
    /// The result is not validated yet: command-line overrides may still
    /// replace invalid values. Use [`Config::resolve`] to get a checked config.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Load configuration from YAML file, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            debug!("Config file {:?} not found, using defaults", path.as_ref());
            Ok(Self::default())
        }
    }

    /// Load the config file (or defaults), apply `overrides`, then validate
    /// the merged result once.
    pub fn resolve<P: AsRef<Path>>(path: P, overrides: Overrides) -> Result<Self> {
        let config = Self::load_or_default(path.as_ref())
            .with_context(|| format!("Failed to load config from {:?}", path.as_ref()))?;
        let config = overrides.apply(config);
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), HostblockError> {
        if self.sentinel_address.parse::<IpAddr>().is_err() {
            return Err(HostblockError::Config(format!(
                "Invalid sentinel_address '{}': must be an IP address",
                self.sentinel_address
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(HostblockError::Config(
                "output_path must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err(HostblockError::Config(
                "timeout_secs must be greater than zero (omit it to disable)".to_string(),
            ));
        }

        Ok(())
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Command-line values taking precedence over the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sentinel: Option<String>,
}

impl Overrides {
    /// Replace the fields of `config` that were given on the command line
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(sentinel) = self.sentinel {
            config.sentinel_address = sentinel;
        }
        config
    }
}
