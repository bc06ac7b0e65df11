//! HTTP fetcher for downloading blacklist and whitelist sources.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::utils::format_bytes;

/// HTTP client for fetching source lists
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a new fetcher. `None` means requests never time out.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(format!("hostblock/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Download the body at `url`.
    ///
    /// Transport failures are logged and yield an empty string. A non-success
    /// status is only warned about: the body is returned like any other.
    pub async fn download(&self, url: &str) -> String {
        info!("Downloading {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Error downloading {}: {}", url, e);
                return String::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered HTTP {}", url, status);
        }

        match response.text().await {
            Ok(body) => {
                debug!("Downloaded {} from {}", format_bytes(body.len() as u64), url);
                body
            }
            Err(e) => {
                error!("Error reading body from {}: {}", url, e);
                String::new()
            }
        }
    }

    /// Download every source in order, one at a time, and concatenate the
    /// bodies into a single blob.
    pub async fn download_and_merge(&self, sources: &[String]) -> String {
        let mut merged = String::new();
        for source in sources {
            merged.push_str(&self.download(source).await);
        }
        merged
    }
}

// Note: Default is intentionally not implemented for Fetcher
// because new() can fail and we want explicit error handling.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_timeout() {
        assert!(Fetcher::new(None).is_ok());
    }

    #[test]
    fn test_new_with_timeout() {
        assert!(Fetcher::new(Some(Duration::from_secs(5))).is_ok());
    }

    #[tokio::test]
    async fn test_download_invalid_url_is_empty() {
        let fetcher = Fetcher::new(None).unwrap();
        assert_eq!(fetcher.download("not-a-url").await, "");
    }

    #[tokio::test]
    async fn test_download_and_merge_no_sources() {
        let fetcher = Fetcher::new(None).unwrap();
        assert_eq!(fetcher.download_and_merge(&[]).await, "");
    }

    #[tokio::test]
    async fn test_download_and_merge_skips_failed_sources() {
        let fetcher = Fetcher::new(None).unwrap();
        let sources = vec!["not-a-url".to_string(), "ftp://invalid-scheme.example".to_string()];
        assert_eq!(fetcher.download_and_merge(&sources).await, "");
    }
}
