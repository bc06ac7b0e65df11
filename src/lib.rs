//! # hostblock - hosts-file ad and tracker blocking
//!
//! Downloads plain-text domain blocklists, merges and deduplicates them, and
//! appends one `<sentinel> <domain>` line per blocked domain to the local
//! hosts file.
//!
//! ## Pipeline
//!
//! ```text
//! lists/blacklist.sources ─┐
//! lists/whitelist.sources ─┤ sources::read_sources
//!                          ▼
//!                  fetcher::Fetcher        (one request at a time)
//!                          ▼
//!                  extractor::extract_domains   (trim, drop #, dedupe, sort)
//!                          ▼
//!                  hosts::build_final_hosts     (prior content + generated block)
//!                          ▼
//!                  writer::write_hosts  ──►  hosts::count_blocked
//! ```
//!
//! The whitelist is downloaded and extracted but not yet subtracted from the
//! blacklist. Each `update` appends a new generated block after the existing
//! content; `uninstall` strips generated blocks and `restore` puts back the
//! backup taken before the first update.
//!
//! ## Example Usage
//!
//! ```no_run
//! use hostblock::commands::update::update_hosts;
//! use hostblock::config::{Config, Overrides};
//! use hostblock::fetcher::Fetcher;
//! use hostblock::fs_abstraction::real_fs;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::resolve("hostblock.yaml", Overrides::default())?;
//!     let fetcher = Fetcher::new(config.timeout())?;
//!
//!     let blocked = update_hosts(real_fs(), &fetcher, &config, false).await;
//!     println!("done, {} websites blocked.", blocked);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod fs_abstraction;
pub mod hosts;
pub mod sources;
pub mod utils;
pub mod writer;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::HostblockError;
