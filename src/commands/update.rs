//! Update command implementation.
//!
//! Runs the whole pipeline: load sources, download, extract, build, write,
//! count. Every failure inside the pipeline is logged and replaced by an
//! empty/placeholder value, so the command itself only fails on a bad config.

use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

use crate::config::{Config, Overrides};
use crate::extractor::extract_domains;
use crate::fetcher::Fetcher;
use crate::fs_abstraction::{real_fs, FileSystem};
use crate::hosts::{build_final_hosts, count_blocked};
use crate::sources::read_sources;
use crate::utils::format_count_with_separator;
use crate::writer::write_hosts;

/// Run the update command
pub async fn run(overrides: Overrides, dry_run: bool, config_path: &Path) -> Result<()> {
    let config = Config::resolve(config_path, overrides)?;

    let fetcher = Fetcher::new(config.timeout())?;
    let blocked = update_hosts(real_fs(), &fetcher, &config, dry_run).await;

    println!();
    println!("done, {} websites blocked.", blocked);
    println!();

    Ok(())
}

/// Regenerate the hosts file described by `config` and return the number of
/// blocked entries in the generated content.
///
/// With `dry_run` the content is built and counted but nothing is written.
pub async fn update_hosts(
    fs: &dyn FileSystem,
    fetcher: &Fetcher,
    config: &Config,
    dry_run: bool,
) -> usize {
    let blacklist_sources = read_sources(&config.blacklist_sources, Vec::new());
    let whitelist_sources = read_sources(&config.whitelist_sources, Vec::new());

    if blacklist_sources.is_empty() {
        warn!(
            "No blacklist sources found in {:?}",
            config.blacklist_sources
        );
    }

    let blacklist_blob = fetcher.download_and_merge(&blacklist_sources).await;
    let whitelist_blob = fetcher.download_and_merge(&whitelist_sources).await;

    let blacklist = extract_domains(&blacklist_blob);
    let whitelist = extract_domains(&whitelist_blob);

    info!(
        "Blacklist: {} domains, whitelist: {} domains (not applied)",
        format_count_with_separator(blacklist.len()),
        format_count_with_separator(whitelist.len())
    );

    let final_hosts = build_final_hosts(
        fs,
        &config.input_path,
        &config.sentinel_address,
        &blacklist,
        &whitelist,
    );

    if dry_run {
        info!("Dry run: not writing {:?}", config.output_path);
    } else {
        backup_once(fs, config);
        if let Err(e) = write_hosts(fs, &config.output_path, &final_hosts) {
            error!("Error writing to file: {:#}", e);
        }
    }

    count_blocked(&final_hosts, &config.sentinel_address)
}

/// Copy the output file to the backup path, unless a backup already exists.
///
/// Only the first copy is ever taken, so the backup holds the file as it was
/// before hostblock touched it. An empty backup path disables backups.
fn backup_once(fs: &dyn FileSystem, config: &Config) {
    let backup = &config.backup_path;
    let output = &config.output_path;

    if backup.as_os_str().is_empty() || fs.exists(backup) || !fs.exists(output) {
        return;
    }

    match fs.copy(output, backup) {
        Ok(_) => info!("Saved original hosts file to {:?}", backup),
        Err(e) => warn!("Could not back up {:?} to {:?}: {}", output, backup, e),
    }
}
