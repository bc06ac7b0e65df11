//! Status command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{Config, Overrides};
use crate::fs_abstraction::{real_fs, FileSystem};
use crate::hosts::{count_blocked, count_generated_blocks};
use crate::utils::format_count_with_separator;

/// What the current hosts file contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostsStatus {
    /// Lines mapped to the sentinel address
    pub blocked: usize,
    /// Generated blocks present; more than one means repeated updates piled up
    pub generated_blocks: usize,
    /// Whether a backup exists to restore from
    pub has_backup: bool,
}

/// Run the status command. `sentinel` replaces the configured address, to
/// match an `update --sentinel` run.
pub async fn run(sentinel: Option<String>, config_path: &Path) -> Result<()> {
    let overrides = Overrides {
        sentinel,
        ..Overrides::default()
    };
    let config = Config::resolve(config_path, overrides)?;

    let status = inspect(real_fs(), &config)?;

    println!();
    println!("Hosts file: {:?}", config.output_path);
    println!("Blocked entries: {}", format_count_with_separator(status.blocked));
    println!("Generated blocks: {}", status.generated_blocks);
    if status.generated_blocks > 1 {
        println!("  (run 'hostblock uninstall' then 'hostblock update' to collapse them)");
    }
    println!(
        "Backup: {}",
        if status.has_backup {
            format!("{:?}", config.backup_path)
        } else {
            "none".to_string()
        }
    );
    println!();

    Ok(())
}

/// Read the output hosts file and summarize it
pub fn inspect(fs: &dyn FileSystem, config: &Config) -> Result<HostsStatus> {
    let content = fs
        .read_to_string(&config.output_path)
        .with_context(|| format!("Failed to read {:?}", config.output_path))?;

    Ok(HostsStatus {
        blocked: count_blocked(&content, &config.sentinel_address),
        generated_blocks: count_generated_blocks(&content),
        has_backup: !config.backup_path.as_os_str().is_empty() && fs.exists(&config.backup_path),
    })
}
