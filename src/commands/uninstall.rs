//! Uninstall command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::{Config, Overrides};
use crate::error::HostblockError;
use crate::fs_abstraction::{real_fs, FileSystem};
use crate::hosts::{count_generated_blocks, strip_generated_block};
use crate::writer::write_hosts;

/// Run the uninstall command
pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::resolve(config_path, Overrides::default())?;

    info!("Removing generated blocks from {:?}...", config.output_path);
    let removed = uninstall(real_fs(), &config.output_path)?;

    println!("[OK] {} generated block(s) removed", removed);
    Ok(())
}

/// Strip every generated block from `path` and return how many were removed.
///
/// Fails with [`HostblockError::MarkerNotFound`] when the file holds none.
pub fn uninstall(fs: &dyn FileSystem, path: &Path) -> Result<usize> {
    let content = fs
        .read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;

    let stripped = strip_generated_block(&content)
        .ok_or_else(|| HostblockError::MarkerNotFound(path.to_path_buf()))?;

    write_hosts(fs, path, &stripped)?;
    Ok(count_generated_blocks(&content))
}
