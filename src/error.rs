//! Error types for hostblock.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostblockError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No generated block found in {0:?}")]
    MarkerNotFound(PathBuf),

    #[error("No backup found at {0:?}")]
    BackupMissing(PathBuf),
}
