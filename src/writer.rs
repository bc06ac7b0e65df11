//! Persisting the final hosts content.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::fs_abstraction::FileSystem;

/// Overwrite `path` with `content`.
///
/// An existing file keeps its permissions. A file created by this call gets
/// [`NEW_FILE_MODE`](crate::fs_abstraction::NEW_FILE_MODE) under the umask,
/// set atomically with its creation.
pub fn write_hosts(fs: &dyn FileSystem, path: &Path, content: &str) -> Result<()> {
    fs.write(path, content.as_bytes())
        .with_context(|| format!("Failed to write {:?}", path))?;

    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
