//! Restore command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::{Config, Overrides};
use crate::error::HostblockError;
use crate::fs_abstraction::{real_fs, FileSystem};

/// Run the restore command
pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::resolve(config_path, Overrides::default())?;

    restore(real_fs(), &config.backup_path, &config.output_path)?;

    println!("[OK] {:?} restored from {:?}", config.output_path, config.backup_path);
    Ok(())
}

/// Copy `backup` over `output`. The backup itself is kept.
pub fn restore(fs: &dyn FileSystem, backup: &Path, output: &Path) -> Result<()> {
    if backup.as_os_str().is_empty() || !fs.exists(backup) {
        return Err(HostblockError::BackupMissing(backup.to_path_buf()).into());
    }

    info!("Restoring {:?} from {:?}...", output, backup);
    fs.copy(backup, output)
        .with_context(|| format!("Failed to copy {:?} to {:?}", backup, output))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_abstraction::{MockFileSystem, RealFileSystem};
    use tempfile::TempDir;

    #[test]
    fn test_restore_copies_backup() {
        let mut fs = MockFileSystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_copy()
            .withf(|from, to| from == Path::new("/etc/hosts.bak") && to == Path::new("/etc/hosts"))
            .times(1)
            .returning(|_, _| Ok(20));

        restore(&fs, Path::new("/etc/hosts.bak"), Path::new("/etc/hosts")).unwrap();
    }

    #[test]
    fn test_restore_missing_backup() {
        let mut fs = MockFileSystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_copy().never();

        let err = restore(&fs, Path::new("/etc/hosts.bak"), Path::new("/etc/hosts")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HostblockError>(),
            Some(HostblockError::BackupMissing(_))
        ));
    }

    #[test]
    fn test_restore_real_files() {
        let dir = TempDir::new().unwrap();
        let backup = dir.path().join("hosts.bak");
        let output = dir.path().join("hosts");
        std::fs::write(&backup, "127.0.0.1 localhost\n").unwrap();
        std::fs::write(&output, "garbage\n0.0.0.0 a.example\n").unwrap();

        restore(&RealFileSystem, &backup, &output).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "127.0.0.1 localhost\n");
        assert!(backup.exists());
    }
}
