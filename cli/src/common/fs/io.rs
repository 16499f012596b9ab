//! # jenkinsw Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` for the files jenkinsw owns. Everything under
//! the config directory holds credentials or points at them, so directories are
//! created owner-only (0700) and files are written owner-only (0600) on Unix.
//!
//! - **`ensure_private_dir`**: `mkdir -p` with mode 0700 for newly created directories.
//!   Fails if the path exists but is not a directory.
//! - **`read_file_to_string`**: `fs::read_to_string` with path context.
//! - **`write_private_file`**: writes bytes with mode 0600, replacing any existing
//!   content. The parent directory must already exist.
//! - **`touch_private_file`**: creates an empty 0600 file if nothing exists at the path.
//!
use crate::core::error::{JenkinswError, Result};
use anyhow::Context;
use std::fs::{self, DirBuilder, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};

/// Mode for directories under the config root.
pub const PRIVATE_DIR_MODE: u32 = 0o700;
/// Mode for config, credential and cache files.
pub const PRIVATE_FILE_MODE: u32 = 0o600;

/// Ensures that a directory exists at `path`, creating it and any missing parents.
///
/// Newly created directories get mode 0700 on Unix; existing directories keep
/// their permissions.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creation fails.
pub fn ensure_private_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(PRIVATE_DIR_MODE);
        builder
            .create(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(JenkinswError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path` with owner-only permissions, truncating existing content.
///
/// If the file already existed with wider permissions they are narrowed to 0600.
pub fn write_private_file(path: &Path, content: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(PRIVATE_FILE_MODE);

    let mut file = options
        .open(path)
        .with_context(|| format!("Failed to open file {:?} for writing", path))?;
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(PRIVATE_FILE_MODE))
        .with_context(|| format!("Failed to set permissions on {:?}", path))?;
    file.write_all(content)
        .with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Creates an empty owner-only file at `path` unless something already exists there.
///
/// Returns `true` if the file was created.
pub fn touch_private_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_private_file(path, b"")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_private_dir_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("context/prod");
        assert!(!new_dir.exists());
        ensure_private_dir(&new_dir)?;
        assert!(new_dir.is_dir());

        #[cfg(unix)]
        {
            let mode = fs::metadata(&new_dir)?.permissions().mode() & 0o777;
            assert_eq!(mode, PRIVATE_DIR_MODE);
        }
        Ok(())
    }

    #[test]
    fn test_ensure_private_dir_already_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let existing_dir = base_dir.path().join("existing");
        fs::create_dir(&existing_dir)?;
        ensure_private_dir(&existing_dir)?;
        assert!(existing_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_private_dir_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_private_dir(&file_path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_write_private_file_replaces_content() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("secret");
        write_private_file(&file_path, b"first-longer-content")?;
        write_private_file(&file_path, b"second")?;
        assert_eq!(read_file_to_string(&file_path)?, "second");

        #[cfg(unix)]
        {
            let mode = fs::metadata(&file_path)?.permissions().mode() & 0o777;
            assert_eq!(mode, PRIVATE_FILE_MODE);
        }
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_write_private_file_narrows_permissions() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("wide");
        fs::write(&file_path, "x")?;
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o644))?;
        write_private_file(&file_path, b"y")?;
        let mode = fs::metadata(&file_path)?.permissions().mode() & 0o777;
        assert_eq!(mode, PRIVATE_FILE_MODE);
        Ok(())
    }

    #[test]
    fn test_touch_private_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("config");
        assert!(touch_private_file(&file_path)?);
        assert_eq!(read_file_to_string(&file_path)?, "");
        fs::write(&file_path, "keep")?;
        assert!(!touch_private_file(&file_path)?);
        assert_eq!(read_file_to_string(&file_path)?, "keep");
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.txt"));
        assert!(result.is_err());
        Ok(())
    }
}
