//! Atomic file writes.
//!
//! Output files are written via temp file + fsync + rename so a crash
//! never leaves a truncated `.gitignore` behind. The temp file lives in
//! the same directory as the target (rename is only atomic within one
//! filesystem) and is named `.{filename}.tmp`.

use crate::error::{DevstdError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file.
///
/// Writes the content to a temporary file in the target directory,
/// syncs it to disk, then renames it over the target. Parent
/// directories are created as needed.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The text to write
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(DevstdError::WriteError)` - On write or rename failure
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            DevstdError::WriteError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        DevstdError::WriteError(format!(
            "failed to replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Temp file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DevstdError::WriteError("invalid output file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync it to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        DevstdError::WriteError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        DevstdError::WriteError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        DevstdError::WriteError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".gitignore");

        atomic_write_file(&path, "*.pyc\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "*.pyc\n");
    }

    #[test]
    fn replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".gitignore");
        fs::write(&path, "old content").unwrap();

        atomic_write_file(&path, "new content\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new content\n");
    }

    #[test]
    fn creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out").join(".gitignore");

        atomic_write_file(&path, "content\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content\n");
    }

    #[test]
    fn leaves_no_temp_file_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".gitignore");

        atomic_write_file(&path, "content\n").unwrap();

        assert!(!temp_dir.path().join("..gitignore.tmp").exists());
    }

    #[test]
    fn relative_path_without_parent_works() {
        let temp_dir = TempDir::new().unwrap();
        let guard = crate::test_support::DirGuard::new(temp_dir.path());

        atomic_write_file(Path::new("plain.txt"), "content\n").unwrap();

        assert_eq!(fs::read_to_string("plain.txt").unwrap(), "content\n");
        drop(guard);
    }
}
