//! Locked, atomic file writes
//!
//! Every document is replaced as a whole: the new content goes to a sibling
//! temp file which is synced and renamed over the target. Writers to the same
//! target serialize on an exclusive lock taken on a separate `.lock` file, so
//! the lock survives the rename.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::StorageError;

/// Exclusive lock on a document; released when dropped
#[derive(Debug)]
pub struct WriteLock {
    _file: File,
}

/// `path` with `suffix` appended to its file name (`a.json` -> `a.json.lock`)
pub fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Block until the exclusive lock for `target` is held.
///
/// The parent directory is created if needed.
pub fn lock_exclusive(target: &Path) -> Result<WriteLock, StorageError> {
    ensure_parent(target)?;

    let lock_path = sibling(target, ".lock");
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(|source| StorageError::Lock {
            path: lock_path.clone(),
            source,
        })?;

    file.lock_exclusive()
        .map_err(|source| StorageError::Lock {
            path: lock_path,
            source,
        })?;

    Ok(WriteLock { _file: file })
}

/// Replace `path` with `content` via temp file + rename.
///
/// Callers that may race with other writers hold a [`WriteLock`] first.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    ensure_parent(path)?;

    let temp_path = sibling(path, ".tmp");
    let write_err = |source| StorageError::Write {
        path: temp_path.clone(),
        source,
    };

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(write_err)?;
    temp_file.write_all(content).map_err(write_err)?;
    temp_file.sync_all().map_err(write_err)?;
    drop(temp_file);

    std::fs::rename(&temp_path, path).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Lock, then replace `path` with `content`
pub fn write_locked(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let _lock = lock_exclusive(path)?;
    write_atomic(path, content)
}

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent(path: &Path) -> Result<(), StorageError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Create `dir` (and its parents) if it does not exist yet
pub fn ensure_dir(dir: &Path) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir).map_err(|source| StorageError::Write {
        path: dir.to_path_buf(),
        source,
    })
}
