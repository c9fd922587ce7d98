//! Per-user record store
//!
//! Each user lives in one pretty-printed JSON document,
//! `<root>/<username>.json`. Operations always read or replace the whole
//! document; there is no field-level update, index or history.
//!
//! ```text
//! user_data/
//! ├── anna.json          record
//! ├── anna.json.lock     writer lock (see `persist`)
//! └── .session.json      active session (see `session`)
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{validate_username, UserRecord};
use crate::error::StorageError;
use crate::persist;

/// File extension of record documents
pub const RECORD_EXTENSION: &str = "json";

/// Durable username -> record mapping backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct UserStore {
    root: PathBuf,
}

impl UserStore {
    /// Store rooted at `root`. The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of a user's document
    pub fn record_path(&self, username: &str) -> Result<PathBuf, StorageError> {
        if validate_username(username).is_err() {
            return Err(StorageError::InvalidKey(username.to_string()));
        }
        Ok(self
            .root
            .join(format!("{}.{}", username, RECORD_EXTENSION)))
    }

    /// Whether a record exists for `username`
    pub fn exists(&self, username: &str) -> Result<bool, StorageError> {
        Ok(self.record_path(username)?.is_file())
    }

    /// Read a user's record, or `None` if the user has none.
    ///
    /// A stored points total that disagrees with the achievement log is
    /// repaired in the returned value.
    pub fn load(&self, username: &str) -> Result<Option<UserRecord>, StorageError> {
        let path = self.record_path(username)?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(user = username, "No record on disk");
                return Ok(None);
            }
            Err(source) => return Err(StorageError::Read { path, source }),
        };

        let mut record: UserRecord = serde_json::from_str(&content)
            .map_err(|source| StorageError::Malformed {
                path: path.clone(),
                source,
            })?;

        if let Some(stale) = record.reconcile_points() {
            warn!(
                user = username,
                stored = stale,
                derived = record.points(),
                "Stored points disagree with achievement log, using derived total"
            );
        }

        debug!(user = username, path = %path.display(), "Loaded record");
        Ok(Some(record))
    }

    /// Persist a record for a user who has none yet.
    ///
    /// Fails with [`StorageError::AlreadyExists`] if the user already has one;
    /// the existing document is left untouched. The document appears in a
    /// single rename, so a failed write leaves no record behind.
    pub fn create(&self, record: &UserRecord) -> Result<(), StorageError> {
        let path = self.record_path(record.username())?;
        let _lock = persist::lock_exclusive(&path)?;

        if path.exists() {
            return Err(StorageError::AlreadyExists(record.username().to_string()));
        }
        let content = to_document(record)?;
        persist::write_atomic(&path, content.as_bytes())?;

        debug!(user = record.username(), path = %path.display(), "Created record");
        Ok(())
    }

    /// Overwrite the record's document in full.
    ///
    /// The storage key is the record's own username.
    pub fn save(&self, record: &UserRecord) -> Result<(), StorageError> {
        let path = self.record_path(record.username())?;
        let content = to_document(record)?;
        persist::write_locked(&path, content.as_bytes())?;

        debug!(user = record.username(), path = %path.display(), "Saved record");
        Ok(())
    }

    /// Load, mutate and save a record while holding its write lock.
    ///
    /// Returns `Ok(None)` when the user has no record. If `mutate` fails
    /// nothing is written.
    pub fn update<T, E, F>(
        &self,
        username: &str,
        mutate: F,
    ) -> Result<Option<(UserRecord, T)>, E>
    where
        F: FnOnce(&mut UserRecord) -> Result<T, E>,
        E: From<StorageError>,
    {
        let path = self.record_path(username)?;
        let _lock = persist::lock_exclusive(&path)?;

        let Some(mut record) = self.load(username)? else {
            return Ok(None);
        };
        let outcome = mutate(&mut record)?;

        let content = to_document(&record)?;
        persist::write_atomic(&path, content.as_bytes())?;

        debug!(user = username, path = %path.display(), "Updated record");
        Ok(Some((record, outcome)))
    }

    /// Usernames that have a record, sorted
    pub fn usernames(&self) -> Result<Vec<String>, StorageError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.root.clone(),
                    source,
                });
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION)
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .filter(|name| validate_username(name).is_ok())
            .collect();
        names.sort();
        Ok(names)
    }
}

/// Serialize a record as a pretty-printed UTF-8 document
fn to_document(record: &UserRecord) -> Result<String, StorageError> {
    serde_json::to_string_pretty(record).map_err(StorageError::Serialize)
}
