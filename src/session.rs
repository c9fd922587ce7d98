//! The signed-in user
//!
//! A [`Session`] is handed out by a successful registration or login and is
//! passed explicitly to every user-scoped operation. Since each command runs
//! in its own process, the active session is kept in a small JSON file next
//! to the records until logout.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::timestamp;
use crate::error::StorageError;
use crate::persist;

/// File name of the session slot inside the data directory
pub const SESSION_FILE: &str = ".session.json";

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    username: String,
    /// `DD.MM.YYYY HH:MM`
    started_at: String,
}

impl Session {
    /// Start a session for `username` now
    pub fn start(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            started_at: timestamp::now_minute_stamp(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }
}

/// Persisted slot holding at most one active session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Session slot inside a data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The active session, if any.
    ///
    /// An unreadable slot is treated as signed out.
    pub fn current(&self) -> Result<Option<Session>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring corrupt session file");
                Ok(None)
            }
        }
    }

    /// Make `session` the active one, replacing any previous session
    pub fn begin(&self, session: &Session) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(session).map_err(StorageError::Serialize)?;
        persist::write_locked(&self.path, content.as_bytes())?;
        debug!(user = session.username(), "Session started");
        Ok(())
    }

    /// Clear the active session. Returns the session that was active.
    pub fn end(&self) -> Result<Option<Session>, StorageError> {
        let previous = self.current()?;
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(StorageError::Write {
                    path: self.path.clone(),
                    source,
                });
            }
        }
        if let Some(session) = &previous {
            debug!(user = session.username(), "Session ended");
        }
        Ok(previous)
    }
}
