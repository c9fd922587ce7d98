//! Error taxonomy shared by the store, the auth gate and the activity mutators.

use std::path::PathBuf;

/// Input rejected before anything is read or written.
///
/// Every variant is recoverable: the user fixes the form and retries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields ({0} is empty)")]
    BlankField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Result must be a number, got {0:?}")]
    NotANumber(String),

    #[error("Unknown sport {0:?}")]
    UnknownSport(String),

    #[error("Invalid username {name:?}: {reason}")]
    InvalidUsername { name: String, reason: &'static str },

    #[error("User {0:?} already exists")]
    DuplicateUser(String),
}

/// Failures of the per-user file store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to lock {}: {source}", .path.display())]
    Lock {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed user record {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize user record: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("A record for {0:?} already exists")]
    AlreadyExists(String),

    #[error("{0:?} cannot be used as a storage key")]
    InvalidKey(String),
}

/// Umbrella error returned by user-facing operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown username and wrong password deliberately look the same.
    #[error("Incorrect username or password")]
    Authentication,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("No record found for user {0:?}")]
    RecordMissing(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to generate password salt: {0}")]
    Salt(#[from] getrandom::Error),
}

impl AppError {
    /// True for errors the user can fix by correcting their input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Authentication | AppError::NotLoggedIn
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_error_has_no_detail() {
        assert_eq!(
            AppError::Authentication.to_string(),
            "Incorrect username or password"
        );
    }

    #[test]
    fn validation_is_recoverable_storage_is_not() {
        let validation = AppError::from(ValidationError::PasswordMismatch);
        assert!(validation.is_recoverable());

        let storage = AppError::from(StorageError::AlreadyExists("anna".into()));
        assert!(!storage.is_recoverable());
    }
}
