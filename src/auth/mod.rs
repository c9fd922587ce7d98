//! Registration and login
//!
//! The gate decides whether a user may proceed: registration writes a new
//! record that already carries the welcome award, login checks the stored
//! credential.
//! Both hand back a [`Session`] on success.

mod password;

pub use password::{is_hashed, PasswordHasher, DEFAULT_ITERATIONS};

use tracing::{info, warn};

use crate::activity::rewards::{titles, Rewards};
use crate::domain::{validate_username, UserRecord};
use crate::error::{AppError, Result, StorageError, ValidationError};
use crate::session::Session;
use crate::store::UserStore;

/// Registration form as entered
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Login form as entered
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Gatekeeper in front of the user store
#[derive(Debug, Clone)]
pub struct AuthGate<'a> {
    store: &'a UserStore,
    hasher: PasswordHasher,
}

impl<'a> AuthGate<'a> {
    pub fn new(store: &'a UserStore, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Create an account and sign it in.
    ///
    /// Inputs are trimmed. Blank fields, mismatched passwords, unusable or
    /// taken usernames are rejected before anything is written.
    pub fn register(&self, form: &Registration) -> Result<(Session, UserRecord)> {
        let username = form.username.trim();
        let email = form.email.trim();
        let password = form.password.trim();
        let confirm = form.confirm.trim();

        for (field, value) in [
            ("username", username),
            ("email", email),
            ("password", password),
            ("password confirmation", confirm),
        ] {
            if value.is_empty() {
                return Err(ValidationError::BlankField(field).into());
            }
        }
        if password != confirm {
            return Err(ValidationError::PasswordMismatch.into());
        }
        validate_username(username)?;
        if self.store.exists(username)? {
            return Err(ValidationError::DuplicateUser(username.to_string()).into());
        }

        let credential = self.hasher.hash(password)?;
        let mut record = UserRecord::new(username, email, credential);
        record.award_achievement(
            titles::WELCOME,
            titles::WELCOME_DESCRIPTION,
            Rewards::REGISTRATION,
        );

        self.store.create(&record).map_err(|e| match e {
            StorageError::AlreadyExists(name) => ValidationError::DuplicateUser(name).into(),
            other => AppError::from(other),
        })?;

        info!(user = username, points = record.points(), "Registered new user");
        Ok((Session::start(username), record))
    }

    /// Sign in with a username and password.
    ///
    /// An unknown user and a wrong password produce the same error.
    pub fn login(&self, credentials: &Credentials) -> Result<Session> {
        let username = credentials.username.trim();
        let password = credentials.password.trim();

        if username.is_empty() {
            return Err(ValidationError::BlankField("username").into());
        }
        if password.is_empty() {
            return Err(ValidationError::BlankField("password").into());
        }

        // A name that cannot be a key cannot have a record either
        let record = match self.store.load(username) {
            Ok(record) => record,
            Err(StorageError::InvalidKey(_)) => None,
            Err(e) => return Err(e.into()),
        };

        match record {
            Some(record) if self.hasher.verify(record.password(), password) => {
                info!(user = username, "User logged in");
                Ok(Session::start(username))
            }
            _ => {
                warn!(user = username, "Rejected login");
                Err(AppError::Authentication)
            }
        }
    }
}
