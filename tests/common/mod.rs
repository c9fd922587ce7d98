//! Shared test utilities for store-backed integration tests

#![allow(dead_code)]

use tempfile::TempDir;

use sporta::auth::{AuthGate, Credentials, PasswordHasher, Registration};
use sporta::session::Session;
use sporta::store::UserStore;

/// Low round count so hashing does not dominate test time
pub const TEST_ITERATIONS: u32 = 16;

/// A user store in a fresh temporary data directory
pub struct TestEnv {
    pub dir: TempDir,
    pub store: UserStore,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = UserStore::new(dir.path().join("user_data"));
        Self { dir, store }
    }

    pub fn gate(&self) -> AuthGate<'_> {
        AuthGate::new(&self.store, PasswordHasher::new(TEST_ITERATIONS))
    }

    /// Register `username` with password "pw123" and return the session
    pub fn register(&self, username: &str) -> Session {
        let (session, _) = self
            .gate()
            .register(&registration(username, "pw123", "pw123"))
            .expect("Registration should succeed");
        session
    }
}

pub fn registration(username: &str, password: &str, confirm: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: password.to_string(),
        confirm: confirm.to_string(),
    }
}

pub fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}
