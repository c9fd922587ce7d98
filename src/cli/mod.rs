//! CLI command implementations

pub mod account;
pub mod challenge;
pub mod init;
pub mod points;
pub mod profile;
pub mod result;
pub mod sync;

use std::path::Path;

use anyhow::Result;

use sporta::auth::AuthGate;
use sporta::config::Config;
use sporta::session::{Session, SessionStore};
use sporta::store::UserStore;
use sporta::AppError;

/// Everything a command needs: resolved config and the stores it points at
pub struct Context {
    pub config: Config,
    pub store: UserStore,
    pub sessions: SessionStore,
}

impl Context {
    /// Resolve config (explicit path, local, global, defaults) and apply overrides
    pub fn load(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let mut config = Config::load(config_path)?;
        if let Some(dir) = data_dir {
            config = config.with_data_dir(dir);
        }
        tracing::debug!(data_dir = %config.storage.data_dir.display(), "Resolved data directory");

        Ok(Self {
            store: config.user_store(),
            sessions: config.session_store(),
            config,
        })
    }

    pub fn gate(&self) -> AuthGate<'_> {
        AuthGate::new(&self.store, self.config.password_hasher())
    }

    /// The signed-in user's session, or `NotLoggedIn`
    pub fn require_session(&self) -> Result<Session> {
        match self.sessions.current()? {
            Some(session) => Ok(session),
            None => Err(AppError::NotLoggedIn.into()),
        }
    }
}
