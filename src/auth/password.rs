//! Salted password hashing
//!
//! Credentials are stored as `pbkdf2-sha256$<iterations>$<salt>$<hash>` with
//! standard base64 for the salt and the derived key.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::error::AppError;

const SCHEME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Default PBKDF2 rounds for new credentials
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Hashes new passwords and verifies stored credentials
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    iterations: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    /// Encode `password` with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let mut salt = [0u8; SALT_LEN];
        getrandom::getrandom(&mut salt)?;
        let key = derive_key(password, &salt, self.iterations);
        Ok(format!(
            "{}${}${}${}",
            SCHEME,
            self.iterations,
            B64.encode(salt),
            B64.encode(key)
        ))
    }

    /// Check `password` against a stored credential.
    ///
    /// Values without the scheme prefix are legacy plaintext and compared as is.
    /// Unparseable encoded values never match.
    pub fn verify(&self, stored: &str, password: &str) -> bool {
        let Some(encoded) = stored
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix('$'))
        else {
            return stored == password;
        };

        let mut parts = encoded.splitn(3, '$');
        let (Some(iterations), Some(salt), Some(hash)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        let Ok(iterations) = iterations.parse::<u32>() else {
            return false;
        };
        let (Ok(salt), Ok(expected)) = (B64.decode(salt), B64.decode(hash)) else {
            return false;
        };

        let key = derive_key(password, &salt, iterations.max(1));
        constant_time_eq(&key, &expected)
    }
}

/// Whether a stored credential uses the hashed encoding
pub fn is_hashed(stored: &str) -> bool {
    stored.starts_with(SCHEME)
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
