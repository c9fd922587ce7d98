//! Username rules
//!
//! A username is also the file stem of the user's record, so anything that
//! could escape the data directory or collide with bookkeeping files is
//! rejected.

use crate::error::ValidationError;

/// Longest accepted username, in characters
pub const MAX_USERNAME_LEN: usize = 64;

/// Check that a (trimmed) username is usable as a storage key
pub fn validate_username(name: &str) -> Result<(), ValidationError> {
    let invalid = |reason| ValidationError::InvalidUsername {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(ValidationError::BlankField("username"));
    }
    if name.chars().count() > MAX_USERNAME_LEN {
        return Err(invalid("too long"));
    }
    if name.starts_with('.') {
        return Err(invalid("must not start with '.'"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("must not contain path separators"));
    }
    if name.chars().any(char::is_control) {
        return Err(invalid("must not contain control characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(validate_username("anna").is_ok());
        assert!(validate_username("Jānis Bērziņš").is_ok());
        assert!(validate_username("runner_42").is_ok());
    }

    #[test]
    fn rejects_names_that_escape_the_data_dir() {
        for name in ["../etc", "a/b", "a\\b", ".session", "..", "nul\0byte"] {
            assert!(
                matches!(
                    validate_username(name),
                    Err(ValidationError::InvalidUsername { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_blank_and_overlong() {
        assert_eq!(
            validate_username(""),
            Err(ValidationError::BlankField("username"))
        );
        let long = "x".repeat(MAX_USERNAME_LEN + 1);
        assert!(validate_username(&long).is_err());
    }
}
