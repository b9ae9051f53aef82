//! Input validation functions
//!
//! Presence and shape checks for credentials, applied at the service
//! boundary before anything touches the credential store.

use crate::errors::ValidationError;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Longest accepted username
pub const MAX_USERNAME_LEN: usize = 64;

/// Longest accepted password (argon2 cost grows with input)
pub const MAX_PASSWORD_LEN: usize = 128;

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s").expect("static regex"))
}

/// Validate a username for sign-up or sign-in
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Missing { field: "username" });
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username",
            max: MAX_USERNAME_LEN,
        });
    }
    if whitespace().is_match(username) {
        return Err(ValidationError::Whitespace { field: "username" });
    }
    Ok(())
}

/// Validate a plaintext password
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Missing { field: "password" });
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(ValidationError::TooLong {
            field: "password",
            max: MAX_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Presence-only check for sign-in
///
/// Anything beyond presence is left to the credential check, so a
/// malformed guess fails the same way as a wrong one.
pub fn validate_present(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Missing { field: "username" });
    }
    if password.is_empty() {
        return Err(ValidationError::Missing { field: "password" });
    }
    Ok(())
}

/// Validate a full credential pair, username first
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    validate_username(username)?;
    validate_password(password)
}
