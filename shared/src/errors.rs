//! Error types for the Hoot application

use thiserror::Error;

/// Credential input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must not contain whitespace")]
    Whitespace { field: &'static str },
}

/// Authentication error kinds, as seen by API clients
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username already taken")]
    DuplicateUsername,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing or invalid bearer token")]
    Unauthenticated,

    #[error("Not allowed to access this resource")]
    Forbidden,
}
