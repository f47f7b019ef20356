use thiserror::Error;

/// Error type for login validation.
///
/// Display strings are part of the public API surface: handlers return them
/// verbatim to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("login must be at least 3 characters")]
    TooShort,

    #[error("login too long (max 50 characters)")]
    TooLong,

    #[error("login can contain only letters, numbers, underscores and hyphens")]
    InvalidCharacters,
}

/// Error type for password policy validation.
///
/// Display strings are returned verbatim to clients, same as [`LoginError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("password must be at least 6 characters")]
    TooShort,

    #[error("password too long (max 100 characters)")]
    TooLong,
}
