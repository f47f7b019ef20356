use auth::LoginError;
use auth::PasswordPolicyError;
use thiserror::Error;

/// Top-level error for all authentication operations.
///
/// Display strings are the exact texts returned to clients. Internal
/// variants deliberately carry fixed generic messages; the underlying
/// cause is logged where the error originates and never crosses the
/// wire. `DatabaseError` keeps the driver detail in its payload for
/// callers that want to inspect it, but renders generically.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Credential rule violations (automatically converted via #[from])
    #[error("{0}")]
    InvalidLogin(#[from] LoginError),

    #[error("{0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    // Domain-level errors
    #[error("login and password are required")]
    MissingCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("invalid login or password")]
    InvalidCredentials,

    #[error("invalid or expired token")]
    InvalidToken,

    // Infrastructure errors
    #[error("password hashing failed")]
    HashingFailed,

    #[error("failed to create user")]
    CreateUserFailed,

    #[error("failed to generate token")]
    TokenGenerationFailed,

    #[error("database error")]
    DatabaseError(String),
}
