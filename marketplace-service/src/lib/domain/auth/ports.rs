use async_trait::async_trait;
use auth::Claims;
use auth::Login;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::User;

/// Port for authentication domain operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user from raw credentials.
    ///
    /// # Arguments
    /// * `login` - Raw login string (validated and trimmed internally)
    /// * `password` - Raw password (validated as supplied, never trimmed)
    ///
    /// # Returns
    /// Session with the created identity and a signed token
    ///
    /// # Errors
    /// * `InvalidLogin` / `InvalidPassword` - Credential rules violated
    /// * `UserAlreadyExists` - Login is already taken
    /// * `DatabaseError` - User lookup failed
    /// * `HashingFailed` - Password could not be hashed
    /// * `CreateUserFailed` - User row could not be stored
    /// * `TokenGenerationFailed` - Token could not be signed
    async fn register(&self, login: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Authenticate existing credentials.
    ///
    /// # Arguments
    /// * `login` - Login (trimmed before lookup)
    /// * `password` - Password, checked verbatim against the stored hash
    ///
    /// # Returns
    /// Session with the matched identity and a signed token
    ///
    /// # Errors
    /// * `MissingCredentials` - Empty login (after trimming) or password
    /// * `InvalidCredentials` - Unknown login or wrong password, one
    ///   indistinguishable message for both
    /// * `DatabaseError` - User lookup failed
    /// * `TokenGenerationFailed` - Token could not be signed
    async fn login(&self, login: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Any verification failure (expired, bad signature,
    ///   wrong algorithm, malformed); the cause is logged, not returned
    fn parse_token(&self, token: &str) -> Result<Claims, AuthError>;
}

/// Persistence operations for user credentials.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user with an already validated login and hashed password.
    ///
    /// # Arguments
    /// * `login` - Validated login value object
    /// * `password_hash` - PHC string digest, never the plaintext
    ///
    /// # Returns
    /// Created user with its assigned identifier
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed, login uniqueness
    ///   violations included
    async fn create(&self, login: &Login, password_hash: &str) -> Result<User, AuthError>;

    /// Retrieve a user by login.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AuthError>;
}
