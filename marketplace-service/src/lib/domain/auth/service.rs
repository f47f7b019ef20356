use std::sync::Arc;

use async_trait::async_trait;
use auth::validate_password;
use auth::Claims;
use auth::Login;
use auth::TokenCodec;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::Identity;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserRepository;

/// Domain service implementation for authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Owns the password hasher and the token codec; the repository is the
/// only asynchronous collaborator.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
    token_codec: TokenCodec,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_codec` - Codec carrying the signing secret and token TTL
    pub fn new(repository: Arc<R>, token_codec: TokenCodec) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
            token_codec,
        }
    }

    fn issue_token(&self, user_id: i64, login: &str) -> Result<String, AuthError> {
        self.token_codec.issue(user_id, login).map_err(|e| {
            tracing::error!("Failed to generate token: {}", e);
            AuthError::TokenGenerationFailed
        })
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn register(&self, login: &str, password: &str) -> Result<AuthSession, AuthError> {
        let login = Login::new(login)?;
        validate_password(password)?;

        if self
            .repository
            .find_by_login(login.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = self.password_hasher.hash(password).map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            AuthError::HashingFailed
        })?;

        let user = self
            .repository
            .create(&login, &password_hash)
            .await
            .map_err(|_| AuthError::CreateUserFailed)?;

        let token = self.issue_token(user.id.0, &user.login)?;

        Ok(AuthSession {
            user: Identity {
                id: user.id,
                login: user.login,
            },
            token,
        })
    }

    async fn login(&self, login: &str, password: &str) -> Result<AuthSession, AuthError> {
        // Looser than register on purpose: any non-empty login may be
        // looked up, even one the current validator would reject
        let login = login.trim();
        if login.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = self
            .repository
            .find_by_login(login)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue_token(user.id.0, &user.login)?;

        Ok(AuthSession {
            user: Identity {
                id: user.id,
                login: user.login,
            },
            token,
        })
    }

    fn parse_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.token_codec.verify(token).map_err(|e| {
            tracing::debug!("Token verification failed: {}", e);
            AuthError::InvalidToken
        })
    }
}
