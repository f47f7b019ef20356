use std::fmt;

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Credential record as stored for a registered user.
///
/// The login is kept as a plain string here: rows written through
/// [`UserRepository::create`](crate::domain::auth::ports::UserRepository)
/// were validated at registration, and the login flow deliberately accepts
/// any non-empty login for lookup.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub login: String,
    pub password_hash: String,
}

/// Public user reference, safe to return to clients.
///
/// Contains no secret material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub login: String,
}

/// Outcome of a successful registration or login: the identity plus a
/// freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: Identity,
    pub token: String,
}
