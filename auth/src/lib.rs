//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Credential validation (login and password rules)
//! - Password hashing (Argon2id)
//! - Signed token issuance and verification
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Credential Validation
//! ```
//! use auth::Login;
//!
//! let login = Login::new("  alice  ").unwrap();
//! assert_eq!(login.as_str(), "alice");
//!
//! assert!(Login::new("a").is_err());
//! assert!(Login::new("no spaces allowed").is_err());
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = codec.issue(42, "alice").unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.user_id, 42);
//! assert_eq!(claims.login, "alice");
//! ```

pub mod credentials;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use credentials::validate_password;
pub use credentials::Login;
pub use credentials::LoginError;
pub use credentials::PasswordPolicyError;
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
