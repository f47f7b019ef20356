use std::fmt;

use crate::credentials::errors::LoginError;

/// Login value type
///
/// Ensures a login is 3-50 characters and contains only ASCII alphanumeric,
/// underscore, and hyphen. Surrounding whitespace is stripped before
/// validation, so `"  alice  "` and `"alice"` name the same account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 50;

    /// Create a new valid login.
    ///
    /// Validates length and character constraints on the trimmed input.
    ///
    /// # Arguments
    /// * `login` - Raw login string
    ///
    /// # Returns
    /// Validated Login value object
    ///
    /// # Errors
    /// * `TooShort` - Login shorter than 3 characters after trimming
    /// * `TooLong` - Login longer than 50 characters
    /// * `InvalidCharacters` - Contains characters outside ASCII alphanumeric, `_`, `-`
    pub fn new(login: &str) -> Result<Self, LoginError> {
        let login = login.trim();
        let login = Self::with_valid_length(login)?;
        let login = Self::with_valid_chars(login)?;
        Ok(Self(login.to_owned()))
    }

    fn with_valid_length(login: &str) -> Result<&str, LoginError> {
        let length = login.len();
        if length < Self::MIN_LENGTH {
            Err(LoginError::TooShort)
        } else if length > Self::MAX_LENGTH {
            Err(LoginError::TooLong)
        } else {
            Ok(login)
        }
    }

    fn with_valid_chars(login: &str) -> Result<&str, LoginError> {
        if login
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            Ok(login)
        } else {
            Err(LoginError::InvalidCharacters)
        }
    }

    /// Get login as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value object and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_logins() {
        for login in ["testuser", "test123", "test_user", "test-user", "abc"] {
            assert!(
                Login::new(login).is_ok(),
                "expected {:?} to be valid",
                login
            );
        }
    }

    #[test]
    fn test_boundary_lengths() {
        assert!(Login::new(&"a".repeat(3)).is_ok());
        assert!(Login::new(&"a".repeat(50)).is_ok());
        assert_eq!(Login::new(&"a".repeat(2)), Err(LoginError::TooShort));
        assert_eq!(Login::new(&"a".repeat(51)), Err(LoginError::TooLong));
    }

    #[test]
    fn test_empty_login() {
        assert_eq!(Login::new(""), Err(LoginError::TooShort));
        assert_eq!(Login::new("   "), Err(LoginError::TooShort));
    }

    #[test]
    fn test_invalid_characters() {
        for login in ["user@domain.com", "test user", "user!", "na/me", "тест"] {
            assert_eq!(
                Login::new(login),
                Err(LoginError::InvalidCharacters),
                "expected {:?} to be rejected",
                login
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let login = Login::new("  alice  ").expect("trimmed login should be valid");
        assert_eq!(login.as_str(), "alice");

        // Trimming happens before the length check
        assert_eq!(Login::new("  ab  "), Err(LoginError::TooShort));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LoginError::TooShort.to_string(),
            "login must be at least 3 characters"
        );
        assert_eq!(
            LoginError::TooLong.to_string(),
            "login too long (max 50 characters)"
        );
        assert_eq!(
            LoginError::InvalidCharacters.to_string(),
            "login can contain only letters, numbers, underscores and hyphens"
        );
    }
}
