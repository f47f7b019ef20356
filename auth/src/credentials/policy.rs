use crate::credentials::errors::PasswordPolicyError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum accepted password length.
pub const MAX_PASSWORD_LENGTH: usize = 100;

/// Validate a plaintext password against the length policy.
///
/// The password is checked exactly as supplied: whitespace is significant
/// and no character restrictions apply beyond length.
///
/// # Arguments
/// * `password` - Plaintext password to check
///
/// # Errors
/// * `TooShort` - Password shorter than 6 characters
/// * `TooLong` - Password longer than 100 characters
pub fn validate_password(password: &str) -> Result<(), PasswordPolicyError> {
    let length = password.len();
    if length < MIN_PASSWORD_LENGTH {
        Err(PasswordPolicyError::TooShort)
    } else if length > MAX_PASSWORD_LENGTH {
        Err(PasswordPolicyError::TooLong)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_lengths() {
        assert_eq!(
            validate_password(&"a".repeat(5)),
            Err(PasswordPolicyError::TooShort)
        );
        assert!(validate_password(&"a".repeat(6)).is_ok());
        assert!(validate_password(&"a".repeat(100)).is_ok());
        assert_eq!(
            validate_password(&"a".repeat(101)),
            Err(PasswordPolicyError::TooLong)
        );
    }

    #[test]
    fn test_whitespace_is_significant() {
        // Unlike logins, passwords are never trimmed
        assert!(validate_password("      ").is_ok());
        assert!(validate_password("pass word").is_ok());
        assert_eq!(
            validate_password("  1  "),
            Err(PasswordPolicyError::TooShort)
        );
    }

    #[test]
    fn test_any_characters_allowed() {
        assert!(validate_password("p@$$w0rd!").is_ok());
        assert!(validate_password("пароль").is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PasswordPolicyError::TooShort.to_string(),
            "password must be at least 6 characters"
        );
        assert_eq!(
            PasswordPolicyError::TooLong.to_string(),
            "password too long (max 100 characters)"
        );
    }
}
