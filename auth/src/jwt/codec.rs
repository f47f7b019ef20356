use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Token codec for issuing and verifying signed identity tokens.
///
/// Uses HS256 (HMAC with SHA-256); tokens signed with any other algorithm
/// are rejected during verification regardless of their signature. The
/// signing secret and token lifetime are fixed at construction.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a new token codec with a secret key and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime stamped into every issued token
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a signed token for a user.
    ///
    /// Stamps `iat` with the current time and `exp` with the configured
    /// lifetime, so repeated calls produce distinct tokens.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `login` - User login embedded in the claims
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, user_id: i64, login: &str) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, login, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and extract its claims.
    ///
    /// Checks the signature, the signing algorithm, and expiration with
    /// zero leeway before any claim is trusted.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `Expired` - Token expiration instant has passed
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `InvalidAlgorithm` - Token was signed with a different algorithm
    /// * `Malformed` - Token structure or claims could not be parsed
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // A token expiring this exact second is already invalid
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm => TokenError::InvalidAlgorithm,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::new(SECRET, Duration::hours(24));

        let token = codec.issue(42, "alice").expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = codec.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.login, "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_verify_garbage_token() {
        let codec = TokenCodec::new(SECRET, Duration::hours(24));

        let err = codec.verify("invalid.token.here").unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let codec1 = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!", Duration::hours(24));
        let codec2 = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!", Duration::hours(24));

        let token = codec1.issue(42, "alice").expect("Failed to issue token");

        let err = codec2.verify(&token).unwrap_err();
        assert!(matches!(err, TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_expired_token() {
        // Negative lifetime produces a token that expired an hour ago
        let codec = TokenCodec::new(SECRET, Duration::hours(-1));

        let token = codec.issue(42, "alice").expect("Failed to issue token");

        let err = codec.verify(&token).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn test_verify_rejects_foreign_algorithm() {
        let codec = TokenCodec::new(SECRET, Duration::hours(24));

        // Same secret, same claims, but signed with HS384
        let claims = Claims::new(42, "alice", Duration::hours(24));
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        let err = codec.verify(&token).unwrap_err();
        assert!(matches!(err, TokenError::InvalidAlgorithm));
    }

    #[test]
    fn test_verify_rejects_swapped_payload() {
        let codec = TokenCodec::new(SECRET, Duration::hours(24));

        let token_a = codec.issue(1, "alice").expect("Failed to issue token");
        let token_b = codec.issue(2, "mallory").expect("Failed to issue token");

        let parts_a: Vec<&str> = token_a.split('.').collect();
        let parts_b: Vec<&str> = token_b.split('.').collect();
        let forged = format!("{}.{}.{}", parts_a[0], parts_b[1], parts_a[2]);

        let err = codec.verify(&forged).unwrap_err();
        assert!(matches!(err, TokenError::InvalidSignature));
    }
}
