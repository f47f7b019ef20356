use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are split by cause so callers can log the reason,
/// but none of the variants should be shown to clients directly: the HTTP
/// boundary collapses all of them into a single generic message.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token algorithm is not allowed")]
    InvalidAlgorithm,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
