//! Error handling for token generation

use thiserror::Error;

/// Token generation result type
pub type Result<T> = std::result::Result<T, JoseError>;

/// Token generation errors
#[derive(Debug, Error)]
pub enum JoseError {
    /// A required configuration field is missing or empty.
    /// Carries the interop field name (`merchantId`, `publicKeyId`, ...)
    /// so the caller can log it verbatim.
    #[error("Missing required configuration field: {0}")]
    MissingConfig(&'static str),

    /// Key material could not be imported
    #[error(transparent)]
    KeyFormat(#[from] payglocal_keys::KeyError),

    /// JWE key wrapping or content encryption failed
    #[error("JWE encryption failed: {0}")]
    Encryption(String),

    /// JWS signature generation failed
    #[error("JWS signing failed: {0}")]
    Signing(String),

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
