//! Token generation configuration.
//!
//! An explicit five-field structure: the caller builds a fresh one per
//! request (typically deserialized from app settings plus resolved PEM
//! text) and the core never mutates or retains it. Serde names match
//! the wire-fixed interop spelling, which is also the spelling used in
//! missing-field errors.

use serde::Deserialize;

use crate::error::{JoseError, Result};

/// Per-request configuration for token generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    /// Merchant identifier, emitted as the `issued-by` header claim
    /// of both tokens and the `x-gl-merchantId` JWS header.
    pub merchant_id: String,
    /// Identifier of the recipient's encryption key (`kid` of the JWE).
    pub public_key_id: String,
    /// Identifier of the sender's signing key (`kid` of the JWS).
    pub private_key_id: String,
    /// Recipient public key as PEM text (SPKI or X.509 certificate).
    pub public_key_pem: String,
    /// Sender private key as PEM text (PKCS#8 or PKCS#1).
    pub private_key_pem: String,
}

impl TokenConfig {
    pub(crate) fn require_merchant_id(&self) -> Result<&str> {
        require(&self.merchant_id, "merchantId")
    }

    pub(crate) fn require_public_key_id(&self) -> Result<&str> {
        require(&self.public_key_id, "publicKeyId")
    }

    pub(crate) fn require_private_key_id(&self) -> Result<&str> {
        require(&self.private_key_id, "privateKeyId")
    }

    pub(crate) fn require_public_key_pem(&self) -> Result<&str> {
        require(&self.public_key_pem, "publicKeyPem")
    }

    pub(crate) fn require_private_key_pem(&self) -> Result<&str> {
        require(&self.private_key_pem, "privateKeyPem")
    }
}

// Whitespace-only counts as missing, matching the upstream checks.
fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(JoseError::MissingConfig(field))
    } else {
        Ok(value)
    }
}
