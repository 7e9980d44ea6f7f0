//! Orchestration: JWE over the payload, then JWS over the JWE.

use crate::config::TokenConfig;
use crate::error::Result;
use crate::jwe::generate_jwe;
use crate::jws::generate_jws;

/// The two compact serializations produced for one request.
///
/// The caller places `jwe` as the HTTP request body and `jws` as a
/// header value; this crate knows nothing about transport.
#[derive(Debug, Clone)]
pub struct TokenResult {
    /// Encrypted payload token (5-segment compact JWE).
    pub jwe: String,
    /// Signed digest token (3-segment compact JWS).
    pub jws: String,
}

/// Generates the JWE/JWS pair for one request.
///
/// The JWS digests the compact JWE string itself, not the plaintext
/// payload: the receiver verifies sender authenticity and blob
/// integrity cheaply, before paying for the RSA decryption.
///
/// # Errors
///
/// Propagates the first error from either step unchanged; no partial
/// result is ever returned.
pub fn generate_tokens(payload: &serde_json::Value, config: &TokenConfig) -> Result<TokenResult> {
    let jwe = generate_jwe(payload, config)?;
    let jws = generate_jws(&jwe, config)?;
    Ok(TokenResult { jwe, jws })
}
