//! JWS construction: RS256 over a SHA-256 digest claim.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use chrono::Utc;
use rsa::pkcs1v15::SigningKey;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::TokenConfig;
use crate::error::{JoseError, Result};
use crate::header::HeaderMap;

pub(crate) const JWS_ALG: &str = "RS256";

/// JWS lifetime in milliseconds (`exp - iat`).
const TOKEN_TTL_MS: i64 = 300_000;

const DIGEST_ALGORITHM: &str = "SHA-256";

// `exp` is numeric while `iat` is a string; the verifying party
// expects exactly this shape.
#[derive(Debug, Serialize)]
struct DigestClaims<'a> {
    digest: &'a str,
    #[serde(rename = "digestAlgorithm")]
    digest_algorithm: &'static str,
    exp: i64,
    iat: String,
}

/// Generates a compact JWS whose payload carries the SHA-256 digest of
/// `to_digest`.
///
/// The digest claim uses standard (padded) base64, unlike the url-safe
/// token segments. The empty string is a valid input and digests to
/// the SHA-256 empty-message constant. Output is the 3-segment compact
/// serialization `header.payload.signature`.
///
/// # Errors
///
/// [`JoseError::MissingConfig`] when `merchantId`, `privateKeyId` or
/// `privateKeyPem` is empty (checked in that order),
/// [`JoseError::KeyFormat`] when the signer PEM does not parse, and
/// [`JoseError::Signing`] when signature generation fails.
pub fn generate_jws(to_digest: &str, config: &TokenConfig) -> Result<String> {
    let merchant_id = config.require_merchant_id()?;
    let private_key_id = config.require_private_key_id()?;
    let private_key_pem = config.require_private_key_pem()?;

    let iat = Utc::now().timestamp_millis();
    let exp = iat + TOKEN_TTL_MS;

    let digest = STANDARD.encode(Sha256::digest(to_digest.as_bytes()));

    let claims = DigestClaims {
        digest: &digest,
        digest_algorithm: DIGEST_ALGORITHM,
        exp,
        iat: iat.to_string(),
    };

    let mut header = HeaderMap::new();
    header.insert("alg", JWS_ALG);
    header.insert("issued-by", merchant_id);
    header.insert("kid", private_key_id);
    header.insert("x-gl-merchantId", merchant_id);
    // Literal strings, not booleans.
    header.insert("x-gl-enc", "true");
    header.insert("is-digested", "true");

    let private_key = payglocal_keys::import_private_key(private_key_pem)?;
    let signing_key = SigningKey::<Sha256>::new(private_key);

    let header_b64 = URL_SAFE_NO_PAD.encode(header.to_json()?);
    let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
    let signing_input = format!("{header_b64}.{payload_b64}");

    let signature = signature::Signer::try_sign(&signing_key, signing_input.as_bytes())
        .map_err(|e| JoseError::Signing(e.to_string()))?;
    let signature_bytes = signature::SignatureEncoding::to_bytes(&signature);

    tracing::debug!(kid = private_key_id, "generated JWS");
    Ok(format!(
        "{signing_input}.{}",
        URL_SAFE_NO_PAD.encode(signature_bytes)
    ))
}
