//! JWE construction: RSA-OAEP-256 key wrapping over A128CBC-HS256.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::RngCore;
use rsa::Oaep;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::config::TokenConfig;
use crate::error::{JoseError, Result};
use crate::header::HeaderMap;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type HmacSha256 = Hmac<Sha256>;

pub(crate) const JWE_ALG: &str = "RSA-OAEP-256";
pub(crate) const JWE_ENC: &str = "A128CBC-HS256";

/// JWE lifetime in milliseconds (`exp - iat`).
const TOKEN_TTL_MS: i64 = 30_000;

const CEK_SIZE: usize = 32;
const IV_SIZE: usize = 16;
const TAG_SIZE: usize = 16;

/// Generates a compact JWE over `payload` for the configured recipient.
///
/// The payload is serialized as-is (key order preserved, no
/// canonicalization), encrypted under a fresh content-encryption key,
/// and the CEK is wrapped with RSA-OAEP-SHA-256 under the recipient
/// public key. Output is the 5-segment compact serialization
/// `header.encryptedKey.iv.ciphertext.tag`.
///
/// # Errors
///
/// [`JoseError::MissingConfig`] when `merchantId`, `publicKeyId` or
/// `publicKeyPem` is empty (checked in that order),
/// [`JoseError::KeyFormat`] when the recipient PEM does not parse, and
/// [`JoseError::Encryption`] when a cryptographic step fails.
pub fn generate_jwe(payload: &serde_json::Value, config: &TokenConfig) -> Result<String> {
    let merchant_id = config.require_merchant_id()?;
    let public_key_id = config.require_public_key_id()?;
    let public_key_pem = config.require_public_key_pem()?;

    let public_key = payglocal_keys::import_public_key(public_key_pem)?;

    let iat = Utc::now().timestamp_millis();
    let exp = iat + TOKEN_TTL_MS;

    // iat/exp are string claims in the JWE header. The JWS payload
    // emits exp numerically; the asymmetry is what the verifier expects.
    let mut header = HeaderMap::new();
    header.insert("alg", JWE_ALG);
    header.insert("enc", JWE_ENC);
    header.insert("iat", iat.to_string());
    header.insert("exp", exp.to_string());
    header.insert("kid", public_key_id);
    header.insert("issued-by", merchant_id);
    let protected = URL_SAFE_NO_PAD.encode(header.to_json()?);

    let plaintext = serde_json::to_vec(payload)?;

    let mut rng = rand::thread_rng();
    let mut cek = [0_u8; CEK_SIZE];
    rng.fill_bytes(&mut cek);

    let encrypted_key = public_key
        .encrypt(&mut rng, Oaep::new::<Sha256>(), &cek)
        .map_err(|e| JoseError::Encryption(e.to_string()))?;

    let mut iv = [0_u8; IV_SIZE];
    rng.fill_bytes(&mut iv);

    // RFC 7518 5.2.3: MAC key is the first half of the CEK, AES key
    // the second half.
    let (mac_key, enc_key) = cek.split_at(CEK_SIZE / 2);

    let ciphertext = Aes128CbcEnc::new_from_slices(enc_key, &iv)
        .map_err(|e| JoseError::Encryption(e.to_string()))?
        .encrypt_padded_vec_mut::<Pkcs7>(&plaintext);

    let tag = authentication_tag(mac_key, protected.as_bytes(), &iv, &ciphertext)?;

    let token = [
        protected,
        URL_SAFE_NO_PAD.encode(&encrypted_key),
        URL_SAFE_NO_PAD.encode(iv),
        URL_SAFE_NO_PAD.encode(&ciphertext),
        URL_SAFE_NO_PAD.encode(&tag),
    ]
    .join(".");

    cek.zeroize();

    tracing::debug!(kid = public_key_id, "generated JWE");
    Ok(token)
}

// Encrypt-then-MAC over AAD || IV || ciphertext || AL, where AAD is
// the ASCII of the base64url header and AL its bit count as a 64-bit
// big-endian integer. The tag is the truncated first half of the MAC.
fn authentication_tag(mac_key: &[u8], aad: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        HmacSha256::new_from_slice(mac_key).map_err(|e| JoseError::Encryption(e.to_string()))?;
    mac.update(aad);
    mac.update(iv);
    mac.update(ciphertext);
    let aad_bits = (aad.len() as u64) * 8;
    mac.update(&aad_bits.to_be_bytes());
    Ok(mac.finalize().into_bytes()[..TAG_SIZE].to_vec())
}
