//! PEM label dispatch into RSA key handles.
//!
//! The verifying party hands out key material in whatever shape its
//! tooling produced, so import is lenient about envelopes: multi-block
//! PEM files are scanned in order and the first usable block wins.

use pem::parse_many;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use x509_cert::der::{DecodePem, Encode};
use x509_cert::Certificate;

use crate::error::{KeyError, Result};

const CERTIFICATE_MARKER: &str = "BEGIN CERTIFICATE";

/// Imports an RSA public key from PEM text.
///
/// Accepts an SPKI block (`PUBLIC KEY`), a PKCS#1 public block
/// (`RSA PUBLIC KEY`), an X.509 certificate, or a private-key block
/// whose public half is derived.
///
/// # Errors
///
/// Returns [`KeyError`] when the input is empty, carries no supported
/// block, or the block body fails to parse as RSA material.
pub fn import_public_key(pem_text: &str) -> Result<RsaPublicKey> {
    if pem_text.trim().is_empty() {
        return Err(KeyError::EmptyPem);
    }
    if pem_text.contains(CERTIFICATE_MARKER) {
        return public_key_from_certificate(pem_text);
    }
    for block in parse_many(pem_text)? {
        match block.tag() {
            "PUBLIC KEY" => return Ok(RsaPublicKey::from_public_key_der(block.contents())?),
            "RSA PUBLIC KEY" => return Ok(RsaPublicKey::from_pkcs1_der(block.contents())?),
            "RSA PRIVATE KEY" => {
                return Ok(RsaPrivateKey::from_pkcs1_der(block.contents())?.to_public_key());
            }
            "PRIVATE KEY" => {
                return Ok(RsaPrivateKey::from_pkcs8_der(block.contents())?.to_public_key());
            }
            _ => {}
        }
    }
    Err(KeyError::MissingBlock)
}

/// Imports an RSA private key from PEM text.
///
/// Accepts PKCS#1 (`RSA PRIVATE KEY`) and PKCS#8 (`PRIVATE KEY`)
/// blocks.
///
/// # Errors
///
/// Returns [`KeyError`] when the input is empty, carries no private
/// key block, or the block body fails to parse.
pub fn import_private_key(pem_text: &str) -> Result<RsaPrivateKey> {
    if pem_text.trim().is_empty() {
        return Err(KeyError::EmptyPem);
    }
    for block in parse_many(pem_text)? {
        match block.tag() {
            "RSA PRIVATE KEY" => return Ok(RsaPrivateKey::from_pkcs1_der(block.contents())?),
            "PRIVATE KEY" => return Ok(RsaPrivateKey::from_pkcs8_der(block.contents())?),
            _ => {}
        }
    }
    Err(KeyError::MissingBlock)
}

fn public_key_from_certificate(pem_text: &str) -> Result<RsaPublicKey> {
    let certificate = Certificate::from_pem(pem_text.as_bytes())
        .map_err(|e| KeyError::Certificate(e.to_string()))?;
    let spki_der = certificate
        .tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| KeyError::Certificate(e.to_string()))?;
    RsaPublicKey::from_public_key_der(&spki_der).map_err(|_| KeyError::NoRsaInCertificate)
}
