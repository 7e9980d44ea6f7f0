//! Error handling for key import

use thiserror::Error;

/// Key import result type
pub type Result<T> = std::result::Result<T, KeyError>;

/// Key import errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// Input was empty or whitespace-only
    #[error("PEM must be a non-empty string")]
    EmptyPem,

    /// PEM envelope could not be parsed
    #[error("Invalid PEM format: {0}")]
    Pem(#[from] pem::PemError),

    /// No key block with a supported label was found
    #[error("No supported key block found in PEM input")]
    MissingBlock,

    /// PKCS#1 key body could not be parsed
    #[error("Invalid PKCS#1 key: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    /// PKCS#8 key body could not be parsed
    #[error("Invalid PKCS#8 key: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),

    /// SPKI public key body could not be parsed
    #[error("Invalid public key: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),

    /// X.509 certificate could not be parsed
    #[error("Invalid certificate: {0}")]
    Certificate(String),

    /// Certificate parsed but its subject key is not RSA
    #[error("Certificate does not contain an RSA public key")]
    NoRsaInCertificate,
}
