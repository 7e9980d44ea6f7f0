//! RSA key import from PEM text.
//!
//! The token core receives key material as raw PEM strings (resolved
//! from disk or environment by the caller) and needs a usable RSA key
//! handle per operation. This crate does the format normalization:
//! PKCS#1 and PKCS#8 private keys, SPKI public keys, and X.509
//! certificates carrying an RSA subject public key.
//!
//! Pure parsing — no filesystem, network, or environment access.

mod error;
mod import;

pub use error::{KeyError, Result};
pub use import::{import_private_key, import_public_key};

// Downstream callers hold these handles directly.
pub use rsa::{RsaPrivateKey, RsaPublicKey};
