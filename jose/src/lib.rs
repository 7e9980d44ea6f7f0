//! PayGlocal JOSE token core.
//!
//! Builds the dual-token artifact the payment API expects: a JWE
//! (RSA-OAEP-256 + A128CBC-HS256) over the request payload, and a JWS
//! (RS256) whose payload is the SHA-256 digest of that JWE. Signing
//! the ciphertext digest lets the receiver authenticate the encrypted
//! blob before attempting the key-dependent decryption.
//!
//! Every operation is a stateless, synchronous function of its inputs
//! plus the wall clock: no shared state, no I/O, no retries. Keys are
//! re-imported from PEM on each call.
//!
//! ```no_run
//! use payglocal_jose::{generate_tokens, TokenConfig};
//! use serde_json::json;
//!
//! # fn main() -> payglocal_jose::Result<()> {
//! let config = TokenConfig {
//!     merchant_id: "mc1234".to_string(),
//!     public_key_id: "kid-encrypt".to_string(),
//!     private_key_id: "kid-sign".to_string(),
//!     public_key_pem: "...".to_string(),
//!     private_key_pem: "...".to_string(),
//! };
//! let tokens = generate_tokens(&json!({"amount": 100}), &config)?;
//! // tokens.jwe -> request body, tokens.jws -> x-gl-token-external header
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod header;
mod jwe;
mod jws;
mod token;

pub use config::TokenConfig;
pub use error::{JoseError, Result};
pub use header::{HeaderMap, HeaderValue};
pub use jwe::generate_jwe;
pub use jws::generate_jws;
pub use token::{generate_tokens, TokenResult};
