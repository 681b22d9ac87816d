//! # Signature Text Codec
//!
//! Decodes the transport-level text representation of signatures and
//! verification keys into raw bytes. Strict on purpose: every malformed
//! input (empty, wrong alphabet, bad padding, wrong key length) maps to
//! the same typed error, and verification is never invoked with
//! unvalidated bytes.

use crate::domain::errors::AuthError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use shared_types::entities::{VERIFICATION_KEY_LENGTH, VerificationKey};

/// Decode a text-encoded signature into raw bytes.
///
/// Length is not checked here; a decoded signature of the wrong length is
/// a cryptographic failure for that signer, not a protocol violation.
pub fn decode_signature(encoded: &str) -> Result<Vec<u8>, AuthError> {
    if encoded.is_empty() {
        return Err(AuthError::InvalidSignatureFormat);
    }
    BASE64
        .decode(encoded)
        .map_err(|_| AuthError::InvalidSignatureFormat)
}

/// Decode a text-encoded verification key embedded in a payload.
///
/// Unlike signatures, keys have exactly one valid length, so it is
/// enforced here.
pub fn decode_verkey(encoded: &str) -> Result<VerificationKey, AuthError> {
    let bytes = decode_signature(encoded)?;
    let raw: [u8; VERIFICATION_KEY_LENGTH] = bytes
        .try_into()
        .map_err(|_| AuthError::InvalidSignatureFormat)?;
    Ok(VerificationKey::from_bytes(raw))
}
