//! # Signature Scheme Primitive
//!
//! The single cryptographic operation the authenticator performs: checking
//! one signature over one payload with one verification key. Behind a trait
//! so tests can substitute a counting or fixed-answer scheme and so the
//! threshold logic stays free of curve arithmetic.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use shared_types::VerificationKey;

/// A signature verification primitive.
///
/// Implementations must be pure: no I/O, no interior mutability visible to
/// callers, safe to invoke concurrently.
pub trait SignatureScheme: Send + Sync {
    /// Check `signature` over `message` with `key`.
    ///
    /// Any defect (wrong signature length, a key that is not a valid curve
    /// point, or a genuine mismatch) yields `false`. Structural validation
    /// of the transport encoding happens earlier, in the codec.
    fn verify(&self, key: &VerificationKey, message: &[u8], signature: &[u8]) -> bool;
}

/// Ed25519 verification via `ed25519-dalek`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Scheme;

impl SignatureScheme for Ed25519Scheme {
    fn verify(&self, key: &VerificationKey, message: &[u8], signature: &[u8]) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(key.as_bytes()) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        verifying_key.verify(message, &signature).is_ok()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
