//! # Threshold Verification
//!
//! Given a canonical payload and a set of `(identifier, signature)` pairs,
//! produce the set of identifiers whose signatures verify, or fail with a
//! precise account of why the threshold was not met.
//!
//! Pairs are processed in ascending identifier order. When more signatures
//! are supplied than the threshold requires, the credited set is therefore
//! deterministic rather than dependent on wire ordering.

use crate::domain::codec;
use crate::domain::ed25519::SignatureScheme;
use crate::domain::entities::VerificationOutcome;
use crate::domain::errors::AuthError;
use crate::domain::registry;
use crate::ports::outbound::IdentityStateView;
use shared_types::{Identifier, Request};
use std::collections::{BTreeMap, BTreeSet};

/// Verify signatures against `payload` until `threshold` of them pass.
///
/// The effective threshold defaults to the number of signatures supplied
/// ("verify all"). Behavior per pair:
///
/// - an undecodable signature aborts the whole call: a structurally
///   invalid signature is a protocol violation, not a forgery attempt;
/// - an unresolvable identifier aborts the whole call with
///   [`AuthError::CouldNotAuthenticate`];
/// - a cryptographically failing signature is recorded and skipped;
/// - once the verified set reaches the threshold, remaining pairs are not
///   examined at all, bounding worst-case verification cost.
pub fn verify_threshold<V, S>(
    payload: &[u8],
    signatures: &BTreeMap<Identifier, String>,
    threshold: Option<usize>,
    request: &Request,
    view: &V,
    scheme: &S,
) -> Result<BTreeSet<Identifier>, AuthError>
where
    V: IdentityStateView + ?Sized,
    S: SignatureScheme + ?Sized,
{
    let required = threshold.unwrap_or(signatures.len());

    if signatures.len() < required {
        return Err(AuthError::InsufficientSignatures {
            supplied: signatures.len(),
            required,
        });
    }
    if required == 0 {
        return Ok(BTreeSet::new());
    }

    let mut outcome = VerificationOutcome::default();

    for (identifier, encoded) in signatures {
        let raw = codec::decode_signature(encoded)?;

        let Some(key) = registry::resolve_verkey(identifier, request, view) else {
            return Err(AuthError::CouldNotAuthenticate {
                identifier: identifier.clone(),
            });
        };

        if scheme.verify(&key, payload, &raw) {
            outcome.record_verified(identifier.clone());
            if outcome.verified.len() == required {
                return Ok(outcome.verified);
            }
        } else {
            outcome.record_failed(identifier.clone(), encoded.clone());
        }
    }

    Err(AuthError::InsufficientCorrectSignatures {
        required,
        verified: outcome.verified.len(),
        failed: outcome.failed,
    })
}
