//! # Identity Registry Resolution
//!
//! Resolves an identifier to its current public verification key across the
//! two ledger state tiers, plus the request-kind-specific override for
//! identities that are being created by the very request under
//! authentication.
//!
//! Resolution order, first match wins:
//!
//! 1. **Uncommitted tier**: identities created or rotated earlier in the
//!    same not-yet-finalized batch shadow their committed records.
//! 2. **Committed tier**: durable, consensus-finalized state.
//! 3. **Payload override**: an identity-creation request whose destination
//!    differs from the signer carries the destination's key inline.
//!
//! Purely read-only; safe to call concurrently against a stable snapshot.

use crate::domain::codec;
use crate::ports::outbound::IdentityStateView;
use shared_types::fields::{F_DEST, F_IDENTIFIER, F_VERKEY};
use shared_types::{operations, Identifier, Request, StateTier, VerificationKey};

/// How a verification key may be resolved outside the registry tiers.
///
/// A closed table keyed by operation name, so adding an override is a
/// compile-checked change here rather than a runtime shape test scattered
/// through the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOverride {
    /// The payload's `verkey` field holds the key for the `dest` identifier
    /// (target-specified self-registration).
    EmbeddedDestinationKey,
}

/// Look up the override strategy registered for an operation name.
pub fn key_override(operation: &str) -> Option<KeyOverride> {
    match operation {
        operations::IDENTITY_CREATE => Some(KeyOverride::EmbeddedDestinationKey),
        _ => None,
    }
}

/// Resolve the current verification key for `identifier`.
///
/// Returns `None` when no strategy yields a key. Callers must treat that as
/// "cannot authenticate", not as "authentication failed"; the distinction
/// is preserved by `AuthError::CouldNotAuthenticate`.
pub fn resolve_verkey<V>(
    identifier: &Identifier,
    request: &Request,
    view: &V,
) -> Option<VerificationKey>
where
    V: IdentityStateView + ?Sized,
{
    for tier in [StateTier::Uncommitted, StateTier::Committed] {
        if let Some(record) = view.get(identifier, tier) {
            return Some(record.verification_key);
        }
    }
    embedded_key(identifier, request)
}

/// Apply the payload override, if one is registered for the request's
/// operation and its structural condition holds.
fn embedded_key(identifier: &Identifier, request: &Request) -> Option<VerificationKey> {
    match key_override(&request.operation)? {
        KeyOverride::EmbeddedDestinationKey => {
            let dest = request.str_field(F_DEST)?;
            let signer = request.str_field(F_IDENTIFIER)?;
            // The key applies only to the destination being registered, and
            // only when the destination is not signing for itself.
            if dest != identifier.as_str() || dest == signer {
                return None;
            }
            let verkey = request.str_field(F_VERKEY)?;
            codec::decode_verkey(verkey).ok()
        }
    }
}
