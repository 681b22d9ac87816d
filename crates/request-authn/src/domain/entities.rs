//! # Domain Entities
//!
//! Call-scoped values produced and consumed during authentication. None of
//! these outlive the `authenticate` call that created them.

use shared_types::Identifier;
use std::collections::{BTreeMap, BTreeSet};

/// The kind of an inbound request, determined by its declared operation
/// name against the fixed registration tables in `shared_types::operations`.
///
/// Unknown operation names are deliberately not representable here; the
/// classifier returns `None` for them and the caller must handle that case
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Mutates ledger state; subject to write authorization downstream.
    Write,
    /// Reads ledger state.
    Query,
    /// Drives node administration.
    Action,
}

/// The signature material extracted from a request, in its wire form.
///
/// A request carries either a single `(identifier, signature)` pair or a
/// map of identifier to signature. The classifier produces this tagged
/// union so later stages never re-inspect raw payload fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureSet {
    /// Single-signer form: `identifier` + `sig` payload fields.
    Single {
        identifier: Identifier,
        signature: String,
    },
    /// Multi-signer form: the `sigs` payload field, keyed by identifier.
    Multi(BTreeMap<Identifier, String>),
}

impl SignatureSet {
    /// Flatten into the map form consumed by the threshold verifier.
    pub fn into_map(self) -> BTreeMap<Identifier, String> {
        match self {
            Self::Single {
                identifier,
                signature,
            } => {
                let mut map = BTreeMap::new();
                map.insert(identifier, signature);
                map
            }
            Self::Multi(map) => map,
        }
    }

    /// Number of signatures carried.
    pub fn len(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Multi(map) => map.len(),
        }
    }

    /// Whether no signatures are carried (only possible in the multi form).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-call accounting of which signatures verified and which did not.
///
/// Produced per authentication call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Identifiers whose signatures verified against the canonical payload.
    pub verified: BTreeSet<Identifier>,
    /// Identifiers whose signatures failed cryptographic verification,
    /// with the offending text-encoded signatures.
    pub failed: BTreeMap<Identifier, String>,
}

impl VerificationOutcome {
    /// Record a successful verification.
    pub fn record_verified(&mut self, identifier: Identifier) {
        self.verified.insert(identifier);
    }

    /// Record a failed verification.
    pub fn record_failed(&mut self, identifier: Identifier, signature: String) {
        self.failed.insert(identifier, signature);
    }
}
