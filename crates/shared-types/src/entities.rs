//! # Core Domain Entities
//!
//! Identity-ledger entities consumed by the gateway subsystems.
//!
//! ## Clusters
//!
//! - **Identity**: `Identifier`, `VerificationKey`, `Role`, `IdentityRecord`
//! - **Ledger state**: `StateTier`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

/// Length in bytes of an Ed25519 verification key.
pub const VERIFICATION_KEY_LENGTH: usize = 32;

/// Length in bytes of an Ed25519 signature.
pub const SIGNATURE_LENGTH: usize = 64;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// An opaque string naming a client identity (a DID-like value).
///
/// Globally unique within the ledger's identity namespace. The identifier
/// itself carries no key material; keys are versioned by ledger state and
/// rotate independently of the identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An Ed25519 public verification key bound to exactly one identifier at a
/// given point in ledger history.
///
/// Keys are mutable over time (key rotation), so a key is implicitly
/// versioned by ledger state, not by the identifier it belongs to.
#[serde_as]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKey {
    #[serde_as(as = "Bytes")]
    bytes: [u8; VERIFICATION_KEY_LENGTH],
}

impl VerificationKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; VERIFICATION_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; VERIFICATION_KEY_LENGTH] {
        &self.bytes
    }
}

/// Ledger role granted to an identity when it was written.
///
/// Roles are consumed by downstream authorization (write permission checks),
/// not by authentication itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Genesis-level administrator of the identity namespace.
    Trustee,
    /// Operator of a validator node.
    Steward,
    /// May endorse write transactions on behalf of other identities.
    Endorser,
}

/// A single identity's entry in the ledger.
///
/// Created when an identity-creation transaction is committed, mutated by
/// key-rotation transactions, never physically deleted (superseded instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// The identity this record belongs to.
    pub identifier: Identifier,
    /// The identity's current public verification key.
    pub verification_key: VerificationKey,
    /// Optional ledger role, consumed by downstream authorization.
    pub role: Option<Role>,
}

impl IdentityRecord {
    /// Create a record with no role.
    pub fn new(identifier: Identifier, verification_key: VerificationKey) -> Self {
        Self {
            identifier,
            verification_key,
            role: None,
        }
    }

    /// Builder method to set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

// =============================================================================
// CLUSTER B: LEDGER STATE
// =============================================================================

/// The two tiers of identity-ledger state visible to the gateway.
///
/// The registry is queried as a layered view: `Uncommitted` overrides
/// `Committed` when both contain an identifier, because a request may
/// reference an identity created earlier in the same in-flight batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateTier {
    /// Durable, consensus-finalized state.
    Committed,
    /// State applied speculatively within the batch currently being built;
    /// may be rolled back.
    Uncommitted,
}
