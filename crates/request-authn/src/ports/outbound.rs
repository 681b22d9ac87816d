//! # Outbound Ports (Driven Ports / SPI)
//!
//! The identity-state view is the only dependency this subsystem consumes.
//! It is owned and mutated exclusively by the consensus/state-machine
//! component; the authenticator holds a read-only handle for the duration
//! of one call.

use shared_types::{Identifier, IdentityRecord, StateTier};

/// Read-only view over the identity-ledger state tiers.
///
/// Implementations must present a single consistent snapshot per
/// authentication call: neither tier may be observed to change mid-call,
/// and the uncommitted tier must reflect exactly the batch state at call
/// start. That discipline belongs to the state machine (versioned overlay,
/// copy-on-write); the authenticator itself performs no locking.
pub trait IdentityStateView: Send + Sync {
    /// Look up an identifier in the given state tier.
    fn get(&self, identifier: &Identifier, tier: StateTier) -> Option<IdentityRecord>;
}
