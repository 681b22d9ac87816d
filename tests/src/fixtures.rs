//! Test fixtures shared by the integration flows: an in-memory two-tier
//! identity ledger and client-side signing helpers.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::{Signer, SigningKey};
use rand::RngCore;
use request_authn::{canonical_payload, IdentityStateView};
use shared_types::fields::SIGNATURE_FIELDS;
use shared_types::{Identifier, IdentityRecord, Request, Role, StateTier, VerificationKey};
use std::collections::BTreeMap;

/// In-memory two-tier identity ledger.
///
/// Mimics the state machine's layered view: records land in the
/// uncommitted tier first and move to the committed tier on finalization.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    committed: BTreeMap<Identifier, IdentityRecord>,
    uncommitted: BTreeMap<Identifier, IdentityRecord>,
}

impl InMemoryLedger {
    /// Write a record straight into finalized state.
    pub fn commit(&mut self, record: IdentityRecord) {
        self.uncommitted.remove(&record.identifier);
        self.committed.insert(record.identifier.clone(), record);
    }

    /// Apply a record speculatively within the current batch.
    pub fn apply_uncommitted(&mut self, record: IdentityRecord) {
        self.uncommitted.insert(record.identifier.clone(), record);
    }

    /// Finalize the current batch: uncommitted records become committed.
    pub fn finalize_batch(&mut self) {
        let drained = std::mem::take(&mut self.uncommitted);
        self.committed.extend(drained);
    }
}

impl IdentityStateView for InMemoryLedger {
    fn get(&self, identifier: &Identifier, tier: StateTier) -> Option<IdentityRecord> {
        let records = match tier {
            StateTier::Committed => &self.committed,
            StateTier::Uncommitted => &self.uncommitted,
        };
        records.get(identifier).cloned()
    }
}

/// A client identity with signing capability.
pub struct Client {
    pub identifier: Identifier,
    signing_key: SigningKey,
}

impl Client {
    /// Generate a fresh client identity.
    pub fn generate(identifier: &str) -> Self {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        Self {
            identifier: Identifier::from(identifier),
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Rotate to a fresh signing key, returning the new ledger record.
    pub fn rotate_key(&mut self) -> IdentityRecord {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        self.signing_key = SigningKey::from_bytes(&seed);
        self.record()
    }

    /// The client's current verification key.
    pub fn verification_key(&self) -> VerificationKey {
        VerificationKey::from_bytes(self.signing_key.verifying_key().to_bytes())
    }

    /// The client's current verification key, text-encoded for a payload.
    pub fn encoded_verkey(&self) -> String {
        BASE64.encode(self.verification_key().as_bytes())
    }

    /// The client's ledger record, without a role.
    pub fn record(&self) -> IdentityRecord {
        IdentityRecord::new(self.identifier.clone(), self.verification_key())
    }

    /// The client's ledger record with a role.
    pub fn record_with_role(&self, role: Role) -> IdentityRecord {
        self.record().with_role(role)
    }

    /// Sign a request's canonical payload, returning the text encoding.
    pub fn sign(&self, request: &Request) -> String {
        let payload = canonical_payload(&request.payload, &SIGNATURE_FIELDS);
        BASE64.encode(self.signing_key.sign(&payload).to_bytes())
    }
}

/// Build the `sigs` payload field from identifier/signature pairs.
pub fn sigs_field(entries: &[(&Identifier, &str)]) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (identifier, signature) in entries {
        map.insert(
            identifier.as_str().to_owned(),
            serde_json::Value::from(*signature),
        );
    }
    serde_json::Value::Object(map)
}
