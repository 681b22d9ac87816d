//! Test fixtures: an in-memory two-tier identity-state view and a
//! call-counting signature scheme.

use crate::domain::ed25519::SignatureScheme;
use crate::ports::outbound::IdentityStateView;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use shared_types::{Identifier, IdentityRecord, StateTier, VerificationKey};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic two-tier registry fixture.
#[derive(Debug, Default)]
pub struct InMemoryStateView {
    committed: BTreeMap<Identifier, IdentityRecord>,
    uncommitted: BTreeMap<Identifier, IdentityRecord>,
}

impl InMemoryStateView {
    pub fn with_committed(mut self, record: IdentityRecord) -> Self {
        self.insert_committed(record);
        self
    }

    pub fn with_uncommitted(mut self, record: IdentityRecord) -> Self {
        self.uncommitted.insert(record.identifier.clone(), record);
        self
    }

    pub fn insert_committed(&mut self, record: IdentityRecord) {
        self.committed.insert(record.identifier.clone(), record);
    }
}

impl IdentityStateView for InMemoryStateView {
    fn get(&self, identifier: &Identifier, tier: StateTier) -> Option<IdentityRecord> {
        let records = match tier {
            StateTier::Committed => &self.committed,
            StateTier::Uncommitted => &self.uncommitted,
        };
        records.get(identifier).cloned()
    }
}

/// Scheme that accepts everything and counts how often it was invoked,
/// for asserting fail-fast and early-exit bounds.
#[derive(Debug, Default)]
pub struct CountingScheme {
    calls: AtomicUsize,
}

impl CountingScheme {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SignatureScheme for CountingScheme {
    fn verify(&self, _key: &VerificationKey, _message: &[u8], _signature: &[u8]) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        true
    }
}

/// Text-encode a verification key the way a payload would carry it.
pub fn encode_key(key: &VerificationKey) -> String {
    BASE64.encode(key.as_bytes())
}

/// Build the `sigs` payload field from identifier/signature pairs.
pub fn sigs_json(entries: &[(&Identifier, &str)]) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (identifier, signature) in entries {
        map.insert(
            identifier.as_str().to_owned(),
            serde_json::Value::from(*signature),
        );
    }
    serde_json::Value::Object(map)
}
