//! # Structured Client Request
//!
//! The deserialized form of an inbound client request. Wire parsing is an
//! external collaborator; by the time a `Request` exists, transport framing
//! has already been stripped and the payload is a JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A structured client request as handed to the gateway.
///
/// The payload is an ordered map of fields. Signature material travels
/// inside the payload under the reserved field names in [`crate::fields`]:
/// either `identifier` + `sig` (single-signer form) or `sigs` (multi-signer
/// form, a map keyed by identifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Declared operation name; classified against [`crate::operations`].
    pub operation: String,
    /// The request fields, including the signature-bearing ones.
    pub payload: Map<String, Value>,
}

impl Request {
    /// Create a request with an empty payload.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            payload: Map::new(),
        }
    }

    /// Builder method to set a payload field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Look up a payload field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Look up a payload field that must be a string.
    ///
    /// Returns `None` both when the field is absent and when it holds a
    /// non-string value.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }
}
