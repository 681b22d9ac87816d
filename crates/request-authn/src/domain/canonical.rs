//! # Canonical Payload Construction
//!
//! Derives the exact byte sequence a client signed: the request payload
//! with the signature-bearing fields stripped, serialized deterministically.
//!
//! Determinism is load-bearing. The same logical payload must produce
//! byte-identical output regardless of map insertion order, or every
//! signature over it would spuriously fail. Object keys are therefore
//! written in lexicographic order at every nesting level, with compact
//! separators and `serde_json`'s stable scalar encoding.

use serde_json::{Map, Value};

/// Build the canonical byte form of `payload`, excluding `exclude_keys`.
///
/// Only top-level keys are excluded; the signer signs everything else,
/// including nested structures verbatim. The caller's payload is not
/// mutated.
pub fn canonical_payload(payload: &Map<String, Value>, exclude_keys: &[&str]) -> Vec<u8> {
    let mut entries: Vec<(&String, &Value)> = payload
        .iter()
        .filter(|(key, _)| !exclude_keys.contains(&key.as_str()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = Vec::with_capacity(payload.len() * 16);
    out.push(b'{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        write_scalar(&Value::String((*key).clone()), &mut out);
        out.push(b':');
        write_value(value, &mut out);
    }
    out.push(b'}');
    out
}

/// Write one JSON value in canonical form.
fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push(b'{');
            for (i, (key, inner)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_scalar(&Value::String((*key).clone()), out);
                out.push(b':');
                write_value(inner, out);
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out);
            }
            out.push(b']');
        }
        scalar => write_scalar(scalar, out),
    }
}

/// Write a scalar (or string) through `serde_json` for stable escaping and
/// numeric formatting.
fn write_scalar(value: &Value, out: &mut Vec<u8>) {
    // Serializing a scalar JSON value into a Vec cannot fail.
    serde_json::to_writer(&mut *out, value)
        .expect("scalar JSON serialization into a Vec is infallible");
}
