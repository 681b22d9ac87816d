//! Fuzz target for canonical payload construction.
//!
//! Canonicalization must be total over arbitrary JSON objects and must
//! produce byte-identical output on repeated application.
//!
//! ## Running
//!
//! ```bash
//! cd crates/request-authn
//! cargo +nightly fuzz run fuzz_canonical_payload
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use request_authn::canonical_payload;
use shared_types::fields::SIGNATURE_FIELDS;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let serde_json::Value::Object(payload) = value else {
        return;
    };

    let first = canonical_payload(&payload, &SIGNATURE_FIELDS);
    let second = canonical_payload(&payload, &SIGNATURE_FIELDS);
    assert_eq!(first, second);

    // The output must itself be valid JSON with the excluded fields gone.
    let reparsed: serde_json::Value =
        serde_json::from_slice(&first).expect("canonical output is valid JSON");
    let object = reparsed.as_object().expect("canonical output is an object");
    for field in SIGNATURE_FIELDS {
        assert!(!object.contains_key(field));
    }
});
