//! Fuzz target for the signature text codec.
//!
//! The codec sits directly on the untrusted request surface, so it must
//! never panic, and every malformed input must map to the same typed error.
//!
//! ## Running
//!
//! ```bash
//! cd crates/request-authn
//! cargo +nightly fuzz run fuzz_decode_signature
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use request_authn::{decode_signature, decode_verkey, AuthError};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Decoding must be total and deterministic.
    let first = decode_signature(text);
    let second = decode_signature(text);
    assert_eq!(first, second);

    if let Err(err) = &first {
        assert_eq!(*err, AuthError::InvalidSignatureFormat);
    }

    // Key decoding additionally enforces length, never panics.
    if let Ok(key) = decode_verkey(text) {
        assert_eq!(key.as_bytes().len(), 32);
    }
});
