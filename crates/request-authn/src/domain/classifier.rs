//! # Request Classification and Signature Extraction
//!
//! Categorizes a request by its declared operation name and extracts its
//! signature material, enforcing the structural invariants before any
//! verification begins. A request with no signature material at all is
//! rejected here, before any payload work.

use crate::domain::entities::{RequestKind, SignatureSet};
use crate::domain::errors::AuthError;
use serde_json::Value;
use shared_types::fields::{F_IDENTIFIER, F_SIG, F_SIGS};
use shared_types::{operations, Identifier, Request};
use std::collections::BTreeMap;

/// Classify a request by its declared operation name.
///
/// Returns `None` for unknown names; the caller decides what to do with
/// those. They are never silently defaulted to a kind.
pub fn classify(request: &Request) -> Option<RequestKind> {
    let operation = request.operation.as_str();
    if operations::WRITE_OPERATIONS.contains(&operation) {
        Some(RequestKind::Write)
    } else if operations::QUERY_OPERATIONS.contains(&operation) {
        Some(RequestKind::Query)
    } else if operations::ACTION_OPERATIONS.contains(&operation) {
        Some(RequestKind::Action)
    } else {
        None
    }
}

/// Extract the request's signature material.
///
/// The single-signer form (`sig` field) requires the `identifier` field to
/// be present and non-empty; the multi-signer form (`sigs` field) arrives
/// pre-keyed by identifier and is taken as-is. A request carrying neither
/// field, or an empty `sigs` map, fails with
/// [`AuthError::MissingSignature`].
pub fn extract_signatures(request: &Request) -> Result<SignatureSet, AuthError> {
    if let Some(value) = request.field(F_SIG) {
        return extract_single(request, value);
    }
    if let Some(value) = request.field(F_SIGS) {
        return extract_multi(value);
    }
    Err(AuthError::MissingSignature)
}

fn extract_single(request: &Request, sig: &Value) -> Result<SignatureSet, AuthError> {
    // A non-string signature value carries no usable signature.
    let signature = sig.as_str().ok_or(AuthError::MissingSignature)?;
    if signature.is_empty() {
        return Err(AuthError::EmptySignature);
    }

    let identifier = match request.field(F_IDENTIFIER) {
        None => return Err(AuthError::MissingIdentifier),
        Some(value) => value.as_str().ok_or(AuthError::MissingIdentifier)?,
    };
    if identifier.is_empty() {
        return Err(AuthError::EmptyIdentifier);
    }

    Ok(SignatureSet::Single {
        identifier: Identifier::from(identifier),
        signature: signature.to_owned(),
    })
}

fn extract_multi(sigs: &Value) -> Result<SignatureSet, AuthError> {
    let entries = sigs.as_object().ok_or(AuthError::MissingSignature)?;
    if entries.is_empty() {
        return Err(AuthError::MissingSignature);
    }

    let mut map = BTreeMap::new();
    for (identifier, signature) in entries {
        // Entries come pre-structured; a non-string signature is a
        // protocol violation, same as undecodable text.
        let signature = signature
            .as_str()
            .ok_or(AuthError::InvalidSignatureFormat)?;
        map.insert(Identifier::from(identifier.as_str()), signature.to_owned());
    }
    Ok(SignatureSet::Multi(map))
}
