//! # Authentication Errors
//!
//! The error taxonomy for request authentication. Three families:
//!
//! - **Structural**: the request is malformed before any cryptography runs
//!   (missing/empty fields, undecodable signature text). Deterministic and
//!   caller-fixable; never retried.
//! - **Insufficiency**: too few signatures supplied to possibly meet the
//!   threshold, or too few of the supplied signatures verified.
//! - **Resolution**: an identifier has no resolvable verification key by any
//!   lookup strategy. Distinct from a failed verification: the request could
//!   not be authenticated at all.

use shared_types::Identifier;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while authenticating a request.
///
/// All variants surface synchronously to the caller; none are retried
/// internally, since re-verifying the same input can never succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The request carries neither a single-signer nor a multi-signer field.
    #[error("request carries no signature")]
    MissingSignature,

    /// The signature field is present but empty.
    #[error("request signature field is empty")]
    EmptySignature,

    /// The single-signer form is missing its identifier field.
    #[error("request carries no signer identifier")]
    MissingIdentifier,

    /// The identifier field is present but empty.
    #[error("signer identifier field is empty")]
    EmptyIdentifier,

    /// A signature is not valid text-encoded data.
    ///
    /// This aborts the whole call rather than counting as a failed
    /// signature: a structurally invalid signature indicates a malformed
    /// request, not a forged one.
    #[error("signature is not valid base64-encoded data")]
    InvalidSignatureFormat,

    /// Too few signatures supplied to possibly meet the threshold.
    ///
    /// Raised before any cryptographic work is done.
    #[error("{supplied} signature(s) supplied where {required} are required")]
    InsufficientSignatures { supplied: usize, required: usize },

    /// Enough signatures were supplied, but not enough verified.
    ///
    /// Carries the partial breakdown so the caller can produce an
    /// actionable diagnostic without re-running verification.
    #[error("{verified} of {required} required signatures verified")]
    InsufficientCorrectSignatures {
        required: usize,
        verified: usize,
        /// The identifiers whose signatures failed, with the offending
        /// text-encoded signatures.
        failed: BTreeMap<Identifier, String>,
    },

    /// No verification key is resolvable for the identifier by any of the
    /// lookup strategies (committed tier, uncommitted tier, payload
    /// override).
    #[error("no verification key resolvable for {identifier}")]
    CouldNotAuthenticate { identifier: Identifier },
}
