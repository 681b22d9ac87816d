//! # Reserved Payload Field Names
//!
//! Field names inside a request payload that carry transport-level material
//! rather than operation data. The signature-bearing fields listed in
//! [`SIGNATURE_FIELDS`] are exactly the set excluded from the canonical
//! payload before verification; the two uses must stay in lock-step.

/// The identifier of the signer in the single-signer form.
pub const F_IDENTIFIER: &str = "identifier";

/// Single-signer signature, text-encoded.
pub const F_SIG: &str = "sig";

/// Multi-signer signatures: a map of identifier to text-encoded signature.
pub const F_SIGS: &str = "sigs";

/// Fee payment material, not covered by the request signature.
pub const F_FEES: &str = "fees";

/// Destination identifier of an identity-creation request.
pub const F_DEST: &str = "dest";

/// Verification key embedded in an identity-creation payload.
pub const F_VERKEY: &str = "verkey";

/// Fields stripped from the payload before canonical serialization.
///
/// Anything listed here is transport material the signer did not sign over.
pub const SIGNATURE_FIELDS: [&str; 3] = [F_SIG, F_SIGS, F_FEES];
