//! # Request Authentication Subsystem
//!
//! Decides whether an inbound client request carries sufficient,
//! cryptographically valid authorization to be admitted into the
//! transaction-ordering pipeline.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): canonical payload construction, signature
//!   decoding, two-tier key resolution, and threshold verification. Pure
//!   logic, no I/O.
//! - **Ports Layer** (`ports/`): trait definitions for the inbound API and
//!   the identity-state view the consensus layer provides.
//! - **Service Layer** (`service.rs`): wires domain logic to ports.
//!
//! ## Security Notes
//!
//! - **No global state**: the identity-state view is dependency-injected;
//!   concurrent authentication calls never share mutable state.
//! - **Typed failure boundary**: "signature missing" (structural) and
//!   "signature invalid" (cryptographic) are distinct [`AuthError`]
//!   variants, so callers pattern-match instead of catching.
//! - **Bounded work**: verification stops as soon as the threshold is met.

pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export public API
pub use domain::canonical::canonical_payload;
pub use domain::classifier::{classify, extract_signatures};
pub use domain::codec::{decode_signature, decode_verkey};
pub use domain::ed25519::{Ed25519Scheme, SignatureScheme};
pub use domain::entities::{RequestKind, SignatureSet, VerificationOutcome};
pub use domain::errors::AuthError;
pub use domain::registry::resolve_verkey;
pub use domain::threshold::verify_threshold;
pub use ports::inbound::RequestAuthnApi;
pub use ports::outbound::IdentityStateView;
pub use service::RequestAuthnService;
