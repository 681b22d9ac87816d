//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the request authentication subsystem, as called by
//! the gateway once per inbound request.

use crate::domain::entities::RequestKind;
use crate::domain::errors::AuthError;
use shared_types::{Identifier, Request};
use std::collections::BTreeSet;

/// Primary request authentication API.
///
/// Implementations must be thread-safe (`Send + Sync`) and pure:
/// authentication is a synchronous, CPU-bound computation invoked in
/// parallel across many worker tasks, one per inbound request, with no
/// ordering guarantees between calls.
pub trait RequestAuthnApi: Send + Sync {
    /// Authenticate a request from its own signature fields.
    ///
    /// Extracts the signature material (single- or multi-signer form),
    /// builds the canonical payload, and verifies until `threshold`
    /// signatures pass. `None` means "verify all supplied signatures".
    ///
    /// On success, downstream authorization consumes the returned set of
    /// identifiers, not the full request.
    fn authenticate(
        &self,
        request: &Request,
        threshold: Option<usize>,
    ) -> Result<BTreeSet<Identifier>, AuthError>;

    /// Authenticate with an explicitly supplied `(identifier, signature)`
    /// pair, bypassing extraction.
    ///
    /// Fast path for callers that already pulled the pair out of band;
    /// everything after extraction behaves exactly like
    /// [`authenticate`](Self::authenticate).
    fn authenticate_as(
        &self,
        request: &Request,
        identifier: &Identifier,
        signature: &str,
        threshold: Option<usize>,
    ) -> Result<BTreeSet<Identifier>, AuthError>;

    /// Classify a request by its declared operation name.
    ///
    /// `None` for unknown operation names; never silently defaulted.
    fn classify(&self, request: &Request) -> Option<RequestKind>;
}
