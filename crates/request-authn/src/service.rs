//! # Request Authentication Service
//!
//! Application service layer that implements the [`RequestAuthnApi`] trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`RequestAuthnApi`)
//! - Uses the outbound port (`IdentityStateView`) for key resolution
//! - Delegates extraction, canonicalization, and threshold accounting to
//!   the domain layer
//!
//! The service adds no error handling of its own: the typed errors from
//! the domain stages propagate to the gateway unchanged. Its only side
//! effect is structured logging of the outcome.

use crate::domain::canonical;
use crate::domain::classifier;
use crate::domain::ed25519::{Ed25519Scheme, SignatureScheme};
use crate::domain::entities::RequestKind;
use crate::domain::errors::AuthError;
use crate::domain::threshold;
use crate::ports::inbound::RequestAuthnApi;
use crate::ports::outbound::IdentityStateView;
use shared_types::fields::SIGNATURE_FIELDS;
use shared_types::{Identifier, Request};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Request authentication service.
///
/// Holds the identity-state view and signature scheme by dependency
/// injection; there is no global registry, so concurrent calls share
/// nothing mutable and tests can substitute deterministic fixtures.
pub struct RequestAuthnService<V, S = Ed25519Scheme>
where
    V: IdentityStateView,
    S: SignatureScheme,
{
    view: V,
    scheme: S,
}

impl<V: IdentityStateView> RequestAuthnService<V> {
    /// Create a service verifying with Ed25519.
    pub fn new(view: V) -> Self {
        Self {
            view,
            scheme: Ed25519Scheme,
        }
    }
}

impl<V, S> RequestAuthnService<V, S>
where
    V: IdentityStateView,
    S: SignatureScheme,
{
    /// Create a service with a custom signature scheme.
    pub fn with_scheme(view: V, scheme: S) -> Self {
        Self { view, scheme }
    }

    /// Get a reference to the identity-state view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Canonicalize, verify, log, and return. Shared tail of both
    /// authentication entry points.
    fn verify(
        &self,
        request: &Request,
        signatures: BTreeMap<Identifier, String>,
        threshold: Option<usize>,
    ) -> Result<BTreeSet<Identifier>, AuthError> {
        let payload = canonical::canonical_payload(&request.payload, &SIGNATURE_FIELDS);

        let result = threshold::verify_threshold(
            &payload,
            &signatures,
            threshold,
            request,
            &self.view,
            &self.scheme,
        );

        match &result {
            Ok(verified) => {
                debug!(
                    operation = %request.operation,
                    signers = verified.len(),
                    "request authenticated"
                );
            }
            Err(error) => {
                warn!(
                    operation = %request.operation,
                    supplied = signatures.len(),
                    %error,
                    "request rejected"
                );
            }
        }

        result
    }
}

impl<V, S> RequestAuthnApi for RequestAuthnService<V, S>
where
    V: IdentityStateView,
    S: SignatureScheme,
{
    fn authenticate(
        &self,
        request: &Request,
        threshold: Option<usize>,
    ) -> Result<BTreeSet<Identifier>, AuthError> {
        let signatures = classifier::extract_signatures(request)?.into_map();
        self.verify(request, signatures, threshold)
    }

    fn authenticate_as(
        &self,
        request: &Request,
        identifier: &Identifier,
        signature: &str,
        threshold: Option<usize>,
    ) -> Result<BTreeSet<Identifier>, AuthError> {
        if identifier.is_empty() {
            return Err(AuthError::EmptyIdentifier);
        }
        if signature.is_empty() {
            return Err(AuthError::EmptySignature);
        }

        let mut signatures = BTreeMap::new();
        signatures.insert(identifier.clone(), signature.to_owned());
        self.verify(request, signatures, threshold)
    }

    fn classify(&self, request: &Request) -> Option<RequestKind> {
        classifier::classify(request)
    }
}

// =============================================================================
// TESTS
// =============================================================================
