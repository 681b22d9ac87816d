//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across the gateway
//! subsystems: client identities, identity-ledger records, the structured
//! client `Request`, and the reserved payload field names.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every cross-subsystem type is defined here.
//! - **Closed vocabularies**: request operation names are fixed constants
//!   registered per request kind, never free-form strings compared ad hoc.
//! - **No hidden state**: everything here is plain data; the identity ledger
//!   itself is owned by the state machine, not by these types.

pub mod entities;
pub mod fields;
pub mod operations;
pub mod request;

pub use entities::{Identifier, IdentityRecord, Role, StateTier, VerificationKey};
pub use request::Request;
