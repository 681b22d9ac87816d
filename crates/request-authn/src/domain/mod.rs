//! # Domain Layer
//!
//! Pure authentication logic with no I/O. Each module maps to one stage of
//! the authentication pipeline:
//!
//! - [`classifier`]: request kind classification and signature extraction
//! - [`canonical`]: deterministic byte form of the signed payload
//! - [`codec`]: transport text encoding of signatures and keys
//! - [`registry`]: two-tier verification-key resolution
//! - [`ed25519`]: the signature scheme primitive
//! - [`threshold`]: threshold accounting over a set of signatures

pub mod canonical;
pub mod classifier;
pub mod codec;
pub mod ed25519;
pub mod entities;
pub mod errors;
pub mod registry;
pub mod threshold;
