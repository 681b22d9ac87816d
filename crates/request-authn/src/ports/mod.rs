//! # Ports Layer
//!
//! Trait definitions for the subsystem's boundaries: the inbound API the
//! gateway calls, and the outbound identity-state view the consensus layer
//! provides.

pub mod inbound;
pub mod outbound;
