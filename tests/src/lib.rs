//! # Ledger-Gate Test Suite
//!
//! Unified test crate for cross-subsystem flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs     # In-memory ledger and signing fixtures
//! └── integration.rs  # End-to-end authentication flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gate-tests
//! ```

pub mod fixtures;
