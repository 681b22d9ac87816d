//! # Operation Name Registry
//!
//! The closed vocabulary of request operation names, registered per request
//! kind. Gateway-side code and the request classifier both consult these
//! tables so the two can never drift apart.
//!
//! An operation name absent from every table is unknown; callers must handle
//! that case explicitly rather than defaulting it to any kind.

// =============================================================================
// WRITE OPERATIONS
// =============================================================================

/// Create a new identity (or rotate the key of an existing one).
pub const IDENTITY_CREATE: &str = "identity_create";

/// Attach an attribute to an existing identity.
pub const ATTRIB_WRITE: &str = "attrib_write";

/// Register a credential schema.
pub const SCHEMA_CREATE: &str = "schema_create";

/// Register a credential definition against a schema.
pub const CLAIM_DEF_CREATE: &str = "claim_def_create";

// =============================================================================
// QUERY OPERATIONS
// =============================================================================

/// Read an identity record.
pub const IDENTITY_READ: &str = "identity_read";

/// Read an attribute of an identity.
pub const ATTRIB_READ: &str = "attrib_read";

/// Read a credential schema.
pub const SCHEMA_READ: &str = "schema_read";

// =============================================================================
// ACTION OPERATIONS
// =============================================================================

/// Schedule a coordinated pool restart.
pub const POOL_RESTART: &str = "pool_restart";

/// Collect validator status information.
pub const VALIDATOR_INFO: &str = "validator_info";

// =============================================================================
// KIND TABLES
// =============================================================================

/// Operations that mutate ledger state.
pub const WRITE_OPERATIONS: [&str; 4] =
    [IDENTITY_CREATE, ATTRIB_WRITE, SCHEMA_CREATE, CLAIM_DEF_CREATE];

/// Operations that read ledger state.
pub const QUERY_OPERATIONS: [&str; 3] = [IDENTITY_READ, ATTRIB_READ, SCHEMA_READ];

/// Operations that drive node administration.
pub const ACTION_OPERATIONS: [&str; 2] = [POOL_RESTART, VALIDATOR_INFO];
