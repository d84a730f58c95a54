//! User domain record.
//!
//! # Responsibility
//! - Define the single entity this system manages.
//!
//! # Invariants
//! - `id` is externally assigned; this module never mints identifiers.
//! - The serialized shape (`id`, `name`, `email`) is a compatibility
//!   contract with existing callers and must not drift.

use serde::{Deserialize, Serialize};

/// External identifier for a user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

/// An identified person with a display name and contact email.
///
/// `name` is expected to be non-empty and `email` well-formed, but neither
/// is enforced here; validation is explicitly out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-assigned identifier, unique within one directory.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email, unvalidated.
    pub email: String,
}

impl User {
    /// Creates a user record from caller-supplied literal values.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
