//! Domain model for the user directory.
//!
//! # Responsibility
//! - Define the canonical `User` record shared by directory, view and shell.
//!
//! # Invariants
//! - `UserId` values are assigned by callers, never generated here.
//! - Field names on the wire are exactly `id`, `name`, `email`.

pub mod user;
