//! Directory layer: the authoritative in-memory user collection.
//!
//! # Responsibility
//! - Define the use-case oriented access contract for user records.
//! - Own the ordered collection for the life of the process.
//!
//! # Invariants
//! - `id` is unique within one directory; inserts enforce this.
//! - Iteration order is insertion order.

pub mod user_directory;
