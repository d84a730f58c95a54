//! User directory contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide read (list, lookup-by-id) and append access to user records.
//! - Keep the collection an explicit owned value handed to callers, never a
//!   process-global singleton.
//!
//! # Invariants
//! - `add_user` rejects an `id` already present instead of appending a
//!   silent duplicate.
//! - Reads are side-effect free and preserve insertion order.
//!
//! Access is single-threaded and synchronous. A concurrent host must put
//! the directory behind a single ownership point (one task or a mutex);
//! nothing here serializes callers.

use crate::model::user::{User, UserId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Error raised by directory mutations.
#[derive(Debug, PartialEq, Eq)]
pub enum DirectoryError {
    /// An insert carried an `id` the directory already holds.
    DuplicateId(UserId),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "user id {id} already exists in directory"),
        }
    }
}

impl Error for DirectoryError {}

/// Access contract for the authoritative user collection.
///
/// Lookups signal absence with `None`; only mutations can fail.
pub trait UserDirectory {
    /// Returns the full ordered collection. Not a defensive copy; callers
    /// must treat the slice as a read-only view.
    fn users(&self) -> &[User];

    /// Returns the first record whose `id` matches, or `None`.
    ///
    /// Linear scan. Collections stay tiny, so no index is maintained.
    fn user_by_id(&self, id: UserId) -> Option<&User>;

    /// Appends a record to the end of the collection.
    ///
    /// # Errors
    /// - `DirectoryError::DuplicateId` when `user.id` is already present.
    ///   The collection is left unchanged in that case.
    fn add_user(&mut self, user: User) -> DirectoryResult<()>;
}

/// Process-lifetime, in-memory directory implementation.
pub struct InMemoryDirectory {
    users: Vec<User>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Creates a directory holding the two fixed seed records.
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User::new(1, "John Doe", "john@example.com"),
                User::new(2, "Jane Smith", "jane@example.com"),
            ],
        }
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for InMemoryDirectory {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    fn add_user(&mut self, user: User) -> DirectoryResult<()> {
        if self.user_by_id(user.id).is_some() {
            return Err(DirectoryError::DuplicateId(user.id));
        }
        self.users.push(user);
        Ok(())
    }
}
