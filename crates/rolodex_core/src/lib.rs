//! Core domain logic for Rolodex.
//! This crate is the single source of truth for the user directory contract.

pub mod directory;
pub mod logging;
pub mod model;
pub mod shell;
pub mod view;

pub use directory::user_directory::{
    DirectoryError, DirectoryResult, InMemoryDirectory, UserDirectory,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserId};
pub use shell::Shell;
pub use view::user_card::{RenderedCard, UserCard, CARD_ACTIONS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
