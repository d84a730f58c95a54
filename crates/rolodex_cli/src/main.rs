//! CLI host for the rolodex shell.
//!
//! # Responsibility
//! - Wire logging, the seeded directory and the shell together.
//! - Drive one edit interaction end-to-end for quick local sanity checks.
//! - Keep output deterministic.

use log::info;
use rolodex_core::{
    core_version, default_log_level, init_logging, InMemoryDirectory, Shell, UserDirectory,
    CARD_ACTIONS,
};
use std::path::PathBuf;

const LOG_DIR_ENV: &str = "ROLODEX_LOG_DIR";

fn main() {
    let log_dir = resolve_log_dir();
    if let Some(log_dir_str) = log_dir.to_str() {
        // Logging is best-effort for the demo host; the run stays useful
        // without it.
        if let Err(err) = init_logging(default_log_level(), log_dir_str) {
            eprintln!("rolodex logging disabled: {err}");
        }
    }

    info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );
    println!("rolodex_core version={}", core_version());

    let directory = InMemoryDirectory::seeded();
    for user in directory.users() {
        println!("directory user id={} name={}", user.id, user.name);
    }

    let mut shell = Shell::new();
    if let Some(card) = shell.render() {
        println!("card name={} email={}", card.name, card.email);
        println!("card actions={}", CARD_ACTIONS.join("|"));
    }

    shell.request_edit();
    for user in shell.edit_journal() {
        println!("edit handled id={} name={}", user.id, user.name);
    }
}

fn resolve_log_dir() -> PathBuf {
    if let Ok(raw) = std::env::var(LOG_DIR_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join("rolodex-logs")
}
