//! Presentational layer.
//!
//! # Responsibility
//! - Project one bound user record into displayable output.
//! - Forward edit/delete intent to a parent through registered handlers.
//!
//! # Invariants
//! - The view never mutates the directory; it only raises intent.

pub mod user_card;
