//! Application shell: top-level composition point.
//!
//! # Responsibility
//! - Compose one literal user with the card view.
//! - Handle the view's `edit` intent as an observability side effect only.
//!
//! # Invariants
//! - Handling an intent never calls back into the directory and never
//!   mutates the featured record.

use crate::model::user::User;
use crate::view::user_card::{RenderedCard, UserCard};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Top-level wiring of one featured user to a card view.
///
/// The `edit` signal is journaled and logged. The `delete` signal is
/// deliberately left without a shell handler: the source this behavior is
/// preserved from never wired it, and the gap is kept visible here instead
/// of being silently filled or silently dropped.
pub struct Shell {
    card: UserCard,
    featured: User,
    edit_journal: Rc<RefCell<Vec<User>>>,
}

impl Shell {
    /// Composes the shell with its hard-coded featured user.
    ///
    /// The featured email intentionally differs from the directory seed
    /// record with the same id; the shell constructs its own literal value
    /// rather than reading from a directory.
    pub fn new() -> Self {
        Self::with_user(User::new(1, "John Doe", "john.doe@example.com"))
    }

    /// Composes the shell around a caller-supplied featured user.
    pub fn with_user(featured: User) -> Self {
        let mut card = UserCard::new();
        card.bind(Some(featured.clone()));

        let edit_journal: Rc<RefCell<Vec<User>>> = Rc::new(RefCell::new(Vec::new()));
        let journal = Rc::clone(&edit_journal);
        card.on_edit(move |user| {
            info!(
                "event=edit_intent module=shell status=ok user_id={} name={}",
                user.id, user.name
            );
            journal.borrow_mut().push(user.clone());
        });
        // delete intent is raised by the card but has no handler here.

        Self {
            card,
            featured,
            edit_journal,
        }
    }

    /// Returns the user this shell composed at startup.
    pub fn featured_user(&self) -> &User {
        &self.featured
    }

    /// Renders the composed card.
    pub fn render(&self) -> Option<RenderedCard> {
        self.card.render()
    }

    /// Forwards an edit interaction to the card.
    pub fn request_edit(&mut self) {
        self.card.request_edit();
    }

    /// Forwards a delete interaction to the card.
    pub fn request_delete(&mut self) {
        self.card.request_delete();
    }

    /// Returns the edit events observed so far, in arrival order.
    pub fn edit_journal(&self) -> Vec<User> {
        self.edit_journal.borrow().clone()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
