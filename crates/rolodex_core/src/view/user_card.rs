//! User card view.
//!
//! # Responsibility
//! - Render the bound user's `name` and `email` plus two action labels.
//! - Raise `edit`/`delete` intent carrying the bound record unchanged.
//!
//! # Invariants
//! - Rendering is a pure projection of the bound input; repeated renders of
//!   one binding are identical and raise no signals.
//! - Action triggers are guarded no-ops while no user is bound.

use crate::model::user::User;

/// Labels for the two interactive affordances a host renders with the card.
pub const CARD_ACTIONS: [&str; 2] = ["Edit", "Delete"];

/// Pure projection of a bound user, ready for a host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    /// Display name of the bound user.
    pub name: String,
    /// Contact email of the bound user.
    pub email: String,
}

/// Handler invoked with the bound record when an intent fires.
pub type IntentHandler = Box<dyn FnMut(&User)>;

/// Presentational unit bound to at most one user at a time.
///
/// Two states: Unbound (renders nothing, triggers are no-ops) and Bound
/// (renders fields, triggers fire the matching handler). Transitions happen
/// only when the caller replaces the binding via `bind`.
#[derive(Default)]
pub struct UserCard {
    user: Option<User>,
    on_edit: Option<IntentHandler>,
    on_delete: Option<IntentHandler>,
}

impl UserCard {
    /// Creates an unbound card with no handlers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bound input. `None` moves the card to the Unbound state.
    pub fn bind(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Returns the currently bound record, if any.
    pub fn bound_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Registers the parent handler for the `edit` signal.
    ///
    /// A later registration replaces the earlier one; each signal has at
    /// most one parent handler.
    pub fn on_edit(&mut self, handler: impl FnMut(&User) + 'static) {
        self.on_edit = Some(Box::new(handler));
    }

    /// Registers the parent handler for the `delete` signal.
    pub fn on_delete(&mut self, handler: impl FnMut(&User) + 'static) {
        self.on_delete = Some(Box::new(handler));
    }

    /// Projects the bound user into displayable fields.
    ///
    /// Returns `None` while Unbound. Side-effect free; calling this any
    /// number of times observes nothing and fires nothing.
    pub fn render(&self) -> Option<RenderedCard> {
        self.user.as_ref().map(|user| RenderedCard {
            name: user.name.clone(),
            email: user.email.clone(),
        })
    }

    /// Triggers the edit action.
    ///
    /// Fires `edit` exactly once with the bound record when Bound and a
    /// handler is registered. Unbound: guarded no-op, no signal, no error.
    pub fn request_edit(&mut self) {
        if let (Some(user), Some(handler)) = (self.user.as_ref(), self.on_edit.as_mut()) {
            handler(user);
        }
    }

    /// Triggers the delete action. Same guard discipline as `request_edit`.
    pub fn request_delete(&mut self) {
        if let (Some(user), Some(handler)) = (self.user.as_ref(), self.on_delete.as_mut()) {
            handler(user);
        }
    }
}
