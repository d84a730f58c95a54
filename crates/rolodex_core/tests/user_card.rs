use rolodex_core::{RenderedCard, User, UserCard, CARD_ACTIONS};
use std::cell::RefCell;
use std::rc::Rc;

/// Captures every intent delivered to one registered handler.
fn recording_handler(events: &Rc<RefCell<Vec<User>>>) -> impl FnMut(&User) + 'static {
    let events = Rc::clone(events);
    move |user: &User| events.borrow_mut().push(user.clone())
}

#[test]
fn unbound_card_renders_nothing() {
    let card = UserCard::new();
    assert_eq!(card.render(), None);
}

#[test]
fn unbound_triggers_are_no_ops() {
    let edits: Rc<RefCell<Vec<User>>> = Rc::new(RefCell::new(Vec::new()));
    let deletes: Rc<RefCell<Vec<User>>> = Rc::new(RefCell::new(Vec::new()));

    let mut card = UserCard::new();
    card.on_edit(recording_handler(&edits));
    card.on_delete(recording_handler(&deletes));

    card.request_edit();
    card.request_delete();

    assert!(edits.borrow().is_empty());
    assert!(deletes.borrow().is_empty());
}

#[test]
fn bound_card_renders_name_and_email() {
    let mut card = UserCard::new();
    card.bind(Some(User::new(1, "John Doe", "john@example.com")));

    let rendered = card.render().expect("bound card should render");
    assert_eq!(rendered.name, "John Doe");
    assert_eq!(rendered.email, "john@example.com");
}

#[test]
fn edit_trigger_fires_exactly_once_with_bound_record() {
    let edits: Rc<RefCell<Vec<User>>> = Rc::new(RefCell::new(Vec::new()));
    let deletes: Rc<RefCell<Vec<User>>> = Rc::new(RefCell::new(Vec::new()));

    let bound = User::new(1, "John Doe", "john@example.com");
    let mut card = UserCard::new();
    card.bind(Some(bound.clone()));
    card.on_edit(recording_handler(&edits));
    card.on_delete(recording_handler(&deletes));

    card.request_edit();

    assert_eq!(edits.borrow().as_slice(), &[bound]);
    assert!(deletes.borrow().is_empty());
}

#[test]
fn delete_trigger_fires_with_bound_record() {
    let deletes: Rc<RefCell<Vec<User>>> = Rc::new(RefCell::new(Vec::new()));

    let bound = User::new(1, "John Doe", "john@example.com");
    let mut card = UserCard::new();
    card.bind(Some(bound.clone()));
    card.on_delete(recording_handler(&deletes));

    card.request_delete();

    assert_eq!(deletes.borrow().as_slice(), &[bound]);
}

#[test]
fn trigger_without_registered_handler_is_a_no_op() {
    let mut card = UserCard::new();
    card.bind(Some(User::new(1, "John Doe", "john@example.com")));

    // No handlers registered; nothing to observe, nothing to panic.
    card.request_edit();
    card.request_delete();
}

#[test]
fn repeated_renders_are_identical_and_signal_free() {
    let edits: Rc<RefCell<Vec<User>>> = Rc::new(RefCell::new(Vec::new()));

    let mut card = UserCard::new();
    card.bind(Some(User::new(2, "Jane Smith", "jane@example.com")));
    card.on_edit(recording_handler(&edits));

    let first = card.render();
    let second = card.render();
    let third = card.render();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert!(edits.borrow().is_empty());
}

#[test]
fn rebinding_replaces_rendered_output() {
    let mut card = UserCard::new();
    card.bind(Some(User::new(1, "John Doe", "john@example.com")));

    card.bind(Some(User::new(2, "Jane Smith", "jane@example.com")));
    assert_eq!(
        card.render(),
        Some(RenderedCard {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        })
    );

    card.bind(None);
    assert_eq!(card.render(), None);
}

#[test]
fn card_exposes_edit_and_delete_actions() {
    assert_eq!(CARD_ACTIONS, ["Edit", "Delete"]);
}
