use rolodex_core::{Shell, User};

#[test]
fn shell_composes_its_own_featured_user_literal() {
    let shell = Shell::new();

    let featured = shell.featured_user();
    assert_eq!(featured.id, 1);
    assert_eq!(featured.name, "John Doe");
    // Distinct from the directory seed email for id 1; the shell builds
    // its own literal and never reads a directory.
    assert_eq!(featured.email, "john.doe@example.com");
}

#[test]
fn shell_renders_the_featured_user() {
    let shell = Shell::new();

    let rendered = shell.render().expect("shell binds a user at startup");
    assert_eq!(rendered.name, "John Doe");
    assert_eq!(rendered.email, "john.doe@example.com");
}

#[test]
fn edit_interaction_is_journaled_once_per_trigger() {
    let mut shell = Shell::new();
    let featured = shell.featured_user().clone();

    shell.request_edit();
    assert_eq!(shell.edit_journal(), vec![featured.clone()]);

    shell.request_edit();
    assert_eq!(shell.edit_journal(), vec![featured.clone(), featured]);
}

#[test]
fn delete_interaction_reaches_no_shell_handler() {
    let mut shell = Shell::new();

    shell.request_delete();

    // Delete intent is raised by the card but the shell never subscribed.
    assert!(shell.edit_journal().is_empty());
}

#[test]
fn handling_edit_does_not_mutate_the_featured_record() {
    let mut shell = Shell::with_user(User::new(5, "Grace Hopper", "grace@example.com"));
    let before = shell.featured_user().clone();

    shell.request_edit();

    assert_eq!(shell.featured_user(), &before);
    assert_eq!(shell.edit_journal(), vec![before]);
}
