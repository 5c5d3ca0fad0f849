//! Scenario: Walking a two-level menu
//!
//! Journey: A root menu lists an action and a submenu; the submenu lists one
//! more action.
//!
//! Success Criteria:
//! - Picking a root action runs it and ends the session
//! - Picking an action inside the submenu runs that one instead
//! - Back from the submenu shows the root menu again

use menu_tree::{MenuTree, NodeId, ReturnPolicy, ViewNode};

use crate::common::*;

fn two_level_tree(recorder: &Recorder) -> (MenuTree, NodeId) {
    let mut tree = MenuTree::new();
    let root = tree.insert(ViewNode::menu("Main", ""));
    tree.push_child(root, recorder.action("ActionA")).unwrap();
    let submenu = tree
        .push_child(root, ViewNode::menu("SubmenuB", "SubmenuB"))
        .unwrap();
    tree.push_child(submenu, recorder.action("ActionC")).unwrap();
    (tree, root)
}

/// SCENARIO: A root action runs once and nothing is prompted afterwards
#[test]
fn scenario_root_action_ends_session() {
    let recorder = Recorder::new();
    let (mut tree, root) = two_level_tree(&recorder);

    let session = run(&mut tree, root, "1\n");

    session.result.as_ref().unwrap();
    assert_eq!(recorder.runs(), vec!["ActionA"]);
    assert_eq!(
        session.output,
        "\nMain\n1) ActionA\n2) SubmenuB\n3) Quit\nPlease enter a number to continue: \nActionA\n"
    );
}

/// SCENARIO: Descending into the submenu and running its action
#[test]
fn scenario_submenu_action_runs() {
    let recorder = Recorder::new();
    let (mut tree, root) = two_level_tree(&recorder);

    let session = run(&mut tree, root, "2\n1\n");

    session.result.as_ref().unwrap();
    assert_eq!(recorder.runs(), vec!["ActionC"]);
    assert!(session
        .output
        .contains("\nSubmenuB\n1) ActionC\n2) Back\nPlease enter a number to continue: "));
}

/// SCENARIO: Back from the submenu redisplays the root menu
#[test]
fn scenario_back_returns_to_root_display() {
    let recorder = Recorder::new();
    let (mut tree, root) = two_level_tree(&recorder);

    let session = run(&mut tree, root, "2\n2\n3\n");

    session.result.as_ref().unwrap();
    assert!(recorder.runs().is_empty());
    assert_eq!(session.displays_of("Main"), 2);
    assert_eq!(session.displays_of("SubmenuB"), 1);
}

/// SCENARIO: With redisplay, a user can run several actions in one session
#[test]
fn scenario_redisplay_keeps_session_open() {
    let recorder = Recorder::new();
    let (mut tree, root) = two_level_tree(&recorder);

    let session = run_with_policy(&mut tree, root, "1\n2\n1\n2\n3\n", ReturnPolicy::Redisplay);

    session.result.as_ref().unwrap();
    assert_eq!(recorder.runs(), vec!["ActionA", "ActionC"]);
    assert_eq!(session.displays_of("Main"), 3);
    assert_eq!(session.displays_of("SubmenuB"), 2);
}

/// SCENARIO: Deep nesting does not depend on call depth
#[test]
fn scenario_deeply_nested_menus() {
    let recorder = Recorder::new();
    let mut tree = MenuTree::new();
    let root = tree.insert(ViewNode::menu("Level 0", ""));

    let mut current = root;
    for depth in 1..=2_000 {
        let title = format!("Level {depth}");
        current = tree
            .push_child(current, ViewNode::menu(title.clone(), title))
            .unwrap();
    }
    tree.push_child(current, recorder.action("Bottom")).unwrap();

    let input = "1\n".repeat(2_001);
    let session = run(&mut tree, root, &input);

    session.result.as_ref().unwrap();
    assert_eq!(recorder.runs(), vec!["Bottom"]);
}

/// SCENARIO: An action announces itself with its own title
#[test]
fn scenario_action_title_is_printed_when_entered() {
    let recorder = Recorder::new();
    let mut tree = MenuTree::new();
    let root = tree.insert(ViewNode::menu("Main", ""));
    tree.push_child(root, recorder.action("Create")).unwrap();
    let sub = tree.push_child(root, ViewNode::menu("Items", "Items")).unwrap();
    tree.push_child(
        sub,
        ViewNode::action("Creating Item", "New item", |_| Ok(())),
    )
    .unwrap();

    let session = run(&mut tree, root, "2\n1\n");

    session.result.as_ref().unwrap();
    assert!(session
        .output
        .ends_with("\nItems\n1) New item\n2) Back\nPlease enter a number to continue: \nCreating Item\n"));
    assert!(recorder.runs().is_empty());
}
