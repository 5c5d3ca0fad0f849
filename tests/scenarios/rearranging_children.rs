//! Scenario: Rearranging a menu's children
//!
//! Journey: A program builds a menu, takes a snapshot of its children,
//! edits the menu and later restores or reorders it.
//!
//! Success Criteria:
//! - Restoring a snapshot gives the same listing as before
//! - Removing a child renumbers the rest
//! - Reordering changes which action a number selects

use menu_tree::{MenuTree, NodeId, ViewNode};

use crate::common::*;

fn three_actions(recorder: &Recorder) -> (MenuTree, NodeId) {
    let mut tree = MenuTree::new();
    let root = tree.insert(ViewNode::menu("Tools", ""));
    for name in ["Alpha", "Beta", "Gamma"] {
        tree.push_child(root, recorder.action(name)).unwrap();
    }
    (tree, root)
}

/// SCENARIO: Snapshot, clear, restore
#[test]
fn scenario_snapshot_restore_keeps_listing() {
    let recorder = Recorder::new();
    let (mut tree, root) = three_actions(&recorder);

    let before = run(&mut tree, root, "4\n").output;

    let snapshot = tree.children(root).unwrap();
    tree.set_children(root, &[]).unwrap();
    assert_eq!(
        run(&mut tree, root, "1\n").output,
        "\nTools\n1) Quit\nPlease enter a number to continue: "
    );

    tree.set_children(root, &snapshot).unwrap();
    assert_eq!(run(&mut tree, root, "4\n").output, before);
}

/// SCENARIO: Removing a child renumbers the remaining entries
#[test]
fn scenario_remove_child_renumbers() {
    let recorder = Recorder::new();
    let (mut tree, root) = three_actions(&recorder);

    let removed = tree.remove_child(root, 0).unwrap();
    assert_eq!(tree.get(removed).unwrap().name_in_parent(), "Alpha");

    let session = run(&mut tree, root, "1\n");
    session.result.as_ref().unwrap();
    assert!(session
        .output
        .starts_with("\nTools\n1) Beta\n2) Gamma\n3) Quit\n"));
    assert_eq!(recorder.runs(), vec!["Beta"]);
}

/// SCENARIO: Reordering changes what a number dispatches to
#[test]
fn scenario_reorder_children() {
    let recorder = Recorder::new();
    let (mut tree, root) = three_actions(&recorder);

    let mut order = tree.children(root).unwrap();
    order.reverse();
    tree.set_children(root, &order).unwrap();

    run(&mut tree, root, "1\n").result.unwrap();
    assert_eq!(recorder.runs(), vec!["Gamma"]);
}
