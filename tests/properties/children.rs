//! Property tests for child list snapshots.

use proptest::prelude::*;

use menu_tree::{MenuTree, ViewNode};

use crate::common::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `set_children(children())` leaves the menu unchanged.
    #[test]
    fn property_children_snapshot_round_trips(
        names in proptest::collection::vec("[A-Za-z]{1,8}", 0..12)
    ) {
        let recorder = Recorder::new();
        let mut tree = MenuTree::new();
        let root = tree.insert(ViewNode::menu("Main", ""));
        for name in &names {
            tree.push_child(root, recorder.action(name)).unwrap();
        }

        let quit = format!("{}\n", names.len() + 1);
        let before = run(&mut tree, root, &quit).output;

        let snapshot = tree.children(root).unwrap();
        tree.set_children(root, &snapshot).unwrap();

        prop_assert_eq!(tree.children(root).unwrap(), snapshot);
        prop_assert_eq!(run(&mut tree, root, &quit).output, before);
    }

    /// PROPERTY: Editing a `children()` snapshot never changes the listing.
    #[test]
    fn property_mutating_snapshot_leaves_output_unchanged(
        names in proptest::collection::vec("[A-Za-z]{1,8}", 1..12),
        drop_first in any::<bool>(),
    ) {
        let recorder = Recorder::new();
        let mut tree = MenuTree::new();
        let root = tree.insert(ViewNode::menu("Main", ""));
        for name in &names {
            tree.push_child(root, recorder.action(name)).unwrap();
        }

        let quit = format!("{}\n", names.len() + 1);
        let before = run(&mut tree, root, &quit).output;

        let mut snapshot = tree.children(root).unwrap();
        snapshot.reverse();
        if drop_first {
            snapshot.remove(0);
        }
        snapshot.push(root);

        prop_assert_eq!(run(&mut tree, root, &quit).output, before);
        prop_assert!(recorder.runs().is_empty());
    }
}
