//! Property tests for selection parsing and validation.

use proptest::prelude::*;

use menu_tree::view::{is_valid_selection, parse_selection, resolve_selection, Selection};
use menu_tree::{MenuTree, ViewNode};

use crate::common::*;

/// Lines that never start with an integer token
fn non_integer_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z?!#*][A-Za-z0-9 .,?!#*-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every value in `1..=N+1` is accepted.
    #[test]
    fn property_in_range_selections_are_valid(
        count in 0usize..64,
        offset in 0usize..64,
    ) {
        let selection = (offset % (count + 1)) as i64 + 1;
        prop_assert!(is_valid_selection(selection, count));
    }

    /// PROPERTY: Values below 1 or above N+1 are rejected.
    #[test]
    fn property_out_of_range_selections_are_invalid(
        count in 0usize..64,
        below in i64::MIN..1,
        above_by in 1i64..1_000_000,
    ) {
        prop_assert!(!is_valid_selection(below, count));
        prop_assert!(!is_valid_selection(count as i64 + 1 + above_by, count));
    }

    /// PROPERTY: N+1 is always the back/quit entry, never a child.
    #[test]
    fn property_last_entry_is_back(count in 0usize..64) {
        prop_assert_eq!(
            resolve_selection(count as i64 + 1, count),
            Some(Selection::Back)
        );
    }

    /// PROPERTY: The first token decides the selection, whatever follows.
    #[test]
    fn property_first_token_wins(n in -1_000i64..1_000, rest in "[a-z ]{0,12}") {
        prop_assert_eq!(parse_selection(&format!("  {n} {rest}\n")), n);
    }

    /// PROPERTY: Entering `s` in `1..=N` runs exactly the child at `s - 1`.
    #[test]
    fn property_selection_dispatches_to_matching_child(
        (count, selection) in (1usize..32).prop_flat_map(|n| (Just(n), 1..=n))
    ) {
        let recorder = Recorder::new();
        let mut tree = MenuTree::new();
        let root = tree.insert(ViewNode::menu("Main", ""));
        for position in 0..count {
            tree.push_child(root, recorder.action(&format!("child{position}"))).unwrap();
        }

        let session = run(&mut tree, root, &format!("{selection}\n"));

        prop_assert!(session.result.is_ok());
        prop_assert_eq!(recorder.runs(), vec![format!("child{}", selection - 1)]);
    }

    /// PROPERTY: Non-integer input never runs an action.
    #[test]
    fn property_non_integer_input_never_dispatches(line in non_integer_line()) {
        let recorder = Recorder::new();
        let mut tree = MenuTree::new();
        let root = tree.insert(ViewNode::menu("Main", ""));
        tree.push_child(root, recorder.action("Only")).unwrap();

        // The trailing "2" quits once the bad line has been rejected
        let session = run(&mut tree, root, &format!("{line}\n2\n"));

        prop_assert!(session.result.is_ok());
        prop_assert!(recorder.runs().is_empty());
        prop_assert_eq!(
            session.output.matches("Invalid input, please try again: ").count(),
            1
        );
    }
}
