//! Property tests for index label formatters.

use proptest::prelude::*;

use menu_tree::view::{default_formatter, IndexStyle};

proptest! {
    /// PROPERTY: The default formatter labels every position as "N) ".
    #[test]
    fn property_default_formatter_is_total(position in 0usize..10_000) {
        let label = default_formatter().format(position);
        prop_assert_eq!(label, format!("{}) ", position + 1));
    }

    /// PROPERTY: Every style yields a non-empty label containing the number.
    #[test]
    fn property_styles_contain_display_number(
        position in 0usize..10_000,
        style in prop_oneof![
            Just(IndexStyle::Paren),
            Just(IndexStyle::Bracket),
            Just(IndexStyle::Dot),
        ],
    ) {
        let label = style.formatter().format(position);
        prop_assert!(label.contains(&(position + 1).to_string()));
        prop_assert!(label.ends_with(' '));
    }
}

#[test]
fn test_formatter_at_usize_max_does_not_panic() {
    let label = default_formatter().format(usize::MAX);
    assert!(label.ends_with(") "));
}
