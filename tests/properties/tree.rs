//! Property tests for the tree builder and the input grammar.

use std::io::Cursor;

use proptest::prelude::*;

use piemenu::{build_tree, parse_records, MenuRecord};

/// Levels of a well-formed list: starts at 0, never rises by more than one
pub fn levels() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(any::<u8>(), 1..=40).prop_map(|choices| {
        let mut levels = Vec::with_capacity(choices.len());
        let mut previous = 0usize;
        for (i, choice) in choices.into_iter().enumerate() {
            let level = if i == 0 {
                0
            } else {
                usize::from(choice) % (previous + 2)
            };
            levels.push(level);
            previous = level;
        }
        levels
    })
}

pub fn records(levels: &[usize]) -> Vec<MenuRecord> {
    levels
        .iter()
        .enumerate()
        .map(|(i, &level)| MenuRecord::new(level, format!("item{i}")).at_line(i + 1))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every menu sits exactly one level below its parent.
    #[test]
    fn property_levels_follow_parents(levels in levels()) {
        let tree = build_tree(records(&levels)).unwrap();

        for id in tree.menu_ids() {
            let menu = tree.menu(id);
            match menu.parent() {
                None => {
                    prop_assert_eq!(id, tree.root());
                    prop_assert_eq!(menu.level(), 0);
                }
                Some(parent) => prop_assert_eq!(menu.level(), tree.menu(parent).level() + 1),
            }
        }
        prop_assert_eq!(tree.item_count(), levels.len());
    }

    /// PROPERTY: a flat list builds one menu, in input order, without submenus.
    #[test]
    fn property_flat_list_is_one_menu(labels in proptest::collection::vec("[a-z]{1,8}", 1..=50)) {
        let records = labels.iter().map(|label| MenuRecord::new(0, label.as_str()));
        let tree = build_tree(records).unwrap();

        prop_assert_eq!(tree.menu_count(), 1);
        let built: Vec<&str> = tree
            .items_of(tree.root())
            .map(|(_, item)| item.label().unwrap())
            .collect();
        let expected: Vec<&str> = labels.iter().map(String::as_str).collect();
        prop_assert_eq!(built, expected);
        prop_assert!(tree.items_of(tree.root()).all(|(_, item)| item.submenu().is_none()));
    }

    /// PROPERTY: indenting by tabs and parsing gives back the levels.
    #[test]
    fn property_parsed_levels_match_indentation(levels in levels()) {
        let text: String = levels
            .iter()
            .enumerate()
            .map(|(i, &level)| format!("{}item{i}\tout{i}\n", "\t".repeat(level)))
            .collect();
        let parsed = parse_records(Cursor::new(text)).unwrap();

        let parsed_levels: Vec<usize> = parsed.iter().map(|r| r.level).collect();
        prop_assert_eq!(parsed_levels, levels);
        prop_assert!(parsed.iter().all(|r| r.label.is_some() && r.output.is_some()));
    }

    /// PROPERTY: arbitrary input never panics the parser or the builder.
    #[test]
    fn property_arbitrary_input_never_panics(text in "(?s)[\\t\\na-zA-Z:I M G]{0,200}") {
        if let Ok(records) = parse_records(Cursor::new(text)) {
            let _ = build_tree(records);
        }
    }
}
