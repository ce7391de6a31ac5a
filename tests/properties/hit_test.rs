//! Property tests for hit testing.

use proptest::prelude::*;

use piemenu::domain::services::{locate_item, slice_midpoint};
use piemenu::domain::value_objects::{Point, Size};
use piemenu::infrastructure::scripted::FixedMetrics;
use piemenu::{build_tree, layout, MenuRecord, MenuTree, PieShape};

/// Large enough that one-degree slices are several pixels wide at mid radius
fn shape() -> PieShape {
    PieShape::new(2000, 1)
}

fn flat(count: usize) -> MenuTree {
    let mut tree = build_tree((0..count).map(|i| MenuRecord::new(0, format!("{i}")))).unwrap();
    layout(
        &mut tree,
        &shape(),
        &FixedMetrics::default(),
        Size::new(4000, 4000),
        Point::new(2000, 2000),
    );
    tree
}

fn assert_bisectors_hit(count: usize) {
    let tree = flat(count);
    let shape = shape();
    let root = tree.root();
    for (id, _) in tree.items_of(root) {
        let point = slice_midpoint(&tree, &shape, id);
        assert_eq!(
            locate_item(&tree, Some(root), &shape, point),
            Some(id),
            "item {} of {count} missed at {point:?}",
            id.index()
        );
    }
}

#[test]
fn bisectors_hit_their_items_for_reference_counts() {
    for count in [1, 2, 3, 7, 360] {
        assert_bisectors_hit(count);
    }
}

#[test]
fn no_menu_hits_nothing() {
    let tree = flat(3);
    assert_eq!(locate_item(&tree, None, &shape(), Point::new(0, 0)), None);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sampling an item's bisector always finds that item.
    #[test]
    fn property_bisectors_hit_their_items(count in 1usize..=120) {
        assert_bisectors_hit(count);
    }

    /// PROPERTY: every point around the centre belongs to some item.
    #[test]
    fn property_every_point_hits_an_item(
        count in 1usize..=60,
        x in 0i32..2000,
        y in 0i32..2000,
    ) {
        let tree = flat(count);
        let hit = locate_item(&tree, Some(tree.root()), &shape(), Point::new(x, y));
        prop_assert!(hit.is_some());
    }
}
