//! Property tests for slice assignment and layout.

use proptest::prelude::*;

use piemenu::domain::value_objects::angle::{self, FULL_TURN};
use piemenu::domain::value_objects::{Point, Size};
use piemenu::infrastructure::scripted::FixedMetrics;
use piemenu::presentation::LayoutView;
use piemenu::{build_tree, layout, MenuRecord, MenuTree, PieShape};

use super::tree::{levels, records};

fn flat(count: usize) -> MenuTree {
    build_tree((0..count).map(|i| MenuRecord::new(0, format!("{i}")))).unwrap()
}

fn lay_out(tree: &mut MenuTree, screen: Size, pointer: Point) {
    layout(
        tree,
        &PieShape::new(40, 1),
        &FixedMetrics::default(),
        screen,
        pointer,
    );
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the slices of a menu cover the full turn without gaps.
    #[test]
    fn property_slices_partition_the_circle(count in 1usize..=400) {
        let mut tree = flat(count);
        lay_out(&mut tree, Size::new(200, 200), Point::new(100, 100));

        let items: Vec<_> = tree.items_of(tree.root()).map(|(_, item)| item).collect();
        let total: i32 = items.iter().map(|item| item.angle_span()).sum();
        prop_assert_eq!(total, FULL_TURN);

        for (i, item) in items.iter().enumerate() {
            let next = items[(i + 1) % items.len()];
            prop_assert!(item.angle_span() > 0);
            prop_assert_eq!(
                angle::wrap(item.angle_start() + item.angle_span()),
                next.angle_start()
            );
        }
    }

    /// PROPERTY: the first item is always centred on 0 degrees.
    #[test]
    fn property_first_item_straddles_zero(count in 1usize..=400) {
        let mut tree = flat(count);
        lay_out(&mut tree, Size::new(200, 200), Point::new(100, 100));

        let root = tree.menu(tree.root());
        let first = tree.item(root.first_item().unwrap());
        prop_assert_eq!(first.angle_start(), angle::wrap(-root.half_slice()));
        prop_assert!(angle::in_slice(0, first.angle_start(), first.angle_span()));
    }

    /// PROPERTY: laying out the same tree twice gives the same coordinates.
    #[test]
    fn property_layout_is_idempotent(
        levels in levels(),
        width in 1i32..=500,
        height in 1i32..=500,
        x in -50i32..=550,
        y in -50i32..=550,
    ) {
        let screen = Size::new(width, height);
        let pointer = Point::new(x, y);
        let mut tree = build_tree(records(&levels)).unwrap();

        lay_out(&mut tree, screen, pointer);
        let first = LayoutView::new(&tree).to_json().unwrap();
        lay_out(&mut tree, screen, pointer);
        let second = LayoutView::new(&tree).to_json().unwrap();

        prop_assert_eq!(first, second);
    }
}
