//! Scenario: walking into submenus
//!
//! Journey: the user opens a submenu by releasing on its parent slice, then
//! either chooses inside it or backs out again.

use piemenu::domain::ports::{Key, MenuEvent};
use piemenu::domain::services::{Effect, Outcome};
use piemenu::infrastructure::scripted::Step;

use crate::common::*;

#[test]
fn scenario_nested_item_is_reached_through_its_parent() {
    let tree = tree("Foo\n\tBar\n");
    let root = tree.root();
    let foo = item(&tree, root, "Foo");
    let submenu = tree.item(foo).submenu().expect("Foo owns a submenu");
    assert_eq!(tree.menu(root).items().len(), 1);
    assert_eq!(tree.menu(submenu).items().len(), 1);
    let bar = item(&tree, submenu, "Bar");

    let played = play(tree, vec![Step::Release(foo), Step::Release(bar)]);
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("Bar".to_string()));
}

#[test]
fn scenario_opening_a_submenu_does_not_finish() {
    let tree = tree("Foo\n\tBar\n");
    let root = tree.root();
    let foo = item(&tree, root, "Foo");
    let submenu = tree.item(foo).submenu().unwrap();

    // The script ends while the submenu is open
    let played = play(tree, vec![Step::Release(foo)]);
    assert_eq!(played.outcome.unwrap(), Outcome::Cancelled);
    assert_eq!(played.navigator.current(), submenu);

    let calls = played.backend.calls();
    assert!(calls.contains(&Effect::Map(submenu)));
    // Torn down deepest first
    assert_eq!(
        &calls[calls.len() - 2..],
        &[Effect::Unmap(submenu), Effect::Unmap(root)]
    );
}

#[test]
fn scenario_left_key_backs_out_and_keeps_parent_selection() {
    let tree = tree(LAUNCHER);
    let root = tree.root();
    let apps = item(&tree, root, "Applications");
    let lock = item(&tree, root, "Lock");

    let played = play(
        tree,
        vec![
            Step::Hover(apps),
            Step::Release(apps),
            Step::Raw(MenuEvent::KeyPressed(Key::Left)),
            Step::Raw(MenuEvent::KeyPressed(Key::Tab)),
            Step::Raw(MenuEvent::KeyPressed(Key::Enter)),
        ],
    );
    // Back at the root with Applications still selected, Tab skips the
    // separator and lands on Lock
    assert_eq!(played.navigator.tree().item(lock).output(), Some("slock"));
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("slock".to_string()));
}

#[test]
fn scenario_switching_sibling_submenus_unmaps_the_old_one() {
    let tree = tree("a\n\ta1\nb\n\tb1\n");
    let root = tree.root();
    let a = item(&tree, root, "a");
    let b = item(&tree, root, "b");
    let menu_a = tree.item(a).submenu().unwrap();
    let menu_b = tree.item(b).submenu().unwrap();

    // Leave a's submenu, then open b's
    let played = play(
        tree,
        vec![
            Step::Release(a),
            Step::Raw(MenuEvent::PointerLeft { window: menu_a }),
            Step::Release(b),
        ],
    );
    assert_eq!(played.outcome.unwrap(), Outcome::Cancelled);

    let calls = played.backend.calls();
    let unmap_a = calls.iter().position(|c| *c == Effect::Unmap(menu_a));
    let map_b = calls.iter().position(|c| *c == Effect::Map(menu_b));
    assert!(unmap_a.is_some() && map_b.is_some());
    assert!(unmap_a < map_b);
}

#[test]
fn scenario_closing_the_submenu_returns_to_root() {
    let tree = tree("Foo\n\tBar\nBaz\n");
    let root = tree.root();
    let foo = item(&tree, root, "Foo");
    let submenu = tree.item(foo).submenu().unwrap();
    let baz = item(&tree, root, "Baz");

    let played = play(
        tree,
        vec![
            Step::Release(foo),
            Step::Raw(MenuEvent::Closed { window: submenu }),
            Step::Release(baz),
        ],
    );
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("Baz".to_string()));
}

#[test]
fn scenario_closing_the_root_cancels() {
    let tree = tree("Foo\n\tBar\n");
    let root = tree.root();
    let foo = item(&tree, root, "Foo");

    let played = play(
        tree,
        vec![
            Step::Release(foo),
            Step::Raw(MenuEvent::Closed { window: root }),
        ],
    );
    assert_eq!(played.outcome.unwrap(), Outcome::Cancelled);
    assert!(played.backend.mapped().is_empty());
}
