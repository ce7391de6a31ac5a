//! Scenario: choosing with the pointer
//!
//! Journey: the user hovers over a slice and releases the button on it.

use piemenu::domain::ports::MenuEvent;
use piemenu::domain::services::{Effect, Outcome};
use piemenu::infrastructure::scripted::Step;

use crate::common::*;

#[test]
fn scenario_label_is_the_output() {
    let tree = tree("Foo\n");
    let foo = item(&tree, tree.root(), "Foo");

    let played = play(tree, vec![Step::Hover(foo), Step::Release(foo)]);
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("Foo".to_string()));
}

#[test]
fn scenario_output_field_wins_over_label() {
    let tree = tree("Foo\tbar\n");
    let foo = item(&tree, tree.root(), "Foo");

    let played = play(tree, vec![Step::Release(foo)]);
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("bar".to_string()));
}

#[test]
fn scenario_hover_highlights_and_redraws_once() {
    let tree = tree("a\nb\nc\n");
    let b = item(&tree, tree.root(), "b");

    let played = play(tree, vec![Step::Hover(b), Step::Hover(b)]);
    let redraws = played
        .backend
        .calls()
        .iter()
        .filter(|call| matches!(call, Effect::Redraw(_)))
        .count();
    // Initial draw plus the first hover; the second hover changes nothing
    assert_eq!(redraws, 2);
    assert_eq!(played.outcome.unwrap(), Outcome::Cancelled);
}

#[test]
fn scenario_release_on_separator_does_nothing() {
    let tree = tree("a\n\nb\n");
    let root = tree.root();
    let separator = tree.menu(root).items()[1];
    let b = item(&tree, root, "b");

    let played = play(tree, vec![Step::Release(separator), Step::Release(b)]);
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("b".to_string()));
}

#[test]
fn scenario_click_away_cancels() {
    let tree = tree(LAUNCHER);

    let played = play(
        tree,
        vec![Step::Raw(MenuEvent::ButtonPressed { window: None })],
    );
    assert_eq!(played.outcome.unwrap(), Outcome::Cancelled);
    assert!(played.backend.mapped().is_empty());
    assert_eq!(played.backend.remaining(), 0);
}

#[test]
fn scenario_events_after_the_choice_are_not_read() {
    let tree = tree("a\nb\n");
    let a = item(&tree, tree.root(), "a");
    let b = item(&tree, tree.root(), "b");

    let played = play(tree, vec![Step::Release(a), Step::Release(b)]);
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("a".to_string()));
    assert_eq!(played.backend.remaining(), 1);
}
