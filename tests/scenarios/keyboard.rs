//! Scenario: keyboard only
//!
//! Journey: the user never touches the pointer and drives the menus with
//! Tab, arrows, Enter and Escape.

use piemenu::domain::ports::{Key, MenuEvent};
use piemenu::domain::services::Outcome;
use piemenu::infrastructure::scripted::Step;

use crate::common::*;

fn keys(keys: &[Key]) -> Vec<Step> {
    keys.iter()
        .map(|&key| Step::Raw(MenuEvent::KeyPressed(key)))
        .collect()
}

#[test]
fn scenario_escape_at_root_cancels() {
    let played = play(tree(LAUNCHER), keys(&[Key::Escape]));
    assert_eq!(played.outcome.unwrap(), Outcome::Cancelled);
    assert!(played.backend.mapped().is_empty());
}

#[test]
fn scenario_walk_into_submenu_and_choose() {
    let played = play(
        tree(LAUNCHER),
        keys(&[Key::Tab, Key::Right, Key::Down, Key::Enter]),
    );
    // Right opens Applications with Terminal selected, Down moves to Browser
    assert_eq!(
        played.outcome.unwrap(),
        Outcome::Chosen("firefox".to_string())
    );
}

#[test]
fn scenario_escape_in_submenu_goes_up_one_level() {
    let played = play(
        tree(LAUNCHER),
        keys(&[Key::Tab, Key::Enter, Key::Escape, Key::Escape]),
    );
    // First Escape leaves Applications, second cancels at the root
    assert_eq!(played.outcome.unwrap(), Outcome::Cancelled);
}

#[test]
fn scenario_cycling_backwards_wraps_to_last() {
    let played = play(tree(LAUNCHER), keys(&[Key::BackTab, Key::Enter]));
    assert_eq!(
        played.outcome.unwrap(),
        Outcome::Chosen("pkill -KILL -u $USER".to_string())
    );
}

#[test]
fn scenario_cycling_skips_separators_and_wraps() {
    let input = "A\n\nB\n";
    let played = play(tree(input), keys(&[Key::Tab, Key::Tab, Key::Enter]));
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("B".to_string()));

    let played = play(
        tree(input),
        keys(&[Key::Tab, Key::Tab, Key::Tab, Key::Enter]),
    );
    assert_eq!(played.outcome.unwrap(), Outcome::Chosen("A".to_string()));
}

#[test]
fn scenario_enter_without_selection_does_nothing() {
    let played = play(tree("A\nB\n"), keys(&[Key::Enter, Key::Other]));
    assert_eq!(played.outcome.unwrap(), Outcome::Cancelled);
}
