//! Menu session use cases
//!
//! `prepare` turns the input stream into a laid-out tree; `run_session`
//! drives a `Navigator` against a backend until the user chooses an item or
//! dismisses the menu.

use std::io::BufRead;

use crate::domain::entities::MenuTree;
use crate::domain::ports::{EventSource, MenuDisplay, TextMetrics};
use crate::domain::services::{build_tree, layout, Effect, Navigator, Outcome, PieShape};
use crate::domain::value_objects::{Point, Size};
use crate::error::PieResult;
use crate::parser::parse_records;

/// Where and how the tree is laid out
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub shape: PieShape,
    pub screen: Size,
    /// Pointer position the root is centred on
    pub pointer: Point,
}

impl Placement {
    /// Centre of the screen, used when no pointer position is known
    pub fn screen_center(screen: Size) -> Point {
        Point::new(screen.width / 2, screen.height / 2)
    }
}

/// Parse the input, build the tree and compute its geometry
pub fn prepare(
    input: impl BufRead,
    placement: &Placement,
    metrics: &dyn TextMetrics,
) -> PieResult<MenuTree> {
    let records = parse_records(input)?;
    let mut tree = build_tree(records)?;
    layout(
        &mut tree,
        &placement.shape,
        metrics,
        placement.screen,
        placement.pointer,
    );
    Ok(tree)
}

/// Run the event loop until an outcome is reached or the event source
/// closes. Every mapped menu is unmapped before returning, on error too.
pub fn run_session<B>(navigator: &mut Navigator, backend: &mut B) -> PieResult<Outcome>
where
    B: EventSource + MenuDisplay,
{
    let result = drive(navigator, backend);
    let teardown = navigator.teardown();
    let cleanup = apply(navigator, backend, teardown);
    let outcome = result?;
    cleanup?;
    log::info!("session finished: {:?}", outcome);
    Ok(outcome)
}

fn drive<B>(navigator: &mut Navigator, backend: &mut B) -> PieResult<Outcome>
where
    B: EventSource + MenuDisplay,
{
    let effects = navigator.start();
    if let Some(outcome) = apply(navigator, backend, effects)? {
        return Ok(outcome);
    }

    loop {
        let Some(event) = backend.next_event(navigator.tree())? else {
            log::debug!("event source closed");
            return Ok(Outcome::Cancelled);
        };
        log::trace!("event: {:?}", event);
        let effects = navigator.handle(&event);
        if let Some(outcome) = apply(navigator, backend, effects)? {
            return Ok(outcome);
        }
    }
}

/// Forward effects to the display in order; returns the outcome if one was
/// reached
fn apply<D: MenuDisplay>(
    navigator: &Navigator,
    display: &mut D,
    effects: Vec<Effect>,
) -> PieResult<Option<Outcome>> {
    let tree = navigator.tree();
    for effect in effects {
        match effect {
            Effect::Map(menu) => display.map(tree, menu)?,
            Effect::Unmap(menu) => display.unmap(tree, menu)?,
            Effect::Warp(menu) => display.warp_pointer(tree, menu)?,
            Effect::Redraw(menu) => display.redraw(tree, menu)?,
            Effect::Finish(outcome) => return Ok(Some(outcome)),
        }
    }
    Ok(None)
}
