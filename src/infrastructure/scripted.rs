//! Headless backend replaying a fixed script of events.
//!
//! Records every display call so a session can be checked without a
//! terminal. Steps may name items instead of coordinates; they are resolved
//! against the tree when the step is replayed.

use std::collections::VecDeque;

use crate::domain::entities::{ItemId, MenuId, MenuTree};
use crate::domain::ports::{EventSource, MenuDisplay, MenuEvent, TextMetrics};
use crate::domain::services::{slice_midpoint, Effect, PieShape};
use crate::error::{PieMenuError, PieResult};

/// One scripted input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Deliver the event as is
    Raw(MenuEvent),
    /// Move the pointer to the middle of the item's slice
    Hover(ItemId),
    /// Release the button over the middle of the item's slice
    Release(ItemId),
    /// Fail as a broken connection would
    Fail,
}

pub struct ScriptedBackend {
    shape: PieShape,
    steps: VecDeque<Step>,
    calls: Vec<Effect>,
    /// Mapped menus in the order they were mapped
    mapped: Vec<MenuId>,
}

impl ScriptedBackend {
    pub fn new(shape: PieShape, steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            shape,
            steps: steps.into_iter().collect(),
            calls: Vec::new(),
            mapped: Vec::new(),
        }
    }

    /// Display calls received so far
    pub fn calls(&self) -> &[Effect] {
        &self.calls
    }

    pub fn mapped(&self) -> &[MenuId] {
        &self.mapped
    }

    /// Steps not replayed yet
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl EventSource for ScriptedBackend {
    fn next_event(&mut self, tree: &MenuTree) -> PieResult<Option<MenuEvent>> {
        let Some(step) = self.steps.pop_front() else {
            return Ok(None);
        };
        let event = match step {
            Step::Raw(event) => event,
            Step::Hover(item) => MenuEvent::PointerMoved {
                window: tree.item(item).menu(),
                position: slice_midpoint(tree, &self.shape, item),
            },
            Step::Release(item) => MenuEvent::ButtonReleased {
                window: tree.item(item).menu(),
                position: slice_midpoint(tree, &self.shape, item),
            },
            Step::Fail => {
                return Err(PieMenuError::DisplayUnavailable {
                    message: "scripted failure".to_string(),
                })
            }
        };
        Ok(Some(event))
    }
}

impl MenuDisplay for ScriptedBackend {
    fn map(&mut self, _tree: &MenuTree, menu: MenuId) -> PieResult<()> {
        self.calls.push(Effect::Map(menu));
        if !self.mapped.contains(&menu) {
            self.mapped.push(menu);
        }
        Ok(())
    }

    fn unmap(&mut self, _tree: &MenuTree, menu: MenuId) -> PieResult<()> {
        self.calls.push(Effect::Unmap(menu));
        self.mapped.retain(|&m| m != menu);
        Ok(())
    }

    fn warp_pointer(&mut self, _tree: &MenuTree, menu: MenuId) -> PieResult<()> {
        self.calls.push(Effect::Warp(menu));
        Ok(())
    }

    fn redraw(&mut self, _tree: &MenuTree, current: MenuId) -> PieResult<()> {
        self.calls.push(Effect::Redraw(current));
        Ok(())
    }
}

/// Text metrics with a fixed advance per character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMetrics {
    pub char_width: i32,
    pub ascent: i32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 1,
            ascent: 2,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }

    fn ascent(&self) -> i32 {
        self.ascent
    }
}
