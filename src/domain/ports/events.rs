//! Input Event Port
//!
//! Events are already resolved to the menu surface they happened on.
//! Surfaces are identified by the id of the menu they show.

use crate::domain::entities::{MenuId, MenuTree};
use crate::domain::value_objects::Point;
use crate::error::PieResult;

/// Keys the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    /// Shift-Tab
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Enter,
    /// Any other key (ignored)
    Other,
}

/// An input event scoped to a menu surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Surface contents were lost and must be drawn again
    Expose,
    /// Pointer moved to `position` (surface-local) inside `window`
    PointerMoved { window: MenuId, position: Point },
    /// Pointer left `window`
    PointerLeft { window: MenuId },
    /// A button went down; `window` is `None` outside every surface
    ButtonPressed { window: Option<MenuId> },
    /// A button was released at `position` (surface-local) inside `window`
    ButtonReleased { window: MenuId, position: Point },
    /// A key was pressed
    KeyPressed(Key),
    /// The user asked to close `window`
    Closed { window: MenuId },
    /// `window` was moved to screen `position`
    Moved { window: MenuId, position: Point },
}

/// Blocking source of input events
pub trait EventSource {
    /// Wait for the next event. `Ok(None)` means the source is closed and no
    /// more events will arrive.
    fn next_event(&mut self, tree: &MenuTree) -> PieResult<Option<MenuEvent>>;
}
