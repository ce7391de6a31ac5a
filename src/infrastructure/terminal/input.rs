//! Terminal input translation.
//!
//! Crossterm reports mouse positions in cells for the whole screen. Menu
//! events are scoped to a surface, so every position is resolved to the
//! topmost mapped pie under it, and crossings between pies become
//! `PointerLeft` events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::domain::entities::{MenuId, MenuTree};
use crate::domain::ports::{Key, MenuEvent};
use crate::domain::services::PieShape;
use crate::domain::value_objects::Point;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Key(Key),
    /// Close every menu (Ctrl+C)
    CloseRoot,
    /// Close the deepest open menu (Ctrl+W)
    CloseTop,
}

/// Convert a keyboard event to a KeyAction
pub fn key_to_action(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return KeyAction::CloseRoot,
            KeyCode::Char('w') => return KeyAction::CloseTop,
            _ => {}
        }
    }

    let key = match key.code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    };
    KeyAction::Key(key)
}

/// Pixel under the top half of a cell
pub fn cell_to_pixel(column: u16, row: u16) -> Point {
    Point::new(i32::from(column), i32::from(row) * 2)
}

/// Topmost mapped menu whose pie contains the screen point, with the point
/// in that menu's coordinates
pub fn surface_at(
    tree: &MenuTree,
    mapped: &[MenuId],
    shape: &PieShape,
    point: Point,
) -> Option<(MenuId, Point)> {
    mapped.iter().rev().find_map(|&menu| {
        let local = point - tree.menu(menu).position();
        shape.contains(local).then_some((menu, local))
    })
}

/// Tracks which surface the pointer is over
#[derive(Debug, Default)]
pub struct InputTranslator {
    hover: Option<MenuId>,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the hovered surface. The next motion is not a crossing.
    pub fn reset_hover(&mut self) {
        self.hover = None;
    }

    /// A surface went away
    pub fn forget(&mut self, menu: MenuId) {
        if self.hover == Some(menu) {
            self.hover = None;
        }
    }

    /// Translate one terminal event. May produce zero, one or two menu events.
    pub fn translate(
        &mut self,
        event: &Event,
        tree: &MenuTree,
        mapped: &[MenuId],
        shape: &PieShape,
    ) -> Vec<MenuEvent> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let event = match key_to_action(*key) {
                    KeyAction::Key(key) => MenuEvent::KeyPressed(key),
                    KeyAction::CloseRoot => MenuEvent::Closed {
                        window: tree.root(),
                    },
                    KeyAction::CloseTop => match mapped.last() {
                        Some(&window) => MenuEvent::Closed { window },
                        None => return Vec::new(),
                    },
                };
                vec![event]
            }
            Event::Mouse(mouse) => {
                let point = cell_to_pixel(mouse.column, mouse.row);
                let target = surface_at(tree, mapped, shape, point);
                match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => self.motion(target),
                    MouseEventKind::Down(_) => vec![MenuEvent::ButtonPressed {
                        window: target.map(|(menu, _)| menu),
                    }],
                    MouseEventKind::Up(_) => target
                        .map(|(window, position)| MenuEvent::ButtonReleased { window, position })
                        .into_iter()
                        .collect(),
                    _ => Vec::new(),
                }
            }
            Event::Resize(..) => vec![MenuEvent::Expose],
            _ => Vec::new(),
        }
    }

    fn motion(&mut self, target: Option<(MenuId, Point)>) -> Vec<MenuEvent> {
        let mut events = Vec::new();
        let now = target.map(|(menu, _)| menu);
        if now != self.hover {
            if let Some(window) = self.hover {
                events.push(MenuEvent::PointerLeft { window });
            }
            self.hover = now;
        }
        if let Some((window, position)) = target {
            events.push(MenuEvent::PointerMoved { window, position });
        }
        events
    }
}
