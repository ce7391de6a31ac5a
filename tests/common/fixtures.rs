//! Menu inputs and a headless session runner.

use std::io::Cursor;

use piemenu::application::{prepare, run_session, Placement};
use piemenu::domain::services::{Navigator, Outcome, PieShape};
use piemenu::domain::value_objects::Size;
use piemenu::infrastructure::scripted::{FixedMetrics, ScriptedBackend, Step};
use piemenu::{ItemId, MenuId, MenuTree, PieResult};

/// A launcher with a submenu, a separator and an icon
pub const LAUNCHER: &str = "\
Applications
\tTerminal\txterm
\tBrowser\tfirefox

IMG:lock.png\tLock\tslock
Logout\tpkill -KILL -u $USER
";

pub fn placement() -> Placement {
    let screen = Size::new(400, 400);
    Placement {
        shape: PieShape::new(100, 1),
        screen,
        pointer: Placement::screen_center(screen),
    }
}

pub fn tree(input: &str) -> MenuTree {
    prepare(Cursor::new(input), &placement(), &FixedMetrics::default())
        .expect("fixture input should build")
}

/// Item of `menu` carrying `label`
pub fn item(tree: &MenuTree, menu: MenuId, label: &str) -> ItemId {
    tree.items_of(menu)
        .find(|(_, item)| item.label() == Some(label))
        .map(|(id, _)| id)
        .unwrap_or_else(|| panic!("no item '{label}' in menu {}", menu.index()))
}

pub struct Played {
    pub outcome: PieResult<Outcome>,
    pub navigator: Navigator,
    pub backend: ScriptedBackend,
}

/// Run a whole session over `tree`, replaying `steps`
pub fn play(tree: MenuTree, steps: Vec<Step>) -> Played {
    let shape = placement().shape;
    let mut navigator = Navigator::new(tree, shape);
    let mut backend = ScriptedBackend::new(shape, steps);
    let outcome = run_session(&mut navigator, &mut backend);
    Played {
        outcome,
        navigator,
        backend,
    }
}
