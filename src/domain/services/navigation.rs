//! Interaction state machine.
//!
//! The state is the current menu plus the `selected` item of every menu in
//! its ancestor chain. Each input event is handled to completion and turns
//! into a list of `Effect`s for the display; the last effect of a session is
//! always `Effect::Finish`.

use crate::domain::entities::{ItemId, MenuId, MenuTree};
use crate::domain::ports::{Key, MenuEvent};
use crate::domain::services::geometry::{locate_item, PieShape};
use crate::domain::value_objects::Point;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An item was chosen; carries its output string
    Chosen(String),
    /// The menu was dismissed without a choice
    Cancelled,
}

/// Display work requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Map(MenuId),
    Unmap(MenuId),
    /// Centre the pointer on the menu
    Warp(MenuId),
    /// Repaint the given menu and its ancestors
    Redraw(MenuId),
    Finish(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Prev,
}

/// Navigation state over a laid-out menu tree
pub struct Navigator {
    tree: MenuTree,
    shape: PieShape,
    current: MenuId,
    /// Menu whose chain is currently mapped
    mapped: Option<MenuId>,
    outcome: Option<Outcome>,
}

impl Navigator {
    pub fn new(tree: MenuTree, shape: PieShape) -> Self {
        let current = tree.root();
        Self {
            tree,
            shape,
            current,
            mapped: None,
            outcome: None,
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn into_tree(self) -> MenuTree {
        self.tree
    }

    pub fn shape(&self) -> &PieShape {
        &self.shape
    }

    pub fn current(&self) -> MenuId {
        self.current
    }

    /// Selected item of the current menu
    pub fn selected(&self) -> Option<ItemId> {
        self.tree.menu(self.current).selected()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Map the root, centre the pointer on it and draw it
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.is_finished() {
            return effects;
        }
        self.show_current(&mut effects);
        effects.push(Effect::Warp(self.current));
        effects.push(Effect::Redraw(self.current));
        effects
    }

    /// Handle one event. Nothing happens once the session has finished.
    pub fn handle(&mut self, event: &MenuEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.is_finished() {
            return effects;
        }

        match *event {
            MenuEvent::Expose => effects.push(Effect::Redraw(self.current)),
            MenuEvent::PointerMoved { window, position } => {
                self.on_motion(window, position, &mut effects)
            }
            MenuEvent::PointerLeft { window } => self.on_leave(window, &mut effects),
            MenuEvent::ButtonPressed { window } => self.on_press(window, &mut effects),
            MenuEvent::ButtonReleased { window, position } => {
                self.on_release(window, position, &mut effects)
            }
            MenuEvent::KeyPressed(key) => self.on_key(key, &mut effects),
            MenuEvent::Closed { window } => self.on_close(window, &mut effects),
            MenuEvent::Moved { window, position } => self.on_moved(window, position),
        }

        effects
    }

    /// Unmap every mapped menu, deepest first, clearing their selection
    pub fn teardown(&mut self) -> Vec<Effect> {
        let Some(mapped) = self.mapped.take() else {
            return Vec::new();
        };
        let chain: Vec<MenuId> = self.tree.ancestors(mapped).collect();
        chain
            .into_iter()
            .map(|menu| {
                self.tree.menu_mut(menu).selected = None;
                Effect::Unmap(menu)
            })
            .collect()
    }

    /// Resolve a surface to a menu of the current ancestor chain
    fn chain_menu(&self, window: MenuId) -> Option<MenuId> {
        let found = self.tree.ancestors(self.current).find(|&menu| menu == window);
        if found.is_none() {
            log::trace!("ignoring event for menu {} outside chain", window.index());
        }
        found
    }

    fn on_motion(&mut self, window: MenuId, position: Point, effects: &mut Vec<Effect>) {
        let Some(menu) = self.chain_menu(window) else {
            return;
        };
        let Some(item) = locate_item(&self.tree, Some(menu), &self.shape, position) else {
            return;
        };
        if self.tree.menu(menu).selected() == Some(item) {
            return;
        }
        self.tree.menu_mut(menu).selected = Some(item);
        effects.push(Effect::Redraw(self.current));
    }

    fn on_leave(&mut self, window: MenuId, effects: &mut Vec<Effect>) {
        let Some(menu) = self.chain_menu(window) else {
            return;
        };
        if menu == self.current {
            self.ascend(effects);
        }
        self.tree.menu_mut(self.current).selected = None;
        effects.push(Effect::Redraw(self.current));
    }

    fn on_press(&mut self, window: Option<MenuId>, effects: &mut Vec<Effect>) {
        if window.and_then(|w| self.chain_menu(w)).is_none() {
            log::debug!("button pressed outside the menus");
            self.finish(Outcome::Cancelled, effects);
        }
    }

    fn on_release(&mut self, window: MenuId, position: Point, effects: &mut Vec<Effect>) {
        let Some(menu) = self.chain_menu(window) else {
            return;
        };
        if let Some(item) = locate_item(&self.tree, Some(menu), &self.shape, position) {
            self.select(item, effects);
        }
    }

    fn on_key(&mut self, key: Key, effects: &mut Vec<Effect>) {
        let at_root = self.tree.menu(self.current).is_root();
        match key {
            Key::Escape if at_root => self.finish(Outcome::Cancelled, effects),
            Key::BackTab | Key::Up => self.cycle(Direction::Prev, effects),
            Key::Tab | Key::Down => self.cycle(Direction::Next, effects),
            Key::Enter | Key::Right => {
                if let Some(item) = self.selected() {
                    self.select(item, effects);
                }
            }
            Key::Escape | Key::Left if !at_root => {
                let Some(parent) = self.tree.menu(self.current).parent() else {
                    return;
                };
                let restore = self.tree.menu(parent).selected();
                self.ascend(effects);
                self.tree.menu_mut(self.current).selected = restore;
                effects.push(Effect::Redraw(self.current));
            }
            _ => {}
        }
    }

    fn on_close(&mut self, window: MenuId, effects: &mut Vec<Effect>) {
        let Some(menu) = self.chain_menu(window) else {
            return;
        };
        let Some(parent) = self.tree.menu(menu).parent() else {
            self.finish(Outcome::Cancelled, effects);
            return;
        };
        log::debug!("menu {} closed", menu.index());
        self.current = parent;
        self.show_current(effects);
        effects.push(Effect::Warp(self.current));
        self.tree.menu_mut(self.current).selected = None;
        effects.push(Effect::Redraw(self.current));
    }

    fn on_moved(&mut self, window: MenuId, position: Point) {
        if let Some(menu) = self.chain_menu(window) {
            self.tree.menu_mut(menu).position = position;
        }
    }

    /// Choose `item`: open its submenu, or finish with its output
    fn select(&mut self, item: ItemId, effects: &mut Vec<Effect>) {
        let item = self.tree.item(item);
        if item.is_separator() {
            return;
        }
        match (item.submenu(), item.output()) {
            (Some(submenu), _) => {
                log::debug!("entering menu {}", submenu.index());
                self.current = submenu;
                self.show_current(effects);
                let first = self.tree.menu(submenu).first_item();
                self.tree.menu_mut(submenu).selected = first;
                effects.push(Effect::Redraw(self.current));
                effects.push(Effect::Warp(self.current));
            }
            (None, Some(output)) => {
                let output = output.to_string();
                self.finish(Outcome::Chosen(output), effects);
            }
            (None, None) => {}
        }
    }

    /// Move up to the parent of the current menu, if there is one
    fn ascend(&mut self, effects: &mut Vec<Effect>) {
        let Some(parent) = self.tree.menu(self.current).parent() else {
            return;
        };
        log::debug!(
            "leaving menu {} for {}",
            self.current.index(),
            parent.index()
        );
        self.current = parent;
        self.show_current(effects);
        effects.push(Effect::Warp(self.current));
    }

    /// Move the selection of the current menu, skipping separators and
    /// wrapping at either end
    fn cycle(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        let item = self.cycle_target(direction);
        self.tree.menu_mut(self.current).selected = item;
        effects.push(Effect::Redraw(self.current));
    }

    fn cycle_target(&self, direction: Direction) -> Option<ItemId> {
        let menu = self.tree.menu(self.current);
        let step = |id: ItemId| match direction {
            Direction::Next => self.tree.item(id).next(),
            Direction::Prev => self.tree.item(id).prev(),
        };
        let wrap_to = match direction {
            Direction::Next => menu.first_item(),
            Direction::Prev => menu.last_item(),
        };

        let mut candidate = menu.selected().map_or(wrap_to, step);
        while let Some(id) = candidate {
            if !self.tree.item(id).is_separator() {
                break;
            }
            candidate = step(id);
        }
        // Running off the end wraps without skipping again, so a separator
        // at the wrap point can be selected.
        candidate.or(wrap_to)
    }

    /// Bring the mapped chain in line with the current menu: unmap from the
    /// previously mapped menu up to the lowest common ancestor, then map from
    /// the current menu up to it.
    fn show_current(&mut self, effects: &mut Vec<Effect>) {
        let current = self.current;
        let Some(previous) = self.mapped else {
            effects.push(Effect::Map(current));
            self.mapped = Some(current);
            return;
        };
        if previous == current {
            return;
        }

        let lca = self.tree.common_ancestor(previous, current);
        let hidden: Vec<MenuId> = self
            .tree
            .ancestors(previous)
            .take_while(|&menu| menu != lca)
            .collect();
        for menu in hidden {
            self.tree.menu_mut(menu).selected = None;
            effects.push(Effect::Unmap(menu));
        }
        let shown: Vec<MenuId> = self
            .tree
            .ancestors(current)
            .take_while(|&menu| menu != lca)
            .collect();
        effects.extend(shown.into_iter().map(Effect::Map));
        self.mapped = Some(current);
    }

    fn finish(&mut self, outcome: Outcome, effects: &mut Vec<Effect>) {
        log::debug!("finished: {:?}", outcome);
        self.outcome = Some(outcome.clone());
        effects.push(Effect::Finish(outcome));
    }
}
