//! Menu tree arena
//!
//! Menus and items live in two flat vectors owned by `MenuTree`. Parent,
//! caller and sibling links are plain indices, so the tree can be walked in
//! both directions without shared ownership and dropped in one piece.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Serialize;

use crate::domain::value_objects::{Angle, Point, Size};

/// Stable handle of a menu inside its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MenuId(usize);

impl MenuId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable handle of an item inside its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A labelled slice of a pie menu
#[derive(Debug, Clone)]
pub struct Item {
    label: Option<Rc<str>>,
    output: Option<Rc<str>>,
    icon: Option<PathBuf>,
    menu: MenuId,
    prev: Option<ItemId>,
    next: Option<ItemId>,
    submenu: Option<MenuId>,
    /// Wrapped start of the slice on the parent pie
    pub(crate) angle_start: Angle,
    /// Angular width of the slice
    pub(crate) angle_span: Angle,
    /// Label origin, relative to the menu's top-left corner
    pub(crate) label_anchor: Point,
    /// Centre of the submenu spawned by this item, relative to the menu
    pub(crate) submenu_anchor: Point,
}

impl Item {
    /// Label drawn on the slice; `None` for separators
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// String printed when the item is chosen; `None` for separators
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// True when label and output are the same allocation
    pub fn output_is_label(&self) -> bool {
        match (&self.label, &self.output) {
            (Some(label), Some(output)) => Rc::ptr_eq(label, output),
            _ => false,
        }
    }

    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    pub fn is_separator(&self) -> bool {
        self.label.is_none()
    }

    /// Menu this item belongs to
    pub fn menu(&self) -> MenuId {
        self.menu
    }

    pub fn prev(&self) -> Option<ItemId> {
        self.prev
    }

    pub fn next(&self) -> Option<ItemId> {
        self.next
    }

    pub fn submenu(&self) -> Option<MenuId> {
        self.submenu
    }

    pub fn angle_start(&self) -> Angle {
        self.angle_start
    }

    pub fn angle_span(&self) -> Angle {
        self.angle_span
    }

    pub fn label_anchor(&self) -> Point {
        self.label_anchor
    }

    pub fn submenu_anchor(&self) -> Point {
        self.submenu_anchor
    }
}

/// A pie menu: an ordered list of items plus its screen geometry
#[derive(Debug, Clone)]
pub struct Menu {
    parent: Option<MenuId>,
    caller: Option<ItemId>,
    items: Vec<ItemId>,
    level: usize,
    pub(crate) selected: Option<ItemId>,
    pub(crate) half_slice: Angle,
    pub(crate) position: Point,
    pub(crate) size: Size,
}

impl Menu {
    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    /// Item of the parent menu that opens this menu
    pub fn caller(&self) -> Option<ItemId> {
        self.caller
    }

    /// Items in display order
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn first_item(&self) -> Option<ItemId> {
        self.items.first().copied()
    }

    pub fn last_item(&self) -> Option<ItemId> {
        self.items.last().copied()
    }

    /// Number of slices the pie is divided into
    pub fn slice_count(&self) -> usize {
        self.items.len()
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn half_slice(&self) -> Angle {
        self.half_slice
    }

    /// Top-left corner on screen
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// Arena owning every menu and item of one invocation.
///
/// Only `TreeBuilder` creates trees, and it never hands out an empty one, so
/// `root()` is always valid.
#[derive(Debug, Clone)]
pub struct MenuTree {
    menus: Vec<Menu>,
    items: Vec<Item>,
}

impl MenuTree {
    pub(crate) fn new() -> Self {
        Self {
            menus: Vec::new(),
            items: Vec::new(),
        }
    }

    /// The first menu ever allocated
    pub fn root(&self) -> MenuId {
        MenuId(0)
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn menu(&self, id: MenuId) -> &Menu {
        &self.menus[id.0]
    }

    pub(crate) fn menu_mut(&mut self, id: MenuId) -> &mut Menu {
        &mut self.menus[id.0]
    }

    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.items[id.0]
    }

    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// All menus in allocation order (parents before their children)
    pub fn menu_ids(&self) -> impl Iterator<Item = MenuId> {
        (0..self.menus.len()).map(MenuId)
    }

    /// Items of `menu` in display order
    pub fn items_of(&self, menu: MenuId) -> impl Iterator<Item = (ItemId, &Item)> + '_ {
        self.menu(menu)
            .items
            .iter()
            .map(move |&id| (id, self.item(id)))
    }

    /// `menu`, its parent, and so on up to the root
    pub fn ancestors(&self, menu: MenuId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(menu),
        }
    }

    /// Deepest menu that is an ancestor of (or equal to) both `a` and `b`
    pub fn common_ancestor(&self, a: MenuId, b: MenuId) -> MenuId {
        let (mut deep, mut shallow) = if self.menu(a).level >= self.menu(b).level {
            (a, b)
        } else {
            (b, a)
        };
        while self.menu(deep).level > self.menu(shallow).level {
            deep = self.parent_or_self(deep);
        }
        while deep != shallow {
            deep = self.parent_or_self(deep);
            shallow = self.parent_or_self(shallow);
        }
        deep
    }

    fn parent_or_self(&self, menu: MenuId) -> MenuId {
        self.menu(menu).parent.unwrap_or(menu)
    }

    /// Allocate an empty menu. Callers must append an item right away.
    pub(crate) fn push_menu(
        &mut self,
        parent: Option<MenuId>,
        caller: Option<ItemId>,
        level: usize,
    ) -> MenuId {
        let id = MenuId(self.menus.len());
        self.menus.push(Menu {
            parent,
            caller,
            items: Vec::new(),
            level,
            selected: None,
            half_slice: 0,
            position: Point::default(),
            size: Size::default(),
        });
        if let Some(caller) = caller {
            self.item_mut(caller).submenu = Some(id);
        }
        id
    }

    /// Append an item to the tail of `menu`, linking it to its predecessor
    pub(crate) fn push_item(
        &mut self,
        menu: MenuId,
        label: Option<Rc<str>>,
        output: Option<Rc<str>>,
        icon: Option<PathBuf>,
    ) -> ItemId {
        let id = ItemId(self.items.len());
        let prev = self.menu(menu).last_item();
        self.items.push(Item {
            label,
            output,
            icon,
            menu,
            prev,
            next: None,
            submenu: None,
            angle_start: 0,
            angle_span: 0,
            label_anchor: Point::default(),
            submenu_anchor: Point::default(),
        });
        if let Some(prev) = prev {
            self.item_mut(prev).next = Some(id);
        }
        self.menu_mut(menu).items.push(id);
        id
    }
}

/// Iterator over a menu and its ancestors
pub struct Ancestors<'a> {
    tree: &'a MenuTree,
    next: Option<MenuId>,
}

impl Iterator for Ancestors<'_> {
    type Item = MenuId;

    fn next(&mut self) -> Option<MenuId> {
        let current = self.next?;
        self.next = self.tree.menu(current).parent;
        Some(current)
    }
}
