//! JSON view of a laid-out menu tree, printed by `--dump-layout`.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{MenuId, MenuTree};
use crate::domain::value_objects::{Angle, Point, Size};

#[derive(Debug, Serialize)]
pub struct LayoutView<'a> {
    pub menus: Vec<MenuView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct MenuView<'a> {
    pub id: MenuId,
    pub parent: Option<MenuId>,
    pub level: usize,
    pub position: Point,
    pub size: Size,
    pub half_slice: Angle,
    pub items: Vec<ItemView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ItemView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'a Path>,
    pub separator: bool,
    pub angle_start: Angle,
    pub angle_span: Angle,
    pub label_anchor: Point,
    pub submenu_anchor: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submenu: Option<MenuId>,
}

impl<'a> LayoutView<'a> {
    pub fn new(tree: &'a MenuTree) -> Self {
        let menus = tree
            .menu_ids()
            .map(|id| {
                let menu = tree.menu(id);
                MenuView {
                    id,
                    parent: menu.parent(),
                    level: menu.level(),
                    position: menu.position(),
                    size: menu.size(),
                    half_slice: menu.half_slice(),
                    items: tree
                        .items_of(id)
                        .map(|(_, item)| ItemView {
                            label: item.label(),
                            output: item.output(),
                            icon: item.icon(),
                            separator: item.is_separator(),
                            angle_start: item.angle_start(),
                            angle_span: item.angle_span(),
                            label_anchor: item.label_anchor(),
                            submenu_anchor: item.submenu_anchor(),
                            submenu: item.submenu(),
                        })
                        .collect(),
                }
            })
            .collect();
        Self { menus }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
