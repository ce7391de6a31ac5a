//! Pie geometry.
//!
//! Every menu is a circle of the same diameter. Item `i` of `n` is centred on
//! `i * 360 / n` degrees (counter-clockwise, 0 pointing right), its label sits
//! halfway between the centre and the rim, and the submenu it opens is centred
//! two radii away along the same direction.

use crate::domain::entities::{ItemId, MenuId, MenuTree};
use crate::domain::ports::TextMetrics;
use crate::domain::value_objects::angle::{self, Angle, FULL_TURN};
use crate::domain::value_objects::{Point, Size};

/// Shape shared by every pie surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieShape {
    pub diameter: i32,
    pub radius: i32,
    /// Width of the ring drawn around the pie
    pub border: i32,
}

impl PieShape {
    pub fn new(diameter: i32, border: i32) -> Self {
        Self {
            diameter,
            radius: (diameter + 1) / 2,
            border,
        }
    }

    /// Centre of the pie in surface-local coordinates
    pub fn center(&self) -> Point {
        Point::new(self.radius, self.radius)
    }

    /// Diameter including the border ring on both sides
    pub fn outer_diameter(&self) -> i32 {
        self.diameter + 2 * self.border
    }

    /// Whether a surface-local point lies on the pie (border excluded)
    pub fn contains(&self, local: Point) -> bool {
        let d = local - self.center();
        i64::from(d.x) * i64::from(d.x) + i64::from(d.y) * i64::from(d.y)
            <= i64::from(self.radius) * i64::from(self.radius)
    }
}

/// Lay out the whole tree: slice angles and anchors for every menu, then
/// screen positions. The root is placed around `pointer`; each submenu
/// around its caller's submenu anchor.
pub fn layout(
    tree: &mut MenuTree,
    shape: &PieShape,
    metrics: &dyn TextMetrics,
    screen: Size,
    pointer: Point,
) {
    // Allocation order puts every parent before its children.
    let menus: Vec<MenuId> = tree.menu_ids().collect();
    for menu in menus {
        place_menu(tree, menu, shape, screen, pointer);
        assign_slices(tree, menu, shape, metrics);
        log::debug!(
            "menu {} at ({}, {}) with {} slices",
            menu.index(),
            tree.menu(menu).position().x,
            tree.menu(menu).position().y,
            tree.menu(menu).slice_count()
        );
    }
}

/// Compute slice angles and label/submenu anchors for one menu.
///
/// Slice starts use truncating integer division, so for item counts that do
/// not divide `FULL_TURN` the boundaries are off by a fraction of a unit.
/// Each span reaches the next item's start, which keeps the slices a
/// partition of the circle; the last slice takes whatever remains.
pub fn assign_slices(
    tree: &mut MenuTree,
    menu: MenuId,
    shape: &PieShape,
    metrics: &dyn TextMetrics,
) {
    let items: Vec<ItemId> = tree.menu(menu).items().to_vec();
    let count = items.len();
    if count == 0 {
        return;
    }
    let half = FULL_TURN / (2 * count as i32);
    tree.menu_mut(menu).half_slice = half;

    let radius = f64::from(shape.radius);
    let ascent = metrics.ascent();

    for (index, id) in items.into_iter().enumerate() {
        let center = angle::slice_center(index, count);
        let next = angle::slice_center(index + 1, count);
        let text_width = tree
            .item(id)
            .label()
            .map(|label| metrics.text_width(label))
            .unwrap_or(0);

        let radians = angle::to_radians(center);
        let (sin, cos) = radians.sin_cos();
        let label_radius = f64::from(shape.radius / 2);

        let item = tree.item_mut(id);
        item.angle_start = angle::wrap(center - half);
        item.angle_span = next - center;
        item.label_anchor = Point::new(
            (radius + label_radius * cos - f64::from(text_width / 2)) as i32,
            (radius - label_radius * sin + f64::from(ascent / 2)) as i32,
        );
        item.submenu_anchor = Point::new(
            (radius + radius * 2.0 * cos) as i32,
            (radius - radius * 2.0 * sin) as i32,
        );
    }
}

/// Position one menu on screen, keeping it inside the screen edges
pub fn place_menu(
    tree: &mut MenuTree,
    menu: MenuId,
    shape: &PieShape,
    screen: Size,
    pointer: Point,
) {
    let anchor = menu_anchor(tree, menu, pointer);
    let position = Point::new(
        clamp_axis(anchor.x, screen.width, shape),
        clamp_axis(anchor.y, screen.height, shape),
    );
    let menu = tree.menu_mut(menu);
    menu.position = position;
    menu.size = Size::new(shape.diameter, shape.diameter);
}

/// Screen point the menu should be centred on
fn menu_anchor(tree: &MenuTree, menu: MenuId, pointer: Point) -> Point {
    let menu = tree.menu(menu);
    match (menu.parent(), menu.caller()) {
        (Some(parent), Some(caller)) => {
            tree.menu(parent).position() + tree.item(caller).submenu_anchor()
        }
        _ => pointer,
    }
}

/// Left (or top) edge for a pie centred on `coord` along an axis of `extent`
/// pixels: pinned to 0 near the start, flush with the far edge near the end,
/// centred otherwise.
pub fn clamp_axis(coord: i32, extent: i32, shape: &PieShape) -> i32 {
    if coord < shape.radius {
        0
    } else if extent - coord >= shape.radius {
        coord - shape.radius
    } else {
        coord - shape.diameter
    }
}

/// Fixed-point angle of a surface-local point around the pie centre.
/// Screen y grows downward, angles grow counter-clockwise.
pub fn pointer_angle(shape: &PieShape, local: Point) -> Angle {
    let x = f64::from(local.x - shape.radius);
    let y = -f64::from(local.y - shape.radius);
    let mut phi = y.atan2(x);
    if phi < 0.0 {
        phi += 2.0 * std::f64::consts::PI;
    }
    angle::from_radians(phi)
}

/// Surface-local point on the bisector of an item's slice, halfway to the rim
pub fn slice_midpoint(tree: &MenuTree, shape: &PieShape, item: ItemId) -> Point {
    let item = tree.item(item);
    let bisector = angle::wrap(item.angle_start() + item.angle_span() / 2);
    let (sin, cos) = angle::to_radians(bisector).sin_cos();
    let reach = f64::from(shape.radius) / 2.0;
    let center = shape.center();
    Point::new(
        center.x + (reach * cos).round() as i32,
        center.y - (reach * sin).round() as i32,
    )
}

/// Item whose slice contains the surface-local point, if any
pub fn locate_item(
    tree: &MenuTree,
    menu: Option<MenuId>,
    shape: &PieShape,
    local: Point,
) -> Option<ItemId> {
    let menu = menu?;
    let angle = pointer_angle(shape, local);
    tree.items_of(menu)
        .find(|(_, item)| angle::in_slice(angle, item.angle_start(), item.angle_span()))
        .map(|(id, _)| id)
}
