//! Pixel compositor.
//!
//! Pies are painted on a grid of pixels, two per terminal cell stacked
//! vertically, and turned into half-block cells when rendered. Menus are
//! painted in mapping order so a submenu covers its ancestors, labels
//! included.

use unicode_width::UnicodeWidthChar;

use crate::config::{Font, Rgb, Style};
use crate::domain::entities::{MenuId, MenuTree};
use crate::domain::services::geometry::pointer_angle;
use crate::domain::services::PieShape;
use crate::domain::value_objects::angle::{self, Angle};
use crate::domain::value_objects::Point;
use crate::ui::primitives::text::{display_width, slice_label, truncate};
use crate::ui::theme;

use super::metrics::{label_columns, CELL_ASCENT};

/// One terminal cell ready to print. An empty symbol is the right half of
/// a wide glyph and prints nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl Cell {
    fn blank(bg: Option<Rgb>) -> Self {
        Self {
            symbol: " ".to_string(),
            fg: None,
            bg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextCell {
    Empty,
    Glyph(char, Rgb),
    /// Covered by the wide glyph on its left
    Continuation,
}

pub struct Canvas {
    columns: i32,
    rows: i32,
    pixels: Vec<Option<Rgb>>,
    text: Vec<TextCell>,
}

impl Canvas {
    pub fn new(columns: u16, rows: u16) -> Self {
        let columns = i32::from(columns);
        let rows = i32::from(rows);
        let cells = (columns * rows) as usize;
        Self {
            columns,
            rows,
            pixels: vec![None; cells * 2],
            text: vec![TextCell::Empty; cells],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns as usize
    }

    pub fn clear(&mut self) {
        self.pixels.fill(None);
        self.text.fill(TextCell::Empty);
    }

    fn pixel_index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.columns || p.y >= self.rows * 2 {
            return None;
        }
        Some((p.y * self.columns + p.x) as usize)
    }

    fn cell_index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.columns || row >= self.rows {
            return None;
        }
        Some((row * self.columns + col) as usize)
    }

    pub fn pixel(&self, p: Point) -> Option<Rgb> {
        self.pixel_index(p).and_then(|i| self.pixels[i])
    }

    fn set_pixel(&mut self, p: Point, color: Rgb) {
        if let Some(i) = self.pixel_index(p) {
            self.pixels[i] = Some(color);
            self.clear_text(p.x, p.y / 2);
        }
    }

    fn clear_text(&mut self, col: i32, row: i32) {
        let Some(i) = self.cell_index(col, row) else {
            return;
        };
        match self.text[i] {
            TextCell::Continuation => self.text[i - 1] = TextCell::Empty,
            TextCell::Glyph(ch, _) if is_wide(ch) => {
                if self.cell_index(col + 1, row).is_some() {
                    self.text[i + 1] = TextCell::Empty;
                }
            }
            _ => {}
        }
        self.text[i] = TextCell::Empty;
    }

    /// Write `text` starting at cell (`col`, `row`), clipping at the edges
    pub fn put_text(&mut self, col: i32, row: i32, text: &str, fg: Rgb) {
        let mut col = col;
        for ch in text.chars() {
            let width = UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            let fits = self.cell_index(col, row).is_some()
                && (width == 1 || self.cell_index(col + 1, row).is_some());
            if fits {
                self.clear_text(col, row);
                if width == 2 {
                    self.clear_text(col + 1, row);
                }
                if let Some(i) = self.cell_index(col, row) {
                    self.text[i] = TextCell::Glyph(ch, fg);
                    if width == 2 {
                        self.text[i + 1] = TextCell::Continuation;
                    }
                }
            }
            col += width;
        }
    }

    /// Paint one menu: ring, slices, dividers, then labels
    pub fn paint_menu(&mut self, tree: &MenuTree, menu: MenuId, shape: &PieShape, style: &Style) {
        let palette = &style.palette;
        let origin = tree.menu(menu).position();
        let center = shape.center();
        let inner = i64::from(shape.radius);
        let outer = i64::from(shape.radius + style.border_width);
        let reach = shape.radius + style.border_width;

        let dividers: Vec<Angle> = if tree.menu(menu).slice_count() > 1 {
            tree.items_of(menu).map(|(_, item)| item.angle_start()).collect()
        } else {
            Vec::new()
        };
        let half_divider = f64::from(style.separator_width) / 2.0;

        // Only the part of the pie that lands on the canvas
        let rows = (center.y - reach).max(-origin.y)
            ..=(center.y + reach).min(self.rows * 2 - 1 - origin.y);
        let cols = (center.x - reach).max(-origin.x)
            ..=(center.x + reach).min(self.columns - 1 - origin.x);

        for ly in rows {
            for lx in cols.clone() {
                let local = Point::new(lx, ly);
                let d = local - center;
                let dist2 = i64::from(d.x) * i64::from(d.x) + i64::from(d.y) * i64::from(d.y);
                let color = if dist2 > outer * outer {
                    continue;
                } else if dist2 > inner * inner {
                    palette.border
                } else if on_divider(d, &dividers, half_divider) {
                    palette.separator
                } else {
                    self.slice_color(tree, menu, shape, style, local)
                };
                self.set_pixel(origin + local, color);
            }
        }

        self.paint_labels(tree, menu, shape, style);
    }

    fn slice_color(
        &self,
        tree: &MenuTree,
        menu: MenuId,
        shape: &PieShape,
        style: &Style,
        local: Point,
    ) -> Rgb {
        let palette = &style.palette;
        let angle = pointer_angle(shape, local);
        let hit = tree
            .items_of(menu)
            .find(|(_, item)| angle::in_slice(angle, item.angle_start(), item.angle_span()));
        match hit {
            Some((_, item)) if item.is_separator() => palette.separator,
            Some((id, _)) if tree.menu(menu).selected() == Some(id) => palette.selbackground,
            _ => palette.background,
        }
    }

    fn paint_labels(&mut self, tree: &MenuTree, menu: MenuId, shape: &PieShape, style: &Style) {
        let max_columns = label_columns(style, shape);
        let origin = tree.menu(menu).position();
        let selected = tree.menu(menu).selected();

        for (id, item) in tree.items_of(menu) {
            let Some(label) = item.label() else {
                continue;
            };
            let text = slice_label(label, item.icon().is_some(), max_columns, style.font);
            let label_width = display_width(&truncate(label, max_columns, style.font)) as i32;
            let text_width = display_width(&text) as i32;

            // The anchor centres the bare label; widen around it for the icon
            let anchor = origin + item.label_anchor();
            let col = anchor.x - (text_width - label_width) / 2;
            let row = (anchor.y - CELL_ASCENT / 2).div_euclid(2);
            let fg = if selected == Some(id) {
                style.palette.selforeground
            } else {
                style.palette.foreground
            };
            self.put_text(col, row, &text, fg);
        }
    }

    /// Turn the canvas into printable cells, row by row
    pub fn render(&self, font: Font) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.text.len());
        for row in 0..self.rows {
            for col in 0..self.columns {
                let top = self.pixel(Point::new(col, row * 2));
                let bottom = self.pixel(Point::new(col, row * 2 + 1));
                let cell = match self.text[(row * self.columns + col) as usize] {
                    TextCell::Glyph(ch, fg) => Cell {
                        symbol: ch.to_string(),
                        fg: Some(fg),
                        bg: top.or(bottom),
                    },
                    TextCell::Continuation => Cell {
                        symbol: String::new(),
                        fg: None,
                        bg: None,
                    },
                    TextCell::Empty => pixel_cell(top, bottom, font),
                };
                cells.push(cell);
            }
        }
        cells
    }
}

fn is_wide(ch: char) -> bool {
    UnicodeWidthChar::width(ch) == Some(2)
}

/// Whether the offset `d` from the centre lies on one of the slice boundary
/// rays
fn on_divider(d: Point, dividers: &[Angle], half_width: f64) -> bool {
    if half_width <= 0.0 {
        return false;
    }
    let (x, y) = (f64::from(d.x), f64::from(d.y));
    dividers.iter().any(|&boundary| {
        let (sin, cos) = angle::to_radians(boundary).sin_cos();
        // Screen y grows downward
        let along = x * cos - y * sin;
        let across = (x * sin + y * cos).abs();
        along > 0.0 && across < half_width
    })
}

fn pixel_cell(top: Option<Rgb>, bottom: Option<Rgb>, font: Font) -> Cell {
    match (top, bottom) {
        (None, None) => Cell::blank(None),
        (Some(t), Some(b)) if t == b => Cell::blank(Some(t)),
        _ if font == Font::Ascii => Cell::blank(top.or(bottom)),
        (Some(t), b) => Cell {
            symbol: theme::glyphs::UPPER_HALF.to_string(),
            fg: Some(t),
            bg: b,
        },
        (None, Some(b)) => Cell {
            symbol: theme::glyphs::LOWER_HALF.to_string(),
            fg: Some(b),
            bg: None,
        },
    }
}
