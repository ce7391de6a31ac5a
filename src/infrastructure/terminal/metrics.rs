//! Text measurement on a terminal grid.
//!
//! One column is one pixel wide and one cell is two pixels tall, so a line of
//! text has an ascent of two pixels.

use crate::config::{Font, Style};
use crate::domain::ports::TextMetrics;
use crate::domain::services::PieShape;
use crate::domain::value_objects::Size;
use crate::ui::primitives::text::{display_width, truncate};

/// Pixel height of one text row
pub const CELL_ASCENT: i32 = 2;

/// Pixel size of a terminal of `columns` by `rows` cells
pub fn screen_pixels(columns: u16, rows: u16) -> Size {
    Size::new(i32::from(columns), i32::from(rows) * 2)
}

/// Columns available to a label: the configured width, but never wider than
/// the pie minus its padding on both sides
pub fn label_columns(style: &Style, shape: &PieShape) -> usize {
    style
        .item_width
        .min(shape.diameter - 2 * style.padding)
        .max(1) as usize
}

/// Measures labels as they will be drawn, truncation included
#[derive(Debug, Clone, Copy)]
pub struct CellMetrics {
    max_columns: usize,
    font: Font,
}

impl CellMetrics {
    pub fn new(style: &Style, shape: &PieShape) -> Self {
        Self {
            max_columns: label_columns(style, shape),
            font: style.font,
        }
    }
}

impl TextMetrics for CellMetrics {
    fn text_width(&self, text: &str) -> i32 {
        display_width(&truncate(text, self.max_columns, self.font)) as i32
    }

    fn ascent(&self) -> i32 {
        CELL_ASCENT
    }
}
