//! Text Metrics Port

/// Font measurements needed to centre labels on their slices
pub trait TextMetrics {
    /// Rendered width of `text` in pixels
    fn text_width(&self, text: &str) -> i32;

    /// Font ascent in pixels
    fn ascent(&self) -> i32;
}
