use crate::config::Font;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Drawn before the label of an item that names an image
    Image,
    /// Appended to a label cut short
    Ellipsis,
}

impl Icon {
    pub fn render(&self, font: Font) -> &'static str {
        match (font, self) {
            (Font::Unicode, Icon::Image) => theme::glyphs::ICON,
            (Font::Unicode, Icon::Ellipsis) => theme::glyphs::ELLIPSIS,
            (Font::Ascii, Icon::Image) => theme::glyphs_ascii::ICON,
            (Font::Ascii, Icon::Ellipsis) => theme::glyphs_ascii::ELLIPSIS,
        }
    }
}
