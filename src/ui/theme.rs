/// Design tokens for pie drawing.
///
/// All glyphs drawn on a pie must be sourced from this module.
pub mod glyphs {
    /// Stand-in for an item's image
    pub const ICON: &str = "◆";
    /// Marks a truncated label
    pub const ELLIPSIS: &str = "…";
    /// Upper half block; foreground paints the top pixel, background the bottom
    pub const UPPER_HALF: char = '▀';
    pub const LOWER_HALF: char = '▄';
}

pub mod glyphs_ascii {
    pub const ICON: &str = "*";
    pub const ELLIPSIS: &str = "~";
}

/// Terminal colours used when the terminal cannot show 24-bit colour:
/// the 6x6x6 cube of the 256-colour palette starts at this index.
pub const ANSI_CUBE_START: u8 = 16;

/// Channel levels of the 256-colour cube
pub const ANSI_CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
