//! Colour and font resolution.
//!
//! Turns the string-typed style settings into values the renderer can use.
//! Any failure here is fatal and happens before a menu is shown.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{PieMenuError, PieResult};

use super::types::{Config, StyleConfig};

/// A resolved 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("green", Rgb::new(0x00, 0xff, 0x00)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("gray", Rgb::new(0xbe, 0xbe, 0xbe)),
    ("grey", Rgb::new(0xbe, 0xbe, 0xbe)),
    ("darkgray", Rgb::new(0xa9, 0xa9, 0xa9)),
    ("darkgrey", Rgb::new(0xa9, 0xa9, 0xa9)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
];

/// Resolve `#rgb`, `#rrggbb` or a colour name. `name` is the setting being
/// resolved, used in the error.
pub fn parse_color(name: &str, value: &str) -> PieResult<Rgb> {
    let invalid = || PieMenuError::InvalidColor {
        name: name.to_string(),
        value: value.to_string(),
    };
    let trimmed = value.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        return match hex.len() {
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 0x11);
                Ok(Rgb::new(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        };
    }

    let lower = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == lower)
        .map(|(_, rgb)| *rgb)
        .ok_or_else(invalid)
}

/// Glyph set used for labels, icons and truncation marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Unicode,
    Ascii,
}

impl FromStr for Font {
    type Err = PieMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Font::Unicode),
            "ascii" => Ok(Font::Ascii),
            _ => Err(PieMenuError::UnknownFont {
                font: s.to_string(),
            }),
        }
    }
}

/// Every colour a pie is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub selbackground: Rgb,
    pub selforeground: Rgb,
    pub separator: Rgb,
    pub border: Rgb,
}

impl Palette {
    pub fn resolve(style: &StyleConfig) -> PieResult<Self> {
        Ok(Self {
            background: parse_color("background", &style.background)?,
            foreground: parse_color("foreground", &style.foreground)?,
            selbackground: parse_color("selbackground", &style.selbackground)?,
            selforeground: parse_color("selforeground", &style.selforeground)?,
            separator: parse_color("separator", &style.separator)?,
            border: parse_color("border", &style.border)?,
        })
    }
}

/// Fully resolved drawing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub palette: Palette,
    pub font: Font,
    pub item_width: i32,
    pub padding: i32,
    pub separator_width: i32,
    pub border_width: i32,
}

impl Style {
    pub fn resolve(config: &Config) -> PieResult<Self> {
        let font = config.style.font.parse()?;
        let palette = Palette::resolve(&config.style)?;
        log::debug!("resolved style: font {:?}", font);
        Ok(Self {
            palette,
            font,
            item_width: config.geometry.item_width,
            padding: config.geometry.padding,
            separator_width: config.geometry.separator_width,
            border_width: config.geometry.border_width,
        })
    }
}
