//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::PieShape;
use crate::error::PieResult;

use super::loader::{self, ConfigWarning, Problem};

/// Pie dimensions, in pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Ring drawn around each pie
    pub border_width: i32,
    /// Thickness of the lines between slices
    pub separator_width: i32,
    /// Inset between a label and the ring
    pub padding: i32,
    /// Label columns shown before truncation
    pub item_width: i32,
    /// Diameter shared by every pie
    pub diameter: i32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            border_width: 1,
            separator_width: 1,
            padding: 1,
            item_width: 10,
            diameter: 24,
        }
    }
}

impl GeometryConfig {
    pub fn shape(&self) -> PieShape {
        PieShape::new(self.diameter, self.border_width)
    }

    /// Largest value accepted for `key`. Keeps the pixel arithmetic and the
    /// painted area bounded.
    pub fn max_value(key: &str) -> i32 {
        match key {
            "diameter" => 4096,
            "item_width" => 512,
            _ => 256,
        }
    }

    /// Check a value for `key`, or say what is wrong with it
    pub(crate) fn check(key: &str, value: i32) -> Result<i32, Problem> {
        let max = Self::max_value(key);
        if value <= 0 {
            Err(Problem::NotPositive(i64::from(value)))
        } else if value > max {
            Err(Problem::TooLarge {
                value: i64::from(value),
                max,
            })
        } else {
            Ok(value)
        }
    }

    pub(crate) fn fields_mut(&mut self) -> [(&'static str, &mut i32); 5] {
        [
            ("border_width", &mut self.border_width),
            ("separator_width", &mut self.separator_width),
            ("padding", &mut self.padding),
            ("item_width", &mut self.item_width),
            ("diameter", &mut self.diameter),
        ]
    }
}

/// Glyph set and colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font: String,
    pub background: String,
    pub foreground: String,
    pub selbackground: String,
    pub selforeground: String,
    pub separator: String,
    pub border: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font: "unicode".to_string(),
            background: "#222222".to_string(),
            foreground: "#cccccc".to_string(),
            selbackground: "#3584e4".to_string(),
            selforeground: "#ffffff".to_string(),
            separator: "#555555".to_string(),
            border: "#000000".to_string(),
        }
    }
}

impl StyleConfig {
    pub(crate) fn fields_mut(&mut self) -> [(&'static str, &mut String); 7] {
        [
            ("font", &mut self.font),
            ("background", &mut self.background),
            ("foreground", &mut self.foreground),
            ("selbackground", &mut self.selbackground),
            ("selforeground", &mut self.selforeground),
            ("separator", &mut self.separator),
            ("border", &mut self.border),
        ]
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub geometry: GeometryConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PieResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PieResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `explicit`, the user config, or defaults, with environment
    /// overrides
    pub fn resolve(explicit: Option<&Path>) -> PieResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit)
    }

    /// Apply environment variable overrides (PIEMENU_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Reset out-of-range numbers to their defaults, one warning each
    pub fn sanitize(&mut self, source: &str) -> Vec<ConfigWarning> {
        let mut defaults = GeometryConfig::default();
        let mut warnings = Vec::new();
        for ((key, value), (_, default)) in self
            .geometry
            .fields_mut()
            .into_iter()
            .zip(defaults.fields_mut())
        {
            if let Err(problem) = GeometryConfig::check(key, *value) {
                warnings.push(ConfigWarning {
                    key: key.to_string(),
                    source: source.to_string(),
                    line: None,
                    problem,
                });
                *value = *default;
            }
        }
        warnings
    }
}
