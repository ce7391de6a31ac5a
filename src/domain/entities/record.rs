//! Parsed menu entry

use std::path::PathBuf;

/// One entry of the input list, already split into its fields.
///
/// `label == None` marks a separator. `output == None` means the entry had no
/// output field and prints its label when chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuRecord {
    /// Nesting depth (number of leading tabs)
    pub level: usize,
    pub label: Option<String>,
    pub output: Option<String>,
    pub icon: Option<PathBuf>,
    /// 1-based source line, for diagnostics
    pub line: usize,
}

impl MenuRecord {
    /// Entry whose output is its label
    pub fn new(level: usize, label: impl Into<String>) -> Self {
        Self {
            level,
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Entry with a distinct output string
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Entry with an icon file
    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Attach the source line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Non-selectable separator entry
    pub fn separator(level: usize) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}
