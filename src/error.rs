//! Error types for piemenu
//!
//! Every variant is a setup-time failure: the menu is never shown once one
//! of these is returned.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for piemenu operations
pub type PieResult<T> = Result<T, PieMenuError>;

/// Main error type for piemenu operations
#[derive(Error, Debug)]
pub enum PieMenuError {
    /// Standard input held no menu entries
    #[error("no menu generated")]
    EmptyMenu,

    /// The first entry must open the root menu at level 0
    #[error("line {line}: first entry must not be indented")]
    FirstItemIndented { line: usize },

    /// A child menu may only be one level deeper than its parent
    #[error("line {line}: indentation jumps from level {from} to level {to}")]
    IndentationJump { line: usize, from: usize, to: usize },

    /// Walking up the parent chain found no menu at the requested level
    #[error("line {line}: no enclosing menu at level {level}")]
    UnresolvedLevel { line: usize, level: usize },

    /// Separators cannot open a submenu
    #[error("line {line}: a separator cannot own a submenu")]
    SeparatorWithSubmenu { line: usize },

    /// A configured colour could not be resolved
    #[error("cannot allocate color {name}: {value}")]
    InvalidColor { name: String, value: String },

    /// The configured font (glyph set) is unknown
    #[error("cannot load font: {font}")]
    UnknownFont { font: String },

    /// Configuration file failed to parse
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Exclusive input could not be acquired within the retry budget
    #[error("cannot grab pointer and keyboard after {attempts} attempts")]
    InputGrab { attempts: u32 },

    /// No usable terminal to draw on
    #[error("cannot open display: {message}")]
    DisplayUnavailable { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
