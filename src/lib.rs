//! piemenu - hierarchical pop-up pie menus
//!
//! Reads an indented list of items, arranges each level as a circle of
//! equal slices and lets the user walk the tree with pointer or keyboard.
//! The chosen item's output is handed back to the caller.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod parser;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{prepare, run_session, Placement};
pub use config::{Config, Style};
pub use domain::entities::{Item, ItemId, Menu, MenuId, MenuRecord, MenuTree};
pub use domain::services::{build_tree, layout, Navigator, Outcome, PieShape};
pub use error::{PieMenuError, PieResult};
pub use parser::parse_records;
