//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - The JSON view of a laid-out tree
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `layout_view` - Serializable snapshot of menus, slices and anchors

pub mod cli;
pub mod layout_view;

pub use cli::Cli;
pub use layout_view::LayoutView;
