//! Domain Services
//!
//! - `tree_builder` - Indentation stream to menu tree
//! - `geometry` - Slice angles, anchors, screen placement, hit testing
//! - `navigation` - Interaction state machine

pub mod geometry;
pub mod navigation;
pub mod tree_builder;

pub use geometry::{layout, locate_item, slice_midpoint, PieShape};
pub use navigation::{Effect, Navigator, Outcome};
pub use tree_builder::{build_tree, TreeBuilder};
