//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `terminal/` - Crossterm backend drawing pies on the terminal
//! - `scripted` - In-memory backend replaying a fixed event script

pub mod scripted;
pub mod terminal;

// Re-export for convenience
pub use scripted::{FixedMetrics, ScriptedBackend, Step};
pub use terminal::{screen_pixels, CellMetrics, TerminalBackend};
