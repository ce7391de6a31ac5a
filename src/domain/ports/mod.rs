//! Domain Ports (Interfaces)
//!
//! The core never talks to a terminal or a window system directly. These
//! traits describe what it needs from one; `infrastructure` provides the
//! implementations.

pub mod display;
pub mod events;
pub mod text_metrics;

pub use display::MenuDisplay;
pub use events::{EventSource, Key, MenuEvent};
pub use text_metrics::TextMetrics;
