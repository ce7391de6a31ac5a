//! Configuration module for piemenu
//!
//! Configuration hierarchy:
//! 1. `--config <PATH>` (highest priority)
//! 2. Environment variables (PIEMENU_*)
//! 3. User config (~/.config/piemenu/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! Settings are read once at startup and never change afterwards.

mod loader;
mod palette;
mod types;

pub use loader::{user_config_path, ConfigWarning, Problem};
pub use palette::{parse_color, Font, Palette, Rgb, Style};
pub use types::{Config, GeometryConfig, StyleConfig};
