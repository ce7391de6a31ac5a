//! Drawing tokens and terminal capability detection

pub mod primitives;
pub mod terminal;
pub mod theme;
