//! Domain Value Objects
//!
//! Immutable value types shared by the tree, the geometry engine and the
//! navigation state machine.

pub mod angle;
mod point;

pub use angle::Angle;
pub use point::{Point, Size};
