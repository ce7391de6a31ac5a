//! Domain Layer
//!
//! The pie-menu core: pure logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Menu tree arena and parsed records
//! - `value_objects/` - Fixed-point angles, points and sizes
//! - `services/` - Tree builder, geometry engine, navigation state machine
//! - `ports/` - Interfaces for the display, input and font collaborators

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
