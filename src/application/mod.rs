//! Application Layer
//!
//! Use cases that orchestrate the menu flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `prepare` - Parse stdin, build the tree, lay it out
//! - `run_session` - Event loop feeding a backend's events to the navigator

pub mod session;

pub use session::{prepare, run_session, Placement};
