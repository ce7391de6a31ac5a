//! Common test utilities for scenario, property and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated config directory plus helpers to run the binary
//! - Fixtures: menu inputs and a scripted session runner

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
