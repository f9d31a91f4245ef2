//! Integration testing library for RuleRoller.
//!
//! This library provides utilities for running the whole pipeline (load,
//! resolve, emit and render) against configuration documents written to a
//! temporary directory.

pub mod fixtures;
pub mod helpers;

// Re-export commonly used types for convenience
pub use helpers::{init_test_logging, parse_rules, ConfigWorkspace};
