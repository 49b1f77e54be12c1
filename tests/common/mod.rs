//! Common utilities for integration tests

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{aufbau_structure, fixture_library, fixture_path};
pub use test_helpers::{abundance_rows, mean_relative_error, relative_error};
