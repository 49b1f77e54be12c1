//! Helper functions for integration tests

use csd_rs::physics::PhysicalQuantity;
use csd_rs::solver::SimulationResult;
use nalgebra::DMatrix;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-300 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Mean relative error over (actual, expected) pairs
pub fn mean_relative_error(pairs: &[(f64, f64)]) -> f64 {
    let total: f64 = pairs.iter().map(|&(actual, expected)| relative_error(actual, expected)).sum();
    total / pairs.len() as f64
}

/// Abundance trajectory of a solver result, one row per output time
pub fn abundance_rows(result: &SimulationResult) -> DMatrix<f64> {
    result
        .vector_series(PhysicalQuantity::Abundance)
        .expect("every state holds an abundance vector")
}
