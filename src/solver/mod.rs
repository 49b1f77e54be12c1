//! Numerical solvers
//!
//! A numerical solver applies a numerical method to the equations provided
//! by a physical model within a specific scenario.
//!
//! # Core Concepts
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (rate equations)
//!    - Initial state
//!
//! 2. **Configuration** (`SolverConfiguration`) - WHERE to report
//!    - Output time grid (uniform or logarithmic)
//!    - Largest integration step for explicit methods
//!
//! 3. **Solver** (`Solver` trait) - HOW to integrate
//!    - Applies the numerical scheme
//!    - Returns the trajectory on the output grid
//!    - Independent of physics
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────────┐
//! │ Physical Model  │     │ Solver Configuration │
//! │ + initial state │     │ (output time grid)   │
//! └────────┬────────┘     └──────────┬───────────┘
//!          │ Scenario                │
//!          └───────────┬─────────────┘
//!             ┌────────▼──────────────┐
//!             │ Solver (Euler, RK4,   │
//!             │ matrix exponential)   │
//!             └────────┬──────────────┘
//!             ┌────────▼────────────┐
//!             │ Simulation Result   │
//!             │ (trajectory + meta) │
//!             └─────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use csd_rs::models::CsdEvolution;
//! use csd_rs::physics::PhysicalQuantity;
//! use csd_rs::solver::{MatrixExponentialSolver, Scenario, Solver, SolverConfiguration};
//!
//! // 1. Scenario: three charge states, all ions neutral at the start
//! let model = CsdEvolution::new(&[4.0, 1.0, 0.0], &[0.0, 0.1, 0.2], &[0.0, 0.1, 0.1]).unwrap();
//! let scenario = Scenario::from_model(Box::new(model));
//!
//! // 2. Configuration: 1 µs to 10 s, 100 logarithmically spaced samples
//! let config = SolverConfiguration::logarithmic(1e-6, 10.0, 100, 1e-2);
//!
//! // 3. Solve
//! let result = MatrixExponentialSolver::new().solve(&scenario, &config).unwrap();
//! let abundances = result.vector_series(PhysicalQuantity::Abundance).unwrap();
//! assert_eq!(abundances.shape(), (100, 3));
//! ```
//!
//! # Error Handling
//!
//! All solver methods return [`CsdResult`](crate::error::CsdResult):
//! - invalid configuration or scenario: `CsdError::Configuration`
//! - non-finite state during integration: `CsdError::Solver`
//! - model failures are propagated unchanged

// =================================================================================================
// Module Declarations
// =================================================================================================

mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SimulationResult, Solver, SolverConfiguration, SolverType};

pub use scenario::Scenario;

pub use methods::{EulerSolver, MatrixExponentialSolver, RK4Solver};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{CsdError, CsdResult};
use crate::physics::PhysicalState;

/// Validate physical state for numerical issues
///
/// NaN or Inf values indicate numerical instability (explicit step too
/// large for the fastest rate) or non-physical rates in the model.
pub(crate) fn validate_state(state: &PhysicalState, step: usize) -> CsdResult<()> {
    for (quantity, data) in &state.quantities {
        if data.has_nan() {
            return Err(CsdError::Solver {
                step,
                message: format!(
                    "NaN detected in {quantity}. This indicates numerical instability or non-physical rates."
                ),
            });
        }

        if data.has_inf() {
            return Err(CsdError::Solver {
                step,
                message: format!(
                    "Infinity detected in {quantity}. Reduce the maximum step or use the matrix exponential solver."
                ),
            });
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{PhysicalData, PhysicalQuantity};

    #[test]
    fn test_finite_state_is_valid() {
        let state = PhysicalState::new(PhysicalQuantity::Abundance, PhysicalData::from_vec(vec![0.5, 0.5]));
        assert!(validate_state(&state, 1).is_ok());
    }

    #[test]
    fn test_nan_is_reported_with_step() {
        let state = PhysicalState::new(PhysicalQuantity::Abundance, PhysicalData::from_vec(vec![f64::NAN, 0.5]));
        match validate_state(&state, 42) {
            Err(CsdError::Solver { step, message }) => {
                assert_eq!(step, 42);
                assert!(message.contains("NaN"));
            }
            other => panic!("expected solver error, got {other:?}"),
        }
    }

    #[test]
    fn test_infinity_is_reported() {
        let state = PhysicalState::new(PhysicalQuantity::Abundance, PhysicalData::from_scalar(f64::INFINITY));
        assert!(matches!(validate_state(&state, 3), Err(CsdError::Solver { step: 3, .. })));
    }
}
