//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for solving ordinary differential equations (ODEs):
//!
//! ```text
//! dy/dt = f(y, t)
//! y_{n+1} = y_n + dt * f(y_n, t_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: Conditionally stable, `|1 + λ·dt| ≤ 1` for every
//!   eigenvalue λ of the rate matrix
//! - **Complexity**: 1 function evaluation per step
//!
//! Useful as a reference and for quick exploratory runs; production runs on
//! stiff elements should use [`MatrixExponentialSolver`](crate::solver::MatrixExponentialSolver).

use crate::error::CsdResult;
use crate::physics::{PhysicalModel, PhysicalState};
use crate::solver::methods::integrate;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Example
///
/// ```rust
/// use csd_rs::solver::{EulerSolver, Solver};
///
/// let solver = EulerSolver::new();
/// assert_eq!(solver.name(), "Forward Euler");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    pub fn new() -> Self {
        Self
    }
}

fn euler_step(model: &dyn PhysicalModel, state: &PhysicalState, _t: f64, dt: f64) -> CsdResult<PhysicalState> {
    let physics = model.compute_physics(state)?;
    Ok(state.clone() + physics * dt)
}

impl Solver for EulerSolver {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> CsdResult<SimulationResult> {
        integrate(scenario, config, self.name(), 1, euler_step)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsdError;
    use crate::physics::{PhysicalData, PhysicalQuantity};
    use approx::assert_relative_eq;

    // ====== Mock Models for Testing ======

    /// dy/dt = -k * y, exact solution y(t) = y_0 * exp(-k * t)
    struct ExponentialDecay {
        points: usize,
        decay_rate: f64,
    }

    impl PhysicalModel for ExponentialDecay {
        fn points(&self) -> usize {
            self.points
        }

        fn compute_physics(&self, state: &PhysicalState) -> CsdResult<PhysicalState> {
            let mut result = state.clone();
            if let Some(abundance) = result.get_mut(PhysicalQuantity::Abundance) {
                abundance.apply(|y| -self.decay_rate * y);
            }
            Ok(result)
        }

        fn setup_initial_state(&self) -> PhysicalState {
            PhysicalState::new(PhysicalQuantity::Abundance, PhysicalData::uniform_vector(self.points, 1.0))
        }

        fn name(&self) -> &str {
            "Exponential Decay"
        }
    }

    /// dy/dt = c, exact solution y(t) = y_0 + c * t
    struct ConstantGrowth {
        points: usize,
        growth_rate: f64,
    }

    impl PhysicalModel for ConstantGrowth {
        fn points(&self) -> usize {
            self.points
        }

        fn compute_physics(&self, _state: &PhysicalState) -> CsdResult<PhysicalState> {
            Ok(PhysicalState::new(
                PhysicalQuantity::Abundance,
                PhysicalData::uniform_vector(self.points, self.growth_rate),
            ))
        }

        fn setup_initial_state(&self) -> PhysicalState {
            PhysicalState::new(PhysicalQuantity::Abundance, PhysicalData::uniform_vector(self.points, 0.0))
        }

        fn name(&self) -> &str {
            "Constant Growth"
        }
    }

    fn final_values(result: &SimulationResult) -> Vec<f64> {
        result
            .final_state
            .get(PhysicalQuantity::Abundance)
            .and_then(|d| d.try_as_vector())
            .map(|v| v.iter().copied().collect())
            .unwrap()
    }

    #[test]
    fn test_constant_growth_is_exact() {
        let scenario = Scenario::from_model(Box::new(ConstantGrowth { points: 3, growth_rate: 2.0 }));
        let result = EulerSolver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(1.5, 30))
            .unwrap();

        assert_eq!(result.len(), 31);
        for y in final_values(&result) {
            assert_relative_eq!(y, 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_exponential_decay_first_order() {
        let coarse = Scenario::from_model(Box::new(ExponentialDecay { points: 1, decay_rate: 1.0 }));
        let exact = (-1.0f64).exp();

        let error = |steps: usize| {
            let result = EulerSolver::new()
                .solve(&coarse, &SolverConfiguration::time_evolution(1.0, steps))
                .unwrap();
            (final_values(&result)[0] - exact).abs()
        };

        let ratio = error(100) / error(200);
        assert!((ratio - 2.0).abs() < 0.1, "convergence ratio {ratio}");
    }

    #[test]
    fn test_time_metadata_tracks_output_times() {
        let scenario = Scenario::from_model(Box::new(ConstantGrowth { points: 1, growth_rate: 1.0 }));
        let result = EulerSolver::new()
            .solve(&scenario, &SolverConfiguration::logarithmic(1e-3, 1.0, 4, 0.05))
            .unwrap();

        for (state, &t) in result.trajectory.iter().zip(&result.time_points) {
            assert_eq!(state.get_metadata("time"), Some(t));
        }
        assert_eq!(result.metadata["solver"], "Forward Euler");
    }

    #[test]
    fn test_logarithmic_grid_substeps() {
        let scenario = Scenario::from_model(Box::new(ConstantGrowth { points: 1, growth_rate: 1.0 }));
        let result = EulerSolver::new()
            .solve(&scenario, &SolverConfiguration::logarithmic(1e-2, 1.0, 3, 0.25))
            .unwrap();

        // intervals 0.09 and 0.9: 1 + 4 sub-steps
        assert_eq!(result.metadata["time steps"], "5");
        assert_relative_eq!(final_values(&result)[0], 1.0 - 1e-2, epsilon = 1e-12);
    }

    #[test]
    fn test_instability_is_reported() {
        let scenario = Scenario::from_model(Box::new(ExponentialDecay { points: 1, decay_rate: 1e30 }));
        let result = EulerSolver::new().solve(&scenario, &SolverConfiguration::time_evolution(100.0, 20));
        assert!(matches!(result, Err(CsdError::Solver { .. })));
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let scenario = Scenario::from_model(Box::new(ConstantGrowth { points: 1, growth_rate: 1.0 }));
        let result = EulerSolver::new().solve(&scenario, &SolverConfiguration::time_evolution(1.0, 0));
        assert!(matches!(result, Err(CsdError::Configuration(_))));
    }
}
