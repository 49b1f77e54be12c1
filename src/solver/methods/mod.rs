//! Numerical methods for the CSD rate equations
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! ## Explicit Time-Stepping Methods
//!
//! - **[`EulerSolver`]**: Forward Euler, first order, 1 evaluation per step
//! - **[`RK4Solver`]**: classical Runge-Kutta, fourth order, 4 evaluations per step
//!
//! Both walk the output grid of the configuration; on a logarithmic grid
//! each output interval is split into sub-steps no larger than `max_step`.
//! Explicit methods are only stable for `dt` below roughly `2.8 / max|rate|`,
//! so `max_step` must follow the fastest process of the element.
//!
//! ## Exact Propagation
//!
//! - **[`MatrixExponentialSolver`]**: `y(t₁) = exp(M·(t₁ − t₀))·y(t₀)` for
//!   models exposing a constant [`linear_operator`](crate::physics::PhysicalModel::linear_operator).
//!   Unconditionally stable, no sub-stepping.
//!
//! # Example
//!
//! ```rust
//! use csd_rs::models::CsdEvolution;
//! use csd_rs::solver::{EulerSolver, MatrixExponentialSolver, RK4Solver};
//! use csd_rs::solver::{Scenario, Solver, SolverConfiguration};
//!
//! let model = CsdEvolution::new(&[5.0, 1.0, 0.0], &[0.0, 0.2, 0.4], &[0.0, 0.1, 0.2]).unwrap();
//! let scenario = Scenario::from_model(Box::new(model));
//! let config = SolverConfiguration::logarithmic(1e-4, 10.0, 50, 1e-2);
//!
//! let exact = MatrixExponentialSolver::new().solve(&scenario, &config).unwrap();
//! let rk4 = RK4Solver::new().solve(&scenario, &config).unwrap();
//! let euler = EulerSolver::new().solve(&scenario, &config).unwrap();
//!
//! assert_eq!(exact.len(), 50);
//! assert_eq!(rk4.len(), euler.len());
//! ```

mod euler;
mod exponential;
mod rk4;

// Re-exports for convenience
pub use euler::EulerSolver;
pub use exponential::MatrixExponentialSolver;
pub use rk4::RK4Solver;

use crate::error::CsdResult;
use crate::physics::{PhysicalModel, PhysicalState};
use crate::solver::{validate_state, Scenario, SimulationResult, SolverConfiguration};

/// Shared stepping loop of the explicit methods
///
/// `step` advances the state by one sub-step `dt` starting at time `t`.
pub(crate) fn integrate<F>(
    scenario: &Scenario,
    config: &SolverConfiguration,
    solver_name: &str,
    evaluations_per_step: usize,
    step: F,
) -> CsdResult<SimulationResult>
where
    F: Fn(&dyn PhysicalModel, &PhysicalState, f64, f64) -> CsdResult<PhysicalState>,
{
    config.validate()?;
    scenario.validate()?;

    let time_points = config.solver_type.time_points();
    let model = scenario.model.as_ref();

    log::debug!(
        "{}: integrating {} over {} output times ({})",
        solver_name,
        model.name(),
        time_points.len(),
        config.solver_type.name()
    );

    let mut state = scenario.initial_state.clone();
    state.set_metadata("time".to_string(), time_points[0]);

    let mut trajectory = Vec::with_capacity(time_points.len());
    trajectory.push(state.clone());

    let mut total_steps = 0usize;
    for window in time_points.windows(2) {
        let (start, end) = (window[0], window[1]);
        let substeps = config.solver_type.substeps(end - start);
        let dt = (end - start) / substeps as f64;

        for s in 0..substeps {
            let t = start + s as f64 * dt;
            state.set_metadata("time".to_string(), t);
            state = step(model, &state, t, dt)?;
            total_steps += 1;
            validate_state(&state, total_steps)?;
        }

        state.set_metadata("time".to_string(), end);
        trajectory.push(state.clone());
    }

    log::debug!("{}: {} steps taken", solver_name, total_steps);

    let mut result = SimulationResult::new(time_points, trajectory, state);
    result.add_metadata("solver", solver_name);
    result.add_metadata("time steps", &total_steps.to_string());
    result.add_metadata("function evaluations", &(evaluations_per_step * total_steps).to_string());
    result.add_metadata("grid", config.solver_type.name());

    Ok(result)
}
