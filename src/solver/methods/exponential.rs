//! Exact propagation of linear time-invariant models
//!
//! For `dy/dt = M·y` with constant M the solution between two output times
//! is
//!
//! ```text
//! y(t₁) = exp(M·(t₁ − t₀))·y(t₀)
//! ```
//!
//! The matrix exponential is evaluated by nalgebra (Padé approximation with
//! scaling and squaring), so the step size is limited by the output grid
//! only. This makes it the method of choice for the stiff CSD systems of
//! heavy elements, where ionization of the low charge states is many orders
//! of magnitude faster than recombination of the high ones.

use crate::error::{CsdError, CsdResult};
use crate::physics::PhysicalData;
use crate::solver::{validate_state, Scenario, SimulationResult, Solver, SolverConfiguration};

/// Matrix-exponential propagator
///
/// Requires a model that exposes
/// [`linear_operator`](crate::physics::PhysicalModel::linear_operator);
/// every vector quantity of the state with one entry per model point is
/// propagated.
///
/// # Example
///
/// ```rust
/// use csd_rs::models::CsdEvolution;
/// use csd_rs::physics::PhysicalQuantity;
/// use csd_rs::solver::{MatrixExponentialSolver, Scenario, Solver, SolverConfiguration};
///
/// let model = CsdEvolution::new(&[1.0, 0.0], &[0.0, 0.0], &[0.0, 0.0]).unwrap();
/// let scenario = Scenario::from_model(Box::new(model));
///
/// let result = MatrixExponentialSolver::new()
///     .solve(&scenario, &SolverConfiguration::time_evolution(1.0, 1))
///     .unwrap();
///
/// let y = result.final_state.get(PhysicalQuantity::Abundance).unwrap().try_as_vector().unwrap();
/// assert!((y[0] - (-1.0f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixExponentialSolver;

impl MatrixExponentialSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for MatrixExponentialSolver {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> CsdResult<SimulationResult> {
        config.validate()?;
        scenario.validate()?;

        let model = scenario.model.as_ref();
        let operator = model.linear_operator().ok_or_else(|| {
            CsdError::Configuration(format!("{} does not expose a linear operator", model.name()))
        })?;
        if operator.nrows() != model.points() || operator.ncols() != model.points() {
            return Err(CsdError::Configuration(format!(
                "linear operator of {} is {}x{}, expected {}x{}",
                model.name(),
                operator.nrows(),
                operator.ncols(),
                model.points(),
                model.points()
            )));
        }

        let time_points = config.solver_type.time_points();
        log::debug!(
            "{}: propagating {} over {} output times",
            self.name(),
            model.name(),
            time_points.len()
        );

        let mut state = scenario.initial_state.clone();
        state.set_metadata("time".to_string(), time_points[0]);

        let mut trajectory = Vec::with_capacity(time_points.len());
        trajectory.push(state.clone());

        for (step, window) in time_points.windows(2).enumerate() {
            let propagator = (operator * (window[1] - window[0])).exp();

            for quantity in state.available_quantities() {
                if let Some(PhysicalData::Vector(y)) = state.get_mut(quantity)
                    && y.len() == propagator.ncols()
                {
                    *y = &propagator * &*y;
                }
            }
            state.set_metadata("time".to_string(), window[1]);

            validate_state(&state, step + 1)?;
            trajectory.push(state.clone());
        }

        let steps = time_points.len() - 1;
        let mut result = SimulationResult::new(time_points, trajectory, state);
        result.add_metadata("solver", self.name());
        result.add_metadata("time steps", &steps.to_string());
        result.add_metadata("matrix exponentials", &steps.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Matrix Exponential"
    }
}
