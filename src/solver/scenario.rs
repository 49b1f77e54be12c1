//! Simulation scenario definition
//!
//! A scenario combines a physical model with its initial state.

use crate::error::{CsdError, CsdResult};
use crate::physics::traits::{PhysicalModel, PhysicalState};

/// Simulation scenario
///
/// The "WHAT to solve": the same scenario can be solved with different
/// numerical methods.
///
/// # Examples
///
/// ```rust
/// use csd_rs::models::CsdEvolution;
/// use csd_rs::solver::{RK4Solver, Scenario, Solver, SolverConfiguration};
///
/// let model = CsdEvolution::new(&[2.0, 0.0], &[0.0, 0.5], &[0.0, 0.5]).unwrap();
/// let scenario = Scenario::from_model(Box::new(model));
///
/// let result = RK4Solver::new()
///     .solve(&scenario, &SolverConfiguration::time_evolution(1.0, 100))
///     .unwrap();
/// assert_eq!(result.len(), 101);
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// State at the first output time
    pub initial_state: PhysicalState,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, initial_state: PhysicalState) -> Self {
        Self { model, initial_state }
    }

    /// Scenario starting from the model's own initial state
    pub fn from_model(model: Box<dyn PhysicalModel>) -> Self {
        let initial_state = model.setup_initial_state();
        Self { model, initial_state }
    }

    /// Check that the initial state fits the model
    pub fn validate(&self) -> CsdResult<()> {
        let quantities = self.initial_state.available_quantities();
        if quantities.is_empty() {
            return Err(CsdError::Configuration(format!(
                "initial state of {} holds no quantity",
                self.model.name()
            )));
        }

        let points = self.model.points();
        for quantity in quantities {
            if let Some(vector) = self.initial_state.get(quantity).and_then(|d| d.try_as_vector())
                && vector.len() != points
            {
                return Err(CsdError::Configuration(format!(
                    "initial {quantity} has {} entries, {} expects {points}",
                    vector.len(),
                    self.model.name()
                )));
            }
        }
        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("points", &self.model.points())
            .field("initial state", &self.initial_state)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
