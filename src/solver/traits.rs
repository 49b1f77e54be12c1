//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - Central enum `SolverType` defines the output time grid of the solution
//! - `SolverConfiguration` wraps a `SolverType`
//! - `SimulationResult` holds the trajectory sampled on that grid, plus
//!   string metadata for extensibility
//!
//! The `Solver` trait is the only seam between the rate-equation models and
//! the numerical methods.

use crate::error::{CsdError, CsdResult};
use crate::physics::{PhysicalQuantity, PhysicalState};
use crate::solver::Scenario;
use nalgebra::DMatrix;
use std::collections::HashMap;

// =================================================================================================
// Solver Type
// =================================================================================================

/// Output time grid of a time-evolution solution
///
/// # Examples
///
/// ```rust
/// use csd_rs::solver::SolverType;
///
/// // Uniform grid from t = 0
/// let uniform = SolverType::TimeEvolution { total_time: 10.0, time_steps: 1000 };
/// assert_eq!(uniform.time_points().len(), 1001);
///
/// // Logarithmic grid, integration steps capped at 1 ms
/// let log = SolverType::LogarithmicTime {
///     start_time: 1e-6,
///     end_time: 10.0,
///     samples: 1000,
///     max_step: 1e-3,
/// };
/// assert!(log.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SolverType {
    /// Uniform grid `t_n = n·T/N`, n = 0..=N
    ///
    /// # Parameters
    /// - `total_time`: Total simulation time (seconds)
    /// - `time_steps`: Number of time steps
    TimeEvolution {
        total_time: f64,
        time_steps: usize,
    },

    /// Logarithmically spaced grid from `start_time` to `end_time`
    ///
    /// The initial state is taken at `start_time`. Explicit integrators
    /// split every output interval into sub-steps no larger than `max_step`.
    ///
    /// # Parameters
    /// - `start_time`: First output time (seconds, > 0)
    /// - `end_time`: Last output time (seconds)
    /// - `samples`: Number of output times, endpoints included
    /// - `max_step`: Largest integration step (seconds)
    LogarithmicTime {
        start_time: f64,
        end_time: f64,
        samples: usize,
        max_step: f64,
    },
}

impl SolverType {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            SolverType::TimeEvolution { .. } => "TimeEvolution",
            SolverType::LogarithmicTime { .. } => "LogarithmicTime",
        }
    }

    /// Validate that parameters are physically meaningful
    pub fn validate(&self) -> CsdResult<()> {
        match self {
            SolverType::TimeEvolution { total_time, time_steps } => {
                if !(*total_time > 0.0) || !total_time.is_finite() {
                    return Err(CsdError::Configuration("Total time must be positive".to_string()));
                }
                if *time_steps == 0 {
                    return Err(CsdError::Configuration("TimeSteps must be greater than 0".to_string()));
                }
                Ok(())
            }
            SolverType::LogarithmicTime { start_time, end_time, samples, max_step } => {
                if !(*start_time > 0.0) {
                    return Err(CsdError::Configuration(format!(
                        "Start time of a logarithmic grid must be positive, got {start_time}"
                    )));
                }
                if !(*end_time > *start_time) || !end_time.is_finite() {
                    return Err(CsdError::Configuration(format!(
                        "End time ({end_time}) must be finite and greater than start time ({start_time})"
                    )));
                }
                if *samples < 2 {
                    return Err(CsdError::Configuration(format!(
                        "Logarithmic grid needs at least 2 samples, got {samples}"
                    )));
                }
                if !(*max_step > 0.0) {
                    return Err(CsdError::Configuration(format!("Maximum step must be positive, got {max_step}")));
                }
                Ok(())
            }
        }
    }

    /// Output times, first entry is the time of the initial state
    pub fn time_points(&self) -> Vec<f64> {
        match self {
            SolverType::TimeEvolution { total_time, time_steps } => {
                let dt = total_time / (*time_steps as f64);
                // computed from the index so the last point is exactly total_time
                (0..=*time_steps).map(|n| n as f64 * dt).collect()
            }
            SolverType::LogarithmicTime { start_time, end_time, samples, .. } => {
                let first = start_time.log10();
                let last = end_time.log10();
                let spacing = (last - first) / (*samples as f64 - 1.0);
                (0..*samples)
                    .map(|k| 10f64.powf(first + k as f64 * spacing))
                    .collect()
            }
        }
    }

    /// Number of integration sub-steps covering an output interval
    pub fn substeps(&self, interval: f64) -> usize {
        match self {
            SolverType::TimeEvolution { .. } => 1,
            SolverType::LogarithmicTime { max_step, .. } => ((interval / max_step).ceil() as usize).max(1),
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for numerical solver
///
/// # Examples
///
/// ```rust
/// use csd_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::logarithmic(1e-6, 10.0, 1000, 1e-4);
/// assert!(config.validate().is_ok());
///
/// let broken = SolverConfiguration::time_evolution(0.0, 10);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Type of solver and its parameters
    pub solver_type: SolverType,
}

impl SolverConfiguration {
    /// Create a new configuration with a given solver type
    pub fn new(solver_type: SolverType) -> Self {
        Self { solver_type }
    }

    /// Create a uniform time evolution configuration
    pub fn time_evolution(total_time: f64, time_steps: usize) -> Self {
        Self::new(SolverType::TimeEvolution { total_time, time_steps })
    }

    /// Create a logarithmic time grid configuration
    pub fn logarithmic(start_time: f64, end_time: f64, samples: usize, max_step: f64) -> Self {
        Self::new(SolverType::LogarithmicTime { start_time, end_time, samples, max_step })
    }

    /// Validate configuration
    pub fn validate(&self) -> CsdResult<()> {
        self.solver_type.validate()
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Trajectory produced by a solver
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Output times (seconds)
    pub time_points: Vec<f64>,

    /// State at every output time, initial state included
    pub trajectory: Vec<PhysicalState>,

    /// State at the last output time
    pub final_state: PhysicalState,

    /// Free-form information about the run (solver name, step counts, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    pub fn new(time_points: Vec<f64>, trajectory: Vec<PhysicalState>, final_state: PhysicalState) -> Self {
        Self { time_points, trajectory, final_state, metadata: HashMap::new() }
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of output times
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Vector quantity over time, one row per output time
    ///
    /// Fails if the quantity is missing from a state or is not a vector of
    /// constant length.
    pub fn vector_series(&self, quantity: PhysicalQuantity) -> CsdResult<DMatrix<f64>> {
        let rows = self
            .trajectory
            .iter()
            .map(|state| {
                state
                    .get(quantity)
                    .and_then(|data| data.try_as_vector())
                    .ok_or_else(|| CsdError::InvalidArgument(format!("{quantity} is not a vector in every state")))
            })
            .collect::<CsdResult<Vec<_>>>()?;

        let columns = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != columns) {
            return Err(CsdError::InvalidArgument(format!("{quantity} changes length along the trajectory")));
        }

        Ok(DMatrix::from_fn(rows.len(), columns, |t, j| rows[t][j]))
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Numerical method integrating a [`Scenario`] on the grid of a
/// [`SolverConfiguration`]
pub trait Solver: Send + Sync {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> CsdResult<SimulationResult>;

    fn name(&self) -> &'static str;
}

// =================================================================================================
// Tests
// =================================================================================================
