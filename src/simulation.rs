//! End-to-end charge-state distribution runs
//!
//! [`simulate`] chains the whole pipeline for one element:
//!
//! 1. look up the element structure in an [`ElementDataProvider`]
//! 2. compute EI/RR/CX rates of every charge state 0..=Z
//! 3. build the [`CsdEvolution`] model, starting from the injected charge state
//! 4. integrate on a logarithmic time grid with any [`Solver`]
//!
//! # Example
//!
//! ```rust
//! use csd_rs::atomic::ElementLibrary;
//! use csd_rs::models::BeamConditions;
//! use csd_rs::simulation::{simulate, SimulationConfig, TimeGrid};
//! use csd_rs::solver::MatrixExponentialSolver;
//!
//! let json = r#"{ "H": { "0": { "1s": { "E": 13.6, "p": 1, "a": 4.0, "b": 0.6, "c": 0.56 } } } }"#;
//! let library = ElementLibrary::from_json_str(json).unwrap();
//!
//! let config = SimulationConfig {
//!     element: "H".to_string(),
//!     beam: BeamConditions::new(100.0, 1000.0, 100.0, 1e-10),
//!     time: TimeGrid { start: 1e-6, end: 1.0, samples: 50, max_step: 1e-6 },
//!     injected_charge_state: 0,
//! };
//!
//! let trajectory = simulate(&library, &config, &MatrixExponentialSolver::new()).unwrap();
//! let last = trajectory.final_distribution();
//! assert!(last[1] > 0.99);
//! ```

use crate::atomic::ElementDataProvider;
use crate::error::{CsdError, CsdResult};
use crate::models::{compute_rates, BeamConditions, CsdEvolution, RateVectors};
use crate::physics::PhysicalQuantity;
use crate::solver::{Scenario, Solver, SolverConfiguration};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::path::Path;

// =================================================================================================
// Configuration
// =================================================================================================

/// Logarithmic output grid of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeGrid {
    /// First output time (s)
    pub start: f64,
    /// Last output time (s)
    pub end: f64,
    /// Number of output times
    pub samples: usize,
    /// Largest step of the explicit integrators (s)
    pub max_step: f64,
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self { start: 1e-6, end: 10.0, samples: 1000, max_step: 1e-6 }
    }
}

impl TimeGrid {
    pub fn solver_configuration(&self) -> SolverConfiguration {
        SolverConfiguration::logarithmic(self.start, self.end, self.samples, self.max_step)
    }
}

/// Parameters of one simulation run
///
/// `Default` is gold at 32.5 keV and 5000 A/cm² in a 1e-10 mbar hydrogen
/// rest gas, injected as neutral atoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Element symbol ("Au", "Ar", ...)
    pub element: String,

    pub beam: BeamConditions,

    #[serde(default)]
    pub time: TimeGrid,

    /// Charge state holding all ions at the start (0 = gas injection)
    #[serde(default)]
    pub injected_charge_state: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            element: "Au".to_string(),
            beam: BeamConditions::new(5000.0, 32500.0, 300.0, 1e-10),
            time: TimeGrid::default(),
            injected_charge_state: 0,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> CsdResult<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CsdResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loading simulation configuration from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Check the time grid
    ///
    /// Beam parameters are not rejected here; non-physical values surface as
    /// warnings during rate assembly.
    pub fn validate(&self) -> CsdResult<()> {
        if self.element.is_empty() {
            return Err(CsdError::Configuration("element symbol is empty".to_string()));
        }
        self.time.solver_configuration().validate()
    }
}

// =================================================================================================
// Initial distribution
// =================================================================================================

/// Unit abundance in `injected_charge_state`, zero elsewhere
pub fn initial_distribution(charge_states: usize, injected_charge_state: usize) -> CsdResult<DVector<f64>> {
    if injected_charge_state >= charge_states {
        return Err(CsdError::InvalidArgument(format!(
            "injected charge state {injected_charge_state} outside 0..{charge_states}"
        )));
    }
    let mut abundances = DVector::zeros(charge_states);
    abundances[injected_charge_state] = 1.0;
    Ok(abundances)
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Abundance of every charge state over time
#[derive(Debug, Clone)]
pub struct CsdTrajectory {
    pub element: String,
    pub charge_states: Vec<usize>,
    pub time_points: Vec<f64>,
    /// One row per output time, one column per charge state
    pub abundances: DMatrix<f64>,
    pub rates: RateVectors,
}

impl CsdTrajectory {
    fn column_of(&self, charge_state: usize) -> Option<usize> {
        self.charge_states.iter().position(|&i| i == charge_state)
    }

    /// Abundance of one charge state at every output time
    pub fn abundance(&self, charge_state: usize) -> Option<Vec<f64>> {
        let column = self.column_of(charge_state)?;
        Some(self.abundances.column(column).iter().copied().collect())
    }

    /// Time and value of the maximum abundance of one charge state
    pub fn peak(&self, charge_state: usize) -> Option<(f64, f64)> {
        let column = self.column_of(charge_state)?;
        self.abundances
            .column(column)
            .iter()
            .zip(&self.time_points)
            .fold(None, |best: Option<(f64, f64)>, (&y, &t)| match best {
                Some((_, max)) if max >= y => best,
                _ => Some((t, y)),
            })
    }

    /// Abundances at the last output time
    pub fn final_distribution(&self) -> DVector<f64> {
        match self.abundances.nrows() {
            0 => DVector::zeros(self.abundances.ncols()),
            rows => self.abundances.row(rows - 1).transpose(),
        }
    }

    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }
}

// =================================================================================================
// Driver
// =================================================================================================

/// Run one charge-state distribution simulation
pub fn simulate(
    provider: &dyn ElementDataProvider,
    config: &SimulationConfig,
    solver: &dyn Solver,
) -> CsdResult<CsdTrajectory> {
    config.validate()?;

    let structure = provider.structure(&config.element)?;
    let charge_states = structure.charge_states();
    let rates = compute_rates(structure, &config.beam, &charge_states)?;

    let initial = initial_distribution(charge_states.len(), config.injected_charge_state)?;
    let model = CsdEvolution::from_rates(&rates)?
        .with_initial_abundances(initial)?
        .with_name(format!("{} charge-state distribution", config.element));

    log::info!(
        "Simulating {} ({} charge states) with {}",
        config.element,
        charge_states.len(),
        solver.name()
    );

    let scenario = Scenario::from_model(Box::new(model));
    let result = solver.solve(&scenario, &config.time.solver_configuration())?;
    let abundances = result.vector_series(PhysicalQuantity::Abundance)?;

    Ok(CsdTrajectory {
        element: config.element.clone(),
        charge_states,
        time_points: result.time_points,
        abundances,
        rates,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
