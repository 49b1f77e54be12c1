//! csd-rs: Charge-State Distribution Evolution
//!
//! Computes how the charge-state distribution (CSD) of ions trapped in an
//! intense electron beam evolves over time. Three processes compete:
//!
//! - electron-impact **ionization** (Lotz), moving ions up one charge state
//! - **radiative recombination** (Kim–Pratt), moving them down one state
//! - **charge exchange** with rest-gas neutrals (Salzborn–Müller), also down
//!
//! # Architecture
//!
//! Built on the same separation as any physics/numerics framework:
//!
//! 1. **Physics and numerics are separate**
//!    - Cross sections and rates are pure functions of atomic data and
//!      beam conditions
//!    - The evolution model exposes `dy/dt = M·y` through [`physics::PhysicalModel`]
//!    - Numerical solvers integrate any model
//!
//! 2. **Typed data and errors**
//!    - Element structure is validated when loaded
//!    - Every fallible call returns [`error::CsdResult`]
//!
//! # Quick Start
//!
//! ```rust
//! use csd_rs::prelude::*;
//!
//! # fn main() -> CsdResult<()> {
//! let json = r#"{
//!     "He": {
//!         "0": { "1s": { "E": 24.59, "p": 2, "a": 4.0, "b": 0.75, "c": 0.5 } },
//!         "1": { "1s": { "E": 54.42, "p": 1, "a": 4.0, "b": 0.6, "c": 0.56 } }
//!     }
//! }"#;
//! let library = ElementLibrary::from_json_str(json)?;
//!
//! let config = SimulationConfig {
//!     element: "He".to_string(),
//!     beam: BeamConditions::new(100.0, 2000.0, 100.0, 1e-10),
//!     time: TimeGrid { start: 1e-6, end: 10.0, samples: 200, max_step: 1e-5 },
//!     injected_charge_state: 0,
//! };
//!
//! let trajectory = simulate(&library, &config, &MatrixExponentialSolver::new())?;
//! let (t_peak, y_peak) = trajectory.peak(1).unwrap();
//! assert!(t_peak > 1e-6 && y_peak > 0.5);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`atomic`]: periodic table, subshell records, shell statistics
//! - [`cross_sections`]: EI, RR and CX cross sections
//! - [`models`]: rate assembly and the CSD evolution model
//! - [`physics`]: model trait and state container
//! - [`solver`]: numerical solvers
//! - [`simulation`]: end-to-end driver
//! - [`error`]: crate-wide error type

pub mod error;

// Core modules
pub mod physics;

pub mod atomic;
pub mod cross_sections;
pub mod models;
pub mod simulation;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use csd_rs::prelude::*;
    //! ```
    pub use crate::atomic::{Element, ElementDataProvider, ElementLibrary, ElementStructure};
    pub use crate::cross_sections::{cx_cross_section, ei_lotz_cross_section, rr_cross_section, CaptureOrder};
    pub use crate::error::{CsdError, CsdResult};
    pub use crate::models::{compute_rates, csd_derivative, BeamConditions, CsdEvolution, RateVectors};
    pub use crate::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};
    pub use crate::simulation::{simulate, CsdTrajectory, SimulationConfig, TimeGrid};
    pub use crate::solver::{
        EulerSolver,
        MatrixExponentialSolver,
        RK4Solver,
        Scenario,
        SimulationResult,
        Solver,
        SolverConfiguration,
        SolverType,
    };
}
