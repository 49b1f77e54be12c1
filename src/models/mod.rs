//! Rate assembly and the CSD evolution model
//!
//! [`compute_rates`] turns cross sections into per-charge-state rates for
//! given beam conditions; [`CsdEvolution`] wraps those rates into a
//! [`PhysicalModel`](crate::physics::PhysicalModel) whose state is the
//! abundance vector. The solver calls `compute_physics` at each time step:
//! the model owns the physics (ionization, recombination, capture), the
//! solver the time integration.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod csd_evolution;
pub mod rates;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use csd_evolution::{csd_derivative, transition_matrix, CsdEvolution};
pub use rates::{compute_rates, ion_velocity, neutral_density, BeamConditions, DomainWarning, RateVectors};
