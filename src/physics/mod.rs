//! Physical models
//!
//! This module provides traits and types for physical models.
//! A physical model encapsulates the equations of a system; here the
//! principal one is the charge-state distribution (CSD) balance of an ion
//! cloud trapped in an electron beam.
//!
//! # Core Concepts
//!
//! - **Physical Model**: Computes the right-hand side at a given state
//! - **Physical State**: Container for all physical quantities (abundances, ...)
//! - **Physical Quantity**: Type-safe identifier for physical variables
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to solve them (numerics)
//!
//! # Example
//!
//! ```rust
//! use csd_rs::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};
//! use csd_rs::error::CsdResult;
//!
//! struct Decay;
//!
//! impl PhysicalModel for Decay {
//!     fn points(&self) -> usize { 2 }
//!     fn compute_physics(&self, state: &PhysicalState) -> CsdResult<PhysicalState> {
//!         Ok(state.clone() * -1.0)
//!     }
//!     fn setup_initial_state(&self) -> PhysicalState {
//!         PhysicalState::new(PhysicalQuantity::Abundance, PhysicalData::from_vec(vec![1.0, 0.0]))
//!     }
//!     fn name(&self) -> &str { "Decay" }
//! }
//!
//! let model = Decay;
//! let rhs = model.compute_physics(&model.setup_initial_state()).unwrap();
//! assert!(rhs.get(PhysicalQuantity::Abundance).is_some());
//! ```

pub mod traits;
pub mod data;

pub use data::PhysicalData;
pub use traits::{
    PhysicalModel,
    PhysicalQuantity,
    PhysicalState,
};
