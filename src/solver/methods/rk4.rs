//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method uses a weighted average of
//! four slope estimates:
//!
//! ```text
//! k₁ = f(yₙ, tₙ)
//! k₂ = f(yₙ + dt/2 * k₁, tₙ + dt/2)
//! k₃ = f(yₙ + dt/2 * k₂, tₙ + dt/2)
//! k₄ = f(yₙ + dt * k₃, tₙ + dt)
//!
//! yₙ₊₁ = yₙ + dt/6 * (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (error ~ O(dt⁴))
//! - **Stability**: for dy/dt = λy, stable while
//!   `|1 + z + z²/2 + z³/6 + z⁴/24| ≤ 1` with z = λ·dt, i.e. about
//!   2.78× the Euler limit on the negative real axis
//! - **Complexity**: 4 function evaluations per step
//!
//! The CSD rate matrix has real negative eigenvalues spanning many decades
//! (fast ionization of low charge states, slow recombination of the highest
//! ones), so `max_step` must resolve the fastest rate.

use crate::error::CsdResult;
use crate::physics::{PhysicalModel, PhysicalState};
use crate::solver::methods::integrate;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// # Example
///
/// ```rust
/// use csd_rs::solver::{RK4Solver, Solver};
///
/// let solver = RK4Solver::new();
/// assert_eq!(solver.name(), "Runge Kutta (RK4)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    pub fn new() -> Self {
        Self
    }
}

fn stage(state: &PhysicalState, slope: &PhysicalState, h: f64, t: f64) -> PhysicalState {
    let mut probe = state.clone() + slope.clone() * h;
    probe.set_metadata("time".to_string(), t);
    probe
}

fn rk4_step(model: &dyn PhysicalModel, state: &PhysicalState, t: f64, dt: f64) -> CsdResult<PhysicalState> {
    let half = dt / 2.0;

    let k1 = model.compute_physics(state)?;
    let k2 = model.compute_physics(&stage(state, &k1, half, t + half))?;
    let k3 = model.compute_physics(&stage(state, &k2, half, t + half))?;
    let k4 = model.compute_physics(&stage(state, &k3, dt, t + dt))?;

    // Simpson weights: endpoints 1/6, midpoints 1/3
    let weighted_slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;
    Ok(state.clone() + weighted_slope * (dt / 6.0))
}

impl Solver for RK4Solver {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> CsdResult<SimulationResult> {
        integrate(scenario, config, self.name(), 4, rk4_step)
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
