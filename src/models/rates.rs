//! Reaction rates from cross sections
//!
//! Converts the cross sections of every charge state into rates (1/s) for
//! given electron-beam and rest-gas conditions:
//!
//! ```text
//! R_EI(i) = j_e / q · σ_EI(i)
//! R_RR(i) = j_e / q · σ_RR(i)
//! R_CX(i) = n_0 · v_i · σ_CX(i, k = 1)
//! ```
//!
//! # Unit conventions
//!
//! - Ion temperature is an energy in eV, converted to joules with the
//!   elementary charge: `v_i = 100·sqrt(8·T_ion·q / (π·m_i))` cm/s.
//! - Gas temperature is in kelvin and goes through Boltzmann's constant:
//!   `n_0 = 100·P / (k_B·T_gas) · 1e-6` cm⁻³ with P in mbar.
//!
//! # Invalid inputs
//!
//! Non-physical conditions (zero energies, negative pressure) are not
//! rejected: they propagate as NaN/inf/negative rates. They are reported
//! as [`DomainWarning`]s through the `log` facade.
//!
//! # Example
//!
//! ```rust
//! use csd_rs::atomic::{ElementLibrary, ElementDataProvider};
//! use csd_rs::models::{compute_rates, BeamConditions};
//!
//! let json = r#"{ "H": { "0": { "1s": { "E": 13.6, "p": 1, "a": 4.0, "b": 0.6, "c": 0.56 } } } }"#;
//! let library = ElementLibrary::from_json_str(json).unwrap();
//! let hydrogen = library.structure("H").unwrap();
//!
//! let beam = BeamConditions::new(100.0, 1000.0, 100.0, 1e-10);
//! let rates = compute_rates(hydrogen, &beam, &hydrogen.charge_states()).unwrap();
//!
//! assert_eq!(rates.len(), 2);
//! assert!(rates.ionization[0] > 0.0);
//! assert_eq!(rates.ionization[1], 0.0);
//! ```

use crate::atomic::constants::{E_CHARGE, HYDROGEN_IP_EV, K_B, PI_4, ROOM_TEMPERATURE_K};
use crate::atomic::elements::Element;
use crate::atomic::structure::ElementStructure;
use crate::cross_sections::{cx_cross_section, ei_lotz_cross_section, rr_cross_section, CaptureOrder};
use crate::error::{CsdError, CsdResult};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Beam and gas conditions
// =================================================================================================

fn default_ionization_potential() -> f64 {
    HYDROGEN_IP_EV
}

fn default_gas_temperature() -> f64 {
    ROOM_TEMPERATURE_K
}

/// Electron-beam and rest-gas conditions of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamConditions {
    /// Electron current density (A/cm²)
    pub current_density: f64,

    /// Electron energy (eV)
    pub electron_energy: f64,

    /// Ion temperature (eV)
    pub ion_temperature: f64,

    /// Rest-gas pressure (mbar)
    pub vacuum_pressure: f64,

    /// Ionization potential of the rest gas (eV)
    #[serde(default = "default_ionization_potential")]
    pub ionization_potential: f64,

    /// Rest-gas temperature (K)
    #[serde(default = "default_gas_temperature")]
    pub gas_temperature: f64,
}

impl BeamConditions {
    /// Conditions with hydrogen-like rest gas at room temperature
    pub fn new(current_density: f64, electron_energy: f64, ion_temperature: f64, vacuum_pressure: f64) -> Self {
        Self {
            current_density,
            electron_energy,
            ion_temperature,
            vacuum_pressure,
            ionization_potential: default_ionization_potential(),
            gas_temperature: default_gas_temperature(),
        }
    }

    pub fn with_ionization_potential(mut self, ionization_potential: f64) -> Self {
        self.ionization_potential = ionization_potential;
        self
    }

    pub fn with_gas_temperature(mut self, gas_temperature: f64) -> Self {
        self.gas_temperature = gas_temperature;
        self
    }

    /// Physically invalid parameters (non-fatal)
    pub fn domain_warnings(&self) -> Vec<DomainWarning> {
        let mut warnings = Vec::new();
        let positive = [
            ("current density", self.current_density),
            ("electron energy", self.electron_energy),
            ("ion temperature", self.ion_temperature),
            ("gas temperature", self.gas_temperature),
            ("ionization potential", self.ionization_potential),
        ];
        for (parameter, value) in positive {
            if !(value > 0.0) {
                warnings.push(DomainWarning::NonPositive { parameter, value });
            }
        }
        if !(self.vacuum_pressure >= 0.0) {
            warnings.push(DomainWarning::NegativePressure(self.vacuum_pressure));
        }
        warnings
    }
}

/// Physically invalid beam or gas parameter
///
/// The arithmetic still runs; the resulting rates are non-physical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainWarning {
    NonPositive { parameter: &'static str, value: f64 },
    NegativePressure(f64),
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainWarning::NonPositive { parameter, value } => {
                write!(f, "{parameter} should be positive, got {value}")
            }
            DomainWarning::NegativePressure(p) => write!(f, "vacuum pressure should not be negative, got {p} mbar"),
        }
    }
}

// =================================================================================================
// Kinetics
// =================================================================================================

/// Neutral gas density (cm⁻³) at pressure `pressure` (mbar) and temperature
/// `gas_temperature` (K)
pub fn neutral_density(pressure: f64, gas_temperature: f64) -> f64 {
    100.0 * pressure / (K_B * gas_temperature) * 1e-6
}

/// Mean thermal ion velocity (cm/s) for ion temperature `ion_temperature` (eV)
pub fn ion_velocity(element: &Element, ion_temperature: f64) -> f64 {
    100.0 * (8.0 * ion_temperature * E_CHARGE / (PI_4 * element.mass_kg())).sqrt()
}

// =================================================================================================
// Rate vectors
// =================================================================================================

/// EI, RR and CX rates (1/s), aligned with `charge_states`
#[derive(Debug, Clone, PartialEq)]
pub struct RateVectors {
    pub charge_states: Vec<usize>,
    pub ionization: DVector<f64>,
    pub recombination: DVector<f64>,
    pub charge_exchange: DVector<f64>,
}

impl RateVectors {
    /// Assemble from raw vectors of equal length
    pub fn new(
        charge_states: Vec<usize>,
        ionization: DVector<f64>,
        recombination: DVector<f64>,
        charge_exchange: DVector<f64>,
    ) -> CsdResult<Self> {
        let n = charge_states.len();
        if ionization.len() != n || recombination.len() != n || charge_exchange.len() != n {
            return Err(CsdError::InvalidArgument(format!(
                "rate vectors must match {n} charge states, got {}, {}, {}",
                ionization.len(),
                recombination.len(),
                charge_exchange.len()
            )));
        }
        Ok(Self { charge_states, ionization, recombination, charge_exchange })
    }

    pub fn len(&self) -> usize {
        self.charge_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charge_states.is_empty()
    }

    /// Total loss rate of every charge state
    pub fn total_loss(&self) -> DVector<f64> {
        &self.ionization + &self.recombination + &self.charge_exchange
    }
}

fn rates_for_charge_state(
    structure: &ElementStructure,
    conditions: &BeamConditions,
    charge_state: usize,
    electron_flux: f64,
    neutral_flux: f64,
) -> CsdResult<(f64, f64, f64)> {
    let ei = ei_lotz_cross_section(structure, charge_state, conditions.electron_energy)?;
    let rr = rr_cross_section(structure, charge_state, conditions.electron_energy)?;
    let cx = cx_cross_section(charge_state, CaptureOrder::Single, conditions.ionization_potential);
    Ok((electron_flux * ei, electron_flux * rr, neutral_flux * cx))
}

/// Rates of every charge state in `charge_states`
///
/// Fails with [`CsdError::Data`] if a charge state exceeds Z.
pub fn compute_rates(
    structure: &ElementStructure,
    conditions: &BeamConditions,
    charge_states: &[usize],
) -> CsdResult<RateVectors> {
    let element = structure.element();
    for warning in conditions.domain_warnings() {
        log::warn!("{}: {}", element.symbol(), warning);
    }

    let electron_flux = conditions.current_density / E_CHARGE;
    let velocity = ion_velocity(element, conditions.ion_temperature);
    let density = neutral_density(conditions.vacuum_pressure, conditions.gas_temperature);
    let neutral_flux = density * velocity;

    #[cfg(feature = "parallel")]
    let triples: Vec<(f64, f64, f64)> = charge_states
        .par_iter()
        .map(|&i| rates_for_charge_state(structure, conditions, i, electron_flux, neutral_flux))
        .collect::<CsdResult<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let triples: Vec<(f64, f64, f64)> = charge_states
        .iter()
        .map(|&i| rates_for_charge_state(structure, conditions, i, electron_flux, neutral_flux))
        .collect::<CsdResult<_>>()?;

    log::debug!(
        "{}: rates for {} charge states (v_i = {:.3e} cm/s, n_0 = {:.3e} cm^-3)",
        element.symbol(),
        charge_states.len(),
        velocity,
        density
    );

    RateVectors::new(
        charge_states.to_vec(),
        DVector::from_iterator(triples.len(), triples.iter().map(|t| t.0)),
        DVector::from_iterator(triples.len(), triples.iter().map(|t| t.1)),
        DVector::from_iterator(triples.len(), triples.iter().map(|t| t.2)),
    )
}

// =================================================================================================
// Tests
// =================================================================================================
