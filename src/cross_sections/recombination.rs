//! Radiative recombination (Kim–Pratt)
//!
//! ```text
//! q_eff = (Z + i) / 2
//! χ     = 2·q_eff²·Ry / E_e
//! n_eff = n + (1 − w) − 0.3,   w = vacancy fraction of the outermost shell
//! σ     = C·α·λe²·χ·ln(1 + χ / (2·n_eff²)),   C = 8π / (3√3)   [cm²]
//! ```
//!
//! See Y. S. Kim and R. H. Pratt, Phys. Rev. A 27 (1983) 2913.

use crate::atomic::constants::{ALPHA_FS, LAMBDA_E_CM, PI_4, RYDBERG_EV};
use crate::atomic::shell::shell_stat;
use crate::atomic::structure::ElementStructure;
use crate::error::CsdResult;

/// Radiative recombination cross section (cm²) of `charge_state` at
/// electron energy `electron_energy` (eV). Zero for the neutral atom.
pub fn rr_cross_section(
    structure: &ElementStructure,
    charge_state: usize,
    electron_energy: f64,
) -> CsdResult<f64> {
    let stat = shell_stat(structure, charge_state)?;
    if charge_state == 0 {
        return Ok(0.0);
    }

    let nuclear_charge = structure.nuclear_charge() as f64;
    let norming = 8.0 * PI_4 / (3.0 * 3.0_f64.sqrt());

    let q_eff = 0.5 * (nuclear_charge + charge_state as f64);
    let chi = 2.0 * q_eff.powi(2) * RYDBERG_EV / electron_energy;
    let n_eff = stat.principal_quantum_number as f64 + (1.0 - stat.vacancy_fraction()) - 0.3;

    Ok(norming * ALPHA_FS * LAMBDA_E_CM.powi(2) * chi * (1.0 + chi / (2.0 * n_eff.powi(2))).ln())
}
