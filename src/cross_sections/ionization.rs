//! Electron-impact ionization (Lotz)
//!
//! Semi-empirical Lotz formula summed over subshells:
//!
//! ```text
//! σ = 1e-14 · Σ a·(1 − b·exp(−c·(E_e/E − 1)))·p·ln(E_e/E) / (E_e·E)   [cm²]
//! ```
//!
//! Only subshells with `0 < E < E_e` and `p > 0` contribute.
//! See W. Lotz, Z. Physik 216 (1968) 241.

use crate::atomic::constants::LOTZ_SCALE_CM2;
use crate::atomic::structure::{ChargeStateRecord, ElementStructure};
use crate::error::CsdResult;

/// Ionization cross section (cm²) of one charge-state record at electron
/// energy `electron_energy` (eV)
///
/// A bare-ion record has no subshells and yields 0.
pub fn ei_cross_section(record: &ChargeStateRecord, electron_energy: f64) -> f64 {
    let sum: f64 = record
        .iter()
        .map(|(_, subshell)| subshell)
        .filter(|s| s.population > 0 && s.binding_energy > 0.0 && s.binding_energy < electron_energy)
        .map(|s| {
            let ratio = electron_energy / s.binding_energy;
            s.a * (1.0 - s.b * (-s.c * (ratio - 1.0)).exp()) * s.population as f64 * ratio.ln()
                / (electron_energy * s.binding_energy)
        })
        .sum();

    sum * LOTZ_SCALE_CM2
}

/// Ionization cross section (cm²) of `charge_state` of an element
pub fn ei_lotz_cross_section(
    structure: &ElementStructure,
    charge_state: usize,
    electron_energy: f64,
) -> CsdResult<f64> {
    let record = structure.record(charge_state)?;
    Ok(ei_cross_section(record, electron_energy))
}

// =================================================================================================
// Lotz coefficient table
// =================================================================================================

/// Lotz fit coefficients (a, b, c) of one subshell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotzCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LotzCoefficients {
    const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Coefficients used for every subshell of ions above charge state 4
    pub const HIGHLY_CHARGED: LotzCoefficients = LotzCoefficients::new(4.5, 0.0, 0.0);
}

const fn lc(a: f64, b: f64, c: f64) -> LotzCoefficients {
    LotzCoefficients::new(a, b, c)
}

static LOTZ_1S: [LotzCoefficients; 2] = [lc(4.0, 0.6, 0.56), lc(4.0, 0.75, 0.5)];
static LOTZ_2S: [LotzCoefficients; 2] = [lc(4.0, 0.3, 0.6), lc(4.0, 0.5, 0.6)];
static LOTZ_2P: [LotzCoefficients; 6] = [
    lc(3.8, 0.6, 0.4), lc(3.5, 0.7, 0.3), lc(3.2, 0.8, 0.25),
    lc(3.0, 0.85, 0.22), lc(2.8, 0.9, 0.2), lc(2.6, 0.92, 0.19),
];
static LOTZ_3S: [LotzCoefficients; 2] = [lc(4.0, 0.0, 0.0), lc(4.0, 0.3, 0.6)];
static LOTZ_3P: [LotzCoefficients; 6] = [
    lc(4.0, 0.35, 0.6), lc(4.0, 0.4, 0.6), lc(4.0, 0.45, 0.6),
    lc(4.0, 0.5, 0.5), lc(4.0, 0.55, 0.45), lc(4.0, 0.6, 0.4),
];
static LOTZ_3D: [LotzCoefficients; 10] = [
    lc(3.7, 0.6, 0.4), lc(3.4, 0.7, 0.3), lc(3.1, 0.8, 0.25), lc(2.8, 0.85, 0.2),
    lc(2.5, 0.9, 0.18), lc(2.2, 0.92, 0.17), lc(2.0, 0.93, 0.16), lc(1.8, 0.94, 0.15),
    lc(1.6, 0.95, 0.14), lc(1.4, 0.96, 0.13),
];
static LOTZ_NS_OUTER: [LotzCoefficients; 2] = [lc(4.0, 0.0, 0.0), lc(4.0, 0.0, 0.0)];
static LOTZ_NP_OUTER: [LotzCoefficients; 6] = [
    lc(4.0, 0.0, 0.0), lc(4.0, 0.0, 0.0), lc(4.0, 0.2, 0.6),
    lc(4.0, 0.3, 0.6), lc(4.0, 0.4, 0.6), lc(4.0, 0.5, 0.5),
];
static LOTZ_4D: [LotzCoefficients; 10] = [
    lc(4.0, 0.3, 0.6), lc(3.8, 0.45, 0.5), lc(3.5, 0.6, 0.4), lc(3.2, 0.7, 0.3),
    lc(3.0, 0.8, 0.25), lc(2.8, 0.85, 0.2), lc(2.6, 0.9, 0.18), lc(2.4, 0.92, 0.17),
    lc(2.2, 0.93, 0.16), lc(2.0, 0.94, 0.15),
];
static LOTZ_NF: [LotzCoefficients; 14] = [
    lc(3.7, 0.6, 0.4), lc(3.4, 0.7, 0.3), lc(3.1, 0.8, 0.25), lc(2.8, 0.85, 0.2),
    lc(2.5, 0.9, 0.18), lc(2.2, 0.92, 0.17), lc(2.0, 0.93, 0.16), lc(1.8, 0.94, 0.15),
    lc(1.6, 0.95, 0.14), lc(1.4, 0.96, 0.13), lc(1.3, 0.96, 0.12), lc(1.2, 0.97, 0.12),
    lc(1.1, 0.97, 0.11), lc(1.0, 0.97, 0.11),
];
static LOTZ_ND_OUTER: [LotzCoefficients; 10] = [
    lc(4.0, 0.0, 0.0), lc(4.0, 0.2, 0.6), lc(3.8, 0.3, 0.6), lc(3.6, 0.45, 0.5),
    lc(3.4, 0.6, 0.4), lc(3.2, 0.7, 0.3), lc(3.0, 0.8, 0.25), lc(2.8, 0.85, 0.2),
    lc(2.6, 0.9, 0.18), lc(2.4, 0.92, 0.17),
];

fn lotz_family_table(family: &str) -> Option<&'static [LotzCoefficients]> {
    let table: &'static [LotzCoefficients] = match family {
        "1s" => &LOTZ_1S,
        "2s" => &LOTZ_2S,
        "2p" => &LOTZ_2P,
        "3s" => &LOTZ_3S,
        "3p" => &LOTZ_3P,
        "3d" => &LOTZ_3D,
        "4s" | "5s" | "6s" | "7s" => &LOTZ_NS_OUTER,
        "4p" | "5p" | "6p" => &LOTZ_NP_OUTER,
        "4d" => &LOTZ_4D,
        "4f" | "5f" => &LOTZ_NF,
        "5d" | "6d" => &LOTZ_ND_OUTER,
        _ => return None,
    };
    Some(table)
}

/// Lotz coefficients for a subshell label ("2p-", "4f+", ...)
///
/// `family_population` is the electron count of the whole nl family
/// (e.g. 2p− plus 2p+). Ions above charge state 4 use
/// [`LotzCoefficients::HIGHLY_CHARGED`]. Returns `None` for unknown
/// families and for populations outside the tabulated range.
pub fn lotz_coefficients(label: &str, family_population: u32, charge_state: usize) -> Option<LotzCoefficients> {
    let family = label.get(..2)?;
    let table = lotz_family_table(family)?;

    if charge_state > 4 {
        return Some(LotzCoefficients::HIGHLY_CHARGED);
    }
    let index = (family_population as usize).checked_sub(1)?;
    table.get(index).copied()
}
