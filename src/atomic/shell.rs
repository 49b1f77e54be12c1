//! Outermost-shell statistics
//!
//! The Kim–Pratt recombination formula needs the principal quantum number
//! of the outermost shell and how full it is. Subshell populations are
//! summed per principal shell; the shell with the highest principal
//! quantum number present in the record is the outermost one.

use crate::atomic::structure::{principal_quantum_number, ElementStructure};
use crate::error::{CsdError, CsdResult};
use std::collections::BTreeMap;

/// Capacity 2n² of principal shells n = 1..=7
pub const SHELL_CAPACITIES: [u32; 7] = [2, 8, 18, 32, 50, 72, 98];

/// Occupancy of the outermost shell of one charge state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellStat {
    pub principal_quantum_number: u8,
    pub shell_capacity: u32,
    pub shell_population: u32,
}

impl ShellStat {
    /// Statistics reported for a bare ion: an empty K shell
    pub const BARE: ShellStat = ShellStat {
        principal_quantum_number: 1,
        shell_capacity: 2,
        shell_population: 0,
    };

    /// Fraction of the shell that is empty
    pub fn vacancy_fraction(&self) -> f64 {
        let capacity = self.shell_capacity as f64;
        (capacity - self.shell_population as f64) / capacity
    }
}

/// Capacity of principal shell `n`, `None` above n = 7
pub fn shell_capacity(n: u8) -> Option<u32> {
    match n {
        1..=7 => Some(SHELL_CAPACITIES[n as usize - 1]),
        _ => None,
    }
}

/// Outermost-shell statistics of `charge_state`
///
/// The bare ion (`charge_state == Z`) reports [`ShellStat::BARE`].
pub fn shell_stat(structure: &ElementStructure, charge_state: usize) -> CsdResult<ShellStat> {
    let record = structure.record(charge_state)?;
    if charge_state == structure.nuclear_charge() {
        return Ok(ShellStat::BARE);
    }

    let symbol = structure.element().symbol();
    let mut shells: BTreeMap<u8, u32> = BTreeMap::new();
    for (label, subshell) in record.iter() {
        let n = principal_quantum_number(label).ok_or_else(|| {
            CsdError::data_at(symbol, charge_state, format!("subshell label '{label}' has no principal quantum number"))
        })?;
        *shells.entry(n).or_insert(0) += subshell.population;
    }

    let (&n, &population) = shells
        .iter()
        .next_back()
        .ok_or_else(|| CsdError::data_at(symbol, charge_state, "no subshells for a non-bare charge state"))?;

    let capacity = shell_capacity(n).ok_or_else(|| {
        CsdError::data_at(symbol, charge_state, format!("no shell capacity for principal quantum number {n}"))
    })?;

    Ok(ShellStat {
        principal_quantum_number: n,
        shell_capacity: capacity,
        shell_population: population,
    })
}
