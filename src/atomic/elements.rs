//! Periodic table reference data (Z = 1..=109)
//!
//! Read-only static tables: chemical symbols and atomic masses in amu.

use crate::atomic::constants::AMU_KG;
use crate::error::{CsdError, CsdResult};

/// Highest atomic number with structural data
pub const MAX_ATOMIC_NUMBER: usize = 109;

/// Chemical symbols indexed by Z − 1
pub static ELEMENT_SYMBOLS: [&str; MAX_ATOMIC_NUMBER] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na",
    "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti",
    "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru",
    "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe", "Cs",
    "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy",
    "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir",
    "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra",
    "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es",
    "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt",
];

/// Atomic masses (amu) indexed by Z − 1
///
/// Z = 18 and Z = 19 hold 39.0983 and 39.948 in that order (likewise
/// Co/Ni). Reference ion velocities are calibrated against this table.
pub static ELEMENT_MASSES: [f64; MAX_ATOMIC_NUMBER] = [
    1.0079, 4.0026, 6.941, 9.0122, 10.811, 12.0107, 14.0067, 15.9994,
    18.9984, 20.1797, 22.9897, 24.305, 26.9815, 28.0855, 30.9738, 32.065,
    35.453, 39.0983, 39.948, 40.078, 44.9559, 47.867, 50.9415, 51.9961,
    54.938, 55.845, 58.6934, 58.9332, 63.546, 65.39, 69.723, 72.64,
    74.9216, 78.96, 79.904, 83.8, 85.4678, 87.62, 88.9059, 91.224, 92.9064,
    95.94, 98.0, 101.07, 102.9055, 106.42, 107.8682, 112.411, 114.818, 118.71,
    121.76, 126.9045, 127.6, 131.293, 132.9055, 137.327, 138.9055, 140.116,
    140.9077, 144.24, 145.0, 150.36, 151.964, 157.25, 158.9253, 162.5, 164.9303,
    167.259, 168.9342, 173.04, 174.967, 178.49, 180.9479, 183.84, 186.207,
    190.23, 192.217, 195.078, 196.9665, 200.59, 204.3833, 207.2, 208.9804,
    209.0, 210.0, 222.0, 223.0, 226.0, 227.0, 231.0359, 232.0381, 237.0, 238.0289,
    243.0, 244.0, 247.0, 247.0, 251.0, 252.0, 257.0, 258.0, 259.0, 261.0, 262.0,
    262.0, 264.0, 266.0, 268.0, 272.0,
];

/// A chemical element: symbol, nuclear charge and mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    symbol: &'static str,
    atomic_number: usize,
    mass: f64,
}

impl Element {
    /// Look up an element by its chemical symbol (case-sensitive, e.g. "Ar")
    pub fn from_symbol(symbol: &str) -> CsdResult<Self> {
        ELEMENT_SYMBOLS
            .iter()
            .position(|s| *s == symbol)
            .map(|index| Self::at_index(index))
            .ok_or_else(|| CsdError::data(symbol, "unknown element symbol"))
    }

    /// Look up an element by atomic number Z
    pub fn from_atomic_number(atomic_number: usize) -> CsdResult<Self> {
        if atomic_number == 0 || atomic_number > MAX_ATOMIC_NUMBER {
            return Err(CsdError::data(
                format!("Z={atomic_number}"),
                format!("atomic number outside 1..={MAX_ATOMIC_NUMBER}"),
            ));
        }
        Ok(Self::at_index(atomic_number - 1))
    }

    fn at_index(index: usize) -> Self {
        Self {
            symbol: ELEMENT_SYMBOLS[index],
            atomic_number: index + 1,
            mass: ELEMENT_MASSES[index],
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Nuclear charge Z, also the charge state of the bare ion
    pub fn atomic_number(&self) -> usize {
        self.atomic_number
    }

    /// Atomic mass (amu)
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Ion mass (kg)
    pub fn mass_kg(&self) -> f64 {
        self.mass * AMU_KG
    }
}
