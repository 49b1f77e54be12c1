//! Physical constants
//!
//! Rounded values as used by the published cross-section and rate formulas.
//! The rounding is part of the calibration: reference rates quoted for these
//! models were obtained with exactly these literals.

/// Boltzmann constant (J/K)
pub const K_B: f64 = 1.38e-23;

/// Elementary charge (C)
pub const E_CHARGE: f64 = 1.6e-19;

/// Atomic mass unit used to convert element masses (kg)
pub const AMU_KG: f64 = 1.6726e-27;

/// Fine-structure constant
pub const ALPHA_FS: f64 = 1.0 / 137.035;

/// Reduced electron Compton wavelength (cm)
pub const LAMBDA_E_CM: f64 = 3.86e-11;

/// Rydberg energy in the Kim–Pratt formula (eV)
pub const RYDBERG_EV: f64 = 13.605;

/// Hydrogen ionization potential, default rest-gas ionization potential (eV)
pub const HYDROGEN_IP_EV: f64 = 13.6;

/// Room temperature, default rest-gas temperature (K)
pub const ROOM_TEMPERATURE_K: f64 = 300.0;

/// Four-digit π of the Kim–Pratt norming constant and the ion thermal velocity
pub const PI_4: f64 = 3.1416;

/// Lotz cross sections are tabulated in 1e-14 cm² eV²
pub const LOTZ_SCALE_CM2: f64 = 1e-14;
