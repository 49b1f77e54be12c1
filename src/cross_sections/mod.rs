//! Reaction cross sections of one ionic charge state
//!
//! Three independent semi-empirical models, all returning cm²:
//!
//! - [`ionization`]: electron-impact ionization, Lotz formula
//! - [`recombination`]: radiative recombination, Kim–Pratt formula
//! - [`charge_exchange`]: capture from rest-gas neutrals, Salzborn–Müller law
//!
//! All functions are pure; they may be evaluated concurrently.

pub mod charge_exchange;
pub mod ionization;
pub mod recombination;

pub use charge_exchange::{cx_cross_section, CaptureOrder};
pub use ionization::{ei_cross_section, ei_lotz_cross_section, lotz_coefficients, LotzCoefficients};
pub use recombination::rr_cross_section;
