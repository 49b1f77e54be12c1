//! Atomic reference data
//!
//! - [`constants`]: rounded physical constants of the rate formulas
//! - [`elements`]: periodic table (symbols, masses)
//! - [`structure`]: per-charge-state subshell records and their providers
//! - [`shell`]: outermost-shell statistics

pub mod constants;
pub mod elements;
pub mod shell;
pub mod structure;

pub use elements::Element;
pub use shell::{shell_stat, ShellStat};
pub use structure::{
    ChargeStateRecord,
    ElementDataProvider,
    ElementLibrary,
    ElementStructure,
    SubshellRecord,
};
