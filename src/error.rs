//! Typed errors for element data access, rate assembly and integration.
//!
//! Every fallible operation in the crate returns [`CsdResult`], so callers
//! can pattern-match on the failure instead of parsing strings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsdError {
    /// Element reference data is missing, malformed or inconsistent.
    #[error("Element data error for {element}{}: {reason}", charge_state_suffix(.charge_state))]
    Data {
        element: String,
        charge_state: Option<usize>,
        reason: String,
    },

    /// Caller violated a precondition (vector lengths, index ranges, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Solver or simulation configuration is not usable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Numerical integration produced non-finite values.
    #[error("Solver failed at step {step}: {message}")]
    Solver { step: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CsdResult<T> = Result<T, CsdError>;

impl CsdError {
    /// Data error attached to a whole element.
    pub fn data(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Data {
            element: element.into(),
            charge_state: None,
            reason: reason.into(),
        }
    }

    /// Data error attached to one charge state of an element.
    pub fn data_at(element: impl Into<String>, charge_state: usize, reason: impl Into<String>) -> Self {
        Self::Data {
            element: element.into(),
            charge_state: Some(charge_state),
            reason: reason.into(),
        }
    }
}

fn charge_state_suffix(charge_state: &Option<usize>) -> String {
    match charge_state {
        Some(i) => format!(" (charge state {i}+)"),
        None => String::new(),
    }
}
