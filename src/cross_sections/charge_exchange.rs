//! Charge exchange with the rest gas (Salzborn–Müller scaling)
//!
//! ```text
//! σ_k = scale_k · i^α_k · IP^β_k   [cm²]
//! ```
//!
//! for capture of k = 1..=4 electrons by an ion of charge i from a neutral
//! with ionization potential IP (eV). See Müller and Salzborn,
//! Phys. Lett. A 62 (1977) 391.

use crate::error::CsdError;

/// Number of electrons captured in one collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureOrder {
    Single,
    Double,
    Triple,
    Quadruple,
}

impl CaptureOrder {
    /// Scaling-law constants (scale, α, β)
    const fn coefficients(self) -> (f64, f64, f64) {
        match self {
            CaptureOrder::Single => (1.43e-12, 1.17, -2.76),
            CaptureOrder::Double => (1.08e-12, 0.71, -2.8),
            CaptureOrder::Triple => (5.5e-14, 2.1, -2.89),
            CaptureOrder::Quadruple => (3.57e-16, 4.2, -3.03),
        }
    }

    /// Number of captured electrons k
    pub fn electrons(self) -> u8 {
        match self {
            CaptureOrder::Single => 1,
            CaptureOrder::Double => 2,
            CaptureOrder::Triple => 3,
            CaptureOrder::Quadruple => 4,
        }
    }
}

impl TryFrom<u8> for CaptureOrder {
    type Error = CsdError;

    fn try_from(k: u8) -> Result<Self, Self::Error> {
        match k {
            1 => Ok(CaptureOrder::Single),
            2 => Ok(CaptureOrder::Double),
            3 => Ok(CaptureOrder::Triple),
            4 => Ok(CaptureOrder::Quadruple),
            other => Err(CsdError::InvalidArgument(format!(
                "capture order must be within 1..=4, got {other}"
            ))),
        }
    }
}

/// Charge-exchange cross section (cm²) of an ion in `charge_state` capturing
/// `order` electrons from a gas with ionization potential
/// `ionization_potential` (eV). Zero for the neutral atom.
#[inline]
pub fn cx_cross_section(charge_state: usize, order: CaptureOrder, ionization_potential: f64) -> f64 {
    if charge_state == 0 {
        return 0.0;
    }
    let (scale, alpha, beta) = order.coefficients();
    scale * (charge_state as f64).powf(alpha) * ionization_potential.powf(beta)
}
