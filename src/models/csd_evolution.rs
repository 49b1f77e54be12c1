//! Charge-state distribution evolution
//!
//! # Mathematical Background
//!
//! The abundances y[i] of charge states i = 0..N−1 evolve under a linear,
//! time-invariant rate equation `dy/dt = M·y`. Ionization moves ions one
//! state up; recombination and charge exchange move them one state down.
//! M is tridiagonal:
//!
//! ```text
//! M[0][0]     = −rei[0]
//! M[0][1]     =  rrr[1] + rcx[1]
//!
//! M[i][i−1]   =  rei[i−1]
//! M[i][i]     = −(rei[i] + rrr[i] + rcx[i])          0 < i < N−1
//! M[i][i+1]   =  rrr[i+1] + rcx[i+1]
//!
//! M[N−1][N−2] =  rei[N−2]
//! M[N−1][N−1] = −(rrr[N−1] + rcx[N−1])
//! ```
//!
//! Boundary rows omit the channels that cannot exist: the neutral atom
//! cannot recombine and the bare ion cannot be ionized, so `rei[N−1]`,
//! `rrr[0]` and `rcx[0]` are never read. Every loss term of a state is the
//! gain term of a neighbour, hence each column of M sums to zero for any
//! rates and `Σ dy/dt = 0`: the total abundance is conserved.
//!
//! # Example
//!
//! ```rust
//! use csd_rs::models::csd_derivative;
//!
//! let rei = [1.0; 10];
//! let zeros = [0.0; 10];
//! let y = [1.0; 10];
//!
//! let dydt = csd_derivative(&y, 0.0, &rei, &zeros, &zeros).unwrap();
//! assert_eq!(dydt[0], -1.0);
//! assert_eq!(dydt[9], 1.0);
//! assert!(dydt.iter().skip(1).take(8).all(|&d| d == 0.0));
//! ```

use crate::error::{CsdError, CsdResult};
use crate::models::rates::RateVectors;
use crate::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};
use nalgebra::{DMatrix, DVector};

fn check_rate_lengths(n: usize, rei: &[f64], rrr: &[f64], rcx: &[f64]) -> CsdResult<()> {
    if n < 2 {
        return Err(CsdError::InvalidArgument(format!(
            "at least two charge states are required, got {n}"
        )));
    }
    if rei.len() != n || rrr.len() != n || rcx.len() != n {
        return Err(CsdError::InvalidArgument(format!(
            "rate vectors must have length {n}, got rei = {}, rrr = {}, rcx = {}",
            rei.len(),
            rrr.len(),
            rcx.len()
        )));
    }
    Ok(())
}

/// Tridiagonal transition matrix M of `dy/dt = M·y`
///
/// Fails with [`CsdError::InvalidArgument`] if the rate vectors differ in
/// length or hold fewer than two charge states.
pub fn transition_matrix(rei: &[f64], rrr: &[f64], rcx: &[f64]) -> CsdResult<DMatrix<f64>> {
    let n = rei.len();
    check_rate_lengths(n, rei, rrr, rcx)?;

    let mut m = DMatrix::zeros(n, n);
    let last = n - 1;

    m[(0, 0)] = -rei[0];
    m[(0, 1)] = rrr[1] + rcx[1];

    for i in 1..last {
        m[(i, i - 1)] = rei[i - 1];
        m[(i, i)] = -(rei[i] + rrr[i] + rcx[i]);
        m[(i, i + 1)] = rrr[i + 1] + rcx[i + 1];
    }

    m[(last, last - 1)] = rei[last - 1];
    m[(last, last)] = -(rrr[last] + rcx[last]);

    Ok(m)
}

/// Time derivative of the abundances
///
/// `time` is accepted for integrator compatibility and ignored: the system
/// is time-invariant.
pub fn csd_derivative(
    abundances: &[f64],
    _time: f64,
    rei: &[f64],
    rrr: &[f64],
    rcx: &[f64],
) -> CsdResult<DVector<f64>> {
    let n = abundances.len();
    check_rate_lengths(n, rei, rrr, rcx)?;

    let last = n - 1;
    let y = abundances;
    let mut dydt = DVector::zeros(n);

    dydt[0] = -rei[0] * y[0] + (rrr[1] + rcx[1]) * y[1];
    for i in 1..last {
        dydt[i] = rei[i - 1] * y[i - 1] - (rei[i] + rrr[i] + rcx[i]) * y[i] + (rrr[i + 1] + rcx[i + 1]) * y[i + 1];
    }
    dydt[last] = rei[last - 1] * y[last - 1] - (rrr[last] + rcx[last]) * y[last];

    Ok(dydt)
}

// =================================================================================================
// CSD Evolution Model
// =================================================================================================

/// Rate-equation model of one element's charge-state distribution
///
/// Holds the precomputed transition matrix; the state is the abundance
/// vector stored under [`PhysicalQuantity::Abundance`].
#[derive(Clone, Debug)]
pub struct CsdEvolution {
    matrix: DMatrix<f64>,
    initial: DVector<f64>,
    name: String,
}

impl CsdEvolution {
    /// Model from raw rate slices, starting from all ions neutral
    pub fn new(rei: &[f64], rrr: &[f64], rcx: &[f64]) -> CsdResult<Self> {
        let matrix = transition_matrix(rei, rrr, rcx)?;
        let n = matrix.nrows();
        let mut initial = DVector::zeros(n);
        initial[0] = 1.0;

        Ok(Self { matrix, initial, name: format!("CSD evolution ({n} charge states)") })
    }

    /// Model from assembled rate vectors
    pub fn from_rates(rates: &RateVectors) -> CsdResult<Self> {
        Self::new(
            rates.ionization.as_slice(),
            rates.recombination.as_slice(),
            rates.charge_exchange.as_slice(),
        )
    }

    /// Replace the initial abundance vector
    pub fn with_initial_abundances(mut self, abundances: DVector<f64>) -> CsdResult<Self> {
        if abundances.len() != self.matrix.nrows() {
            return Err(CsdError::InvalidArgument(format!(
                "initial abundances have length {}, model has {} charge states",
                abundances.len(),
                self.matrix.nrows()
            )));
        }
        self.initial = abundances;
        Ok(self)
    }

    /// Attach an element label to the model name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}

impl PhysicalModel for CsdEvolution {
    fn points(&self) -> usize {
        self.matrix.nrows()
    }

    fn compute_physics(&self, state: &PhysicalState) -> CsdResult<PhysicalState> {
        let abundances = state
            .get(PhysicalQuantity::Abundance)
            .and_then(PhysicalData::try_as_vector)
            .ok_or_else(|| CsdError::InvalidArgument("state has no abundance vector".to_string()))?;

        if abundances.len() != self.points() {
            return Err(CsdError::InvalidArgument(format!(
                "abundance vector has length {}, model has {} charge states",
                abundances.len(),
                self.points()
            )));
        }

        Ok(PhysicalState::new(
            PhysicalQuantity::Abundance,
            PhysicalData::Vector(&self.matrix * abundances),
        ))
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::new(PhysicalQuantity::Abundance, PhysicalData::Vector(self.initial.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        Some("Linear rate equations for electron-impact ionization, radiative recombination and charge exchange")
    }

    fn linear_operator(&self) -> Option<&DMatrix<f64>> {
        Some(&self.matrix)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn physical_rates(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let rei: Vec<f64> = (0..n).map(|i| if i + 1 < n { 10.0 / (i + 1) as f64 } else { 0.0 }).collect();
        let rrr: Vec<f64> = (0..n).map(|i| 0.01 * i as f64).collect();
        let rcx: Vec<f64> = (0..n).map(|i| 0.02 * (i as f64).powf(1.17)).collect();
        (rei, rrr, rcx)
    }

    #[test]
    fn test_unit_ionization_cascade() {
        let rei = vec![1.0; 10];
        let zeros = vec![0.0; 10];
        let y = vec![1.0; 10];

        let dydt = csd_derivative(&y, 0.0, &rei, &zeros, &zeros).unwrap();
        let mut expected = vec![0.0; 10];
        expected[0] = -1.0;
        expected[9] = 1.0;
        assert_eq!(dydt.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_time_is_ignored() {
        let (rei, rrr, rcx) = physical_rates(5);
        let y = [0.2, 0.3, 0.1, 0.25, 0.15];
        let at_zero = csd_derivative(&y, 0.0, &rei, &rrr, &rcx).unwrap();
        let later = csd_derivative(&y, 1e3, &rei, &rrr, &rcx).unwrap();
        assert_eq!(at_zero, later);
    }

    #[test]
    fn test_matrix_matches_derivative() {
        let (rei, rrr, rcx) = physical_rates(7);
        let y = DVector::from_vec(vec![0.1, 0.2, 0.05, 0.3, 0.15, 0.1, 0.1]);

        let m = transition_matrix(&rei, &rrr, &rcx).unwrap();
        let direct = csd_derivative(y.as_slice(), 0.0, &rei, &rrr, &rcx).unwrap();
        let via_matrix = &m * &y;
        for i in 0..7 {
            assert_relative_eq!(direct[i], via_matrix[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_columns_sum_to_zero() {
        let (rei, rrr, rcx) = physical_rates(8);
        let m = transition_matrix(&rei, &rrr, &rcx).unwrap();
        for j in 0..8 {
            assert_relative_eq!(m.column(j).sum(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_conservation_of_total_abundance() {
        let (rei, rrr, rcx) = physical_rates(6);
        let y = [0.5, 0.1, 0.1, 0.1, 0.1, 0.1];
        let dydt = csd_derivative(&y, 0.0, &rei, &rrr, &rcx).unwrap();
        assert!(dydt.sum().abs() < 1e-12);
    }

    #[test]
    fn test_conservation_ignores_boundary_rates() {
        // channels that do not exist at the boundaries carry arbitrary values
        let rei = [2.0, 1.5, 0.7, 9.0];
        let rrr = [5.0, 0.3, 0.2, 0.4];
        let rcx = [3.0, 0.1, 0.6, 0.8];

        let m = transition_matrix(&rei, &rrr, &rcx).unwrap();
        for j in 0..4 {
            assert_relative_eq!(m.column(j).sum(), 0.0, epsilon = 1e-12);
        }

        let physical = transition_matrix(&[2.0, 1.5, 0.7, 0.0], &[0.0, 0.3, 0.2, 0.4], &[0.0, 0.1, 0.6, 0.8]).unwrap();
        assert_eq!(m, physical);

        let dydt = csd_derivative(&[0.4, 0.3, 0.2, 0.1], 0.0, &rei, &rrr, &rcx).unwrap();
        assert!(dydt.sum().abs() < 1e-12);
    }

    #[test]
    fn test_two_state_system() {
        let m = transition_matrix(&[3.0, 0.0], &[0.0, 1.0], &[0.0, 0.5]).unwrap();
        assert_eq!(m, DMatrix::from_row_slice(2, 2, &[-3.0, 1.5, 3.0, -1.5]));
    }

    #[test]
    fn test_invalid_lengths() {
        let short = [1.0];
        assert!(matches!(
            csd_derivative(&short, 0.0, &short, &short, &short),
            Err(CsdError::InvalidArgument(_))
        ));
        assert!(matches!(
            csd_derivative(&[1.0, 0.0, 0.0], 0.0, &[1.0, 1.0], &[0.0; 3], &[0.0; 3]),
            Err(CsdError::InvalidArgument(_))
        ));
        assert!(transition_matrix(&[], &[], &[]).is_err());
    }

    #[test]
    fn test_model_compute_physics() {
        let (rei, rrr, rcx) = physical_rates(4);
        let model = CsdEvolution::new(&rei, &rrr, &rcx).unwrap();

        assert_eq!(model.points(), 4);
        assert!(model.linear_operator().is_some());
        assert!(model.description().unwrap().contains("charge exchange"));

        let initial = model.setup_initial_state();
        let y0 = initial.get(PhysicalQuantity::Abundance).unwrap().try_as_vector().unwrap();
        assert_eq!(y0.as_slice(), &[1.0, 0.0, 0.0, 0.0]);

        let derivative = model.compute_physics(&initial).unwrap();
        let dydt = derivative.get(PhysicalQuantity::Abundance).unwrap().try_as_vector().unwrap();
        assert_relative_eq!(dydt[0], -rei[0]);
        assert_relative_eq!(dydt[1], rei[0]);
    }

    #[test]
    fn test_model_rejects_bad_state() {
        let (rei, rrr, rcx) = physical_rates(4);
        let model = CsdEvolution::new(&rei, &rrr, &rcx).unwrap();

        assert!(model.compute_physics(&PhysicalState::empty()).is_err());

        let wrong = PhysicalState::new(PhysicalQuantity::Abundance, PhysicalData::from_vec(vec![1.0, 0.0]));
        assert!(model.compute_physics(&wrong).is_err());

        assert!(model.clone().with_initial_abundances(DVector::zeros(3)).is_err());
    }
}
