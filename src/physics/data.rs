//! Physical data types
//!
//! Container for the quantities a model tracks. A charge-state
//! distribution is a vector (one abundance per charge state); a stack of
//! distributions or a transition operator is a matrix.

use nalgebra::{DMatrix, DVector};

/// Physical data container (scalar, vector or matrix)
///
/// # Examples
///
/// ```rust
/// use csd_rs::physics::PhysicalData;
///
/// // Neutral gas injected: all population in charge state 0
/// let mut values = vec![0.0; 19];
/// values[0] = 1.0;
/// let csd = PhysicalData::from_vec(values);
/// assert_eq!(csd.len(), 19);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicalData {
    /// Single value, e.g. total population
    Scalar(f64),

    /// One value per charge state
    Vector(DVector<f64>),

    /// Charge state × charge state, or time × charge state
    Matrix(DMatrix<f64>),
}

impl PhysicalData {
    pub fn from_scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    pub fn from_vec(values: Vec<f64>) -> Self {
        Self::Vector(DVector::from_vec(values))
    }

    pub fn uniform_vector(size: usize, value: f64) -> Self {
        Self::Vector(DVector::from_element(size, value))
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        match self {
            PhysicalData::Scalar(_) => 1,
            PhysicalData::Vector(v) => v.len(),
            PhysicalData::Matrix(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn any(&self, predicate: impl Fn(f64) -> bool) -> bool {
        match self {
            PhysicalData::Scalar(x) => predicate(*x),
            PhysicalData::Vector(v) => v.iter().any(|&x| predicate(x)),
            PhysicalData::Matrix(m) => m.iter().any(|&x| predicate(x)),
        }
    }

    pub fn has_nan(&self) -> bool {
        self.any(f64::is_nan)
    }

    pub fn has_inf(&self) -> bool {
        self.any(f64::is_infinite)
    }

    /// Abundance vectors are the only quantity solvers propagate exactly
    pub fn try_as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            PhysicalData::Vector(value) => Some(value),
            _ => None,
        }
    }

    /// Apply `f` to every stored value
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        match self {
            PhysicalData::Scalar(value) => *value = f(*value),
            PhysicalData::Vector(value) => value.apply(|x| *x = f(*x)),
            PhysicalData::Matrix(value) => value.apply(|x| *x = f(*x)),
        }
    }
}

// ======================================== Arithmetic ========================================
// Explicit integrators combine states as y + dt·k; shapes always match
// because every stage is computed from the same state.

impl std::ops::Add for PhysicalData {
    type Output = PhysicalData;
    fn add(self, rhs: Self) -> Self::Output {
        use PhysicalData::*;
        match (self, rhs) {
            (Scalar(x), Scalar(y)) => Scalar(x + y),
            (Vector(x), Vector(y)) => {
                assert_eq!(x.len(), y.len(), "charge-state vectors must have the same length");
                Vector(x + y)
            }
            (Matrix(x), Matrix(y)) => {
                assert_eq!(x.shape(), y.shape(), "matrix shapes must match");
                Matrix(x + y)
            }
            (x, y) => panic!("cannot add {} and {}", x.kind(), y.kind()),
        }
    }
}

impl std::ops::Mul<f64> for PhysicalData {
    type Output = PhysicalData;
    fn mul(self, scalar: f64) -> Self::Output {
        match self {
            PhysicalData::Scalar(x) => PhysicalData::Scalar(x * scalar),
            PhysicalData::Vector(x) => PhysicalData::Vector(x * scalar),
            PhysicalData::Matrix(x) => PhysicalData::Matrix(x * scalar),
        }
    }
}

impl PhysicalData {
    fn kind(&self) -> &'static str {
        match self {
            PhysicalData::Scalar(_) => "scalar",
            PhysicalData::Vector(_) => "vector",
            PhysicalData::Matrix(_) => "matrix",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(PhysicalData::from_scalar(42.0).len(), 1);
        assert_eq!(PhysicalData::uniform_vector(43, 0.0).len(), 43);
        assert_eq!(PhysicalData::Matrix(DMatrix::zeros(19, 19)).len(), 361);
        assert!(PhysicalData::from_vec(vec![]).is_empty());
    }

    #[test]
    fn test_only_vectors_extract() {
        assert!(PhysicalData::from_vec(vec![1.0, 0.0]).try_as_vector().is_some());
        assert!(PhysicalData::from_scalar(1.0).try_as_vector().is_none());
    }

    #[test]
    fn test_addition_and_scaling() {
        let a = PhysicalData::from_vec(vec![1.0, 0.0, 0.0]);
        let b = PhysicalData::from_vec(vec![-0.5, 0.25, 0.25]);
        let c = a + b * 2.0;
        assert_eq!(c.try_as_vector().unwrap().as_slice(), &[0.0, 0.5, 0.5]);
    }

    #[test]
    fn test_non_finite_detection() {
        let mut data = PhysicalData::from_vec(vec![1.0, 2.0]);
        assert!(!data.has_nan());
        data.apply(|x| x / 0.0);
        assert!(data.has_inf());
        assert!(PhysicalData::from_scalar(f64::NAN).has_nan());
    }

    #[test]
    #[should_panic(expected = "charge-state vectors must have the same length")]
    fn test_mismatched_vectors_panic() {
        let _ = PhysicalData::from_vec(vec![1.0]) + PhysicalData::from_vec(vec![1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "cannot add scalar and vector")]
    fn test_mixed_kinds_panic() {
        let _ = PhysicalData::from_scalar(1.0) + PhysicalData::from_vec(vec![1.0]);
    }
}
