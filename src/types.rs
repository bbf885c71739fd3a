use std::{fmt, num::NonZeroUsize};

use nalgebra::{Dyn, MatrixView, OMatrix, OVector, U1};

pub type VecD = OVector<f64, Dyn>;

pub type VecDView<'a> = MatrixView<'a, f64, Dyn, U1, U1, Dyn>;

pub type MatD = OMatrix<f64, Dyn, Dyn>;

/// A point in the sketching plane.
pub type Point2 = nalgebra::Point2<f64>;

/// The polynomial degree `p ≥ 1` of a spline.
///
/// A degree of zero cannot be constructed, so every [`Degree`] yields a curve with at least linear segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Degree(NonZeroUsize);

impl Degree {
    pub const LINEAR: Degree = Degree(NonZeroUsize::MIN);
    pub const CUBIC: Degree = match NonZeroUsize::new(3) {
        Some(p) => Degree(p),
        None => Degree(NonZeroUsize::MIN),
    };

    /// Returns `None` for `p = 0`.
    pub fn new(p: usize) -> Option<Self> {
        NonZeroUsize::new(p).map(Degree)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Degree {
    fn default() -> Self {
        Degree::CUBIC
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait VecHelpers {
    /// Returns the `n` entries starting at index `i`.
    fn segment(&self, i: usize, n: usize) -> VecDView<'_>;
}

impl VecHelpers for VecD {
    fn segment(&self, start: usize, n: usize) -> VecDView<'_> {
        self.generic_view((start, 0), (Dyn(n), U1))
    }
}


#[cfg(test)]
mod degree {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Degree::new(0), None);
    }

    #[test]
    fn constants() {
        assert_eq!(Degree::LINEAR.get(), 1);
        assert_eq!(Degree::CUBIC.get(), 3);
        assert_eq!(Degree::default(), Degree::CUBIC);
    }

    #[test]
    fn display() {
        assert_eq!(Degree::new(7).unwrap().to_string(), "7");
    }
}
