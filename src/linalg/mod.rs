//! Linear solvers for the interpolation system `N · P = Q`.
//!
//! The coefficient matrix of a B-spline interpolation problem is banded, as every row contains at most `p+1`
//! consecutive non-zero basis function values. Moreover, it is totally positive if the Schoenberg-Whitney conditions
//! hold, so Gaussian elimination without pivoting is stable (de Boor, A Practical Guide to Splines, 2001).
//!
//! - [`Solver::Banded`] factorizes inside the band in `O(n·w²)` for band width `w`, which is `O(n·p²)` for knots
//!   obtained by averaging.
//! - [`Solver::Dense`] falls back to `nalgebra`'s LU decomposition with partial pivoting in `O(n³)`. It is meant for
//!   small systems and as a reference for the banded solver.

use nalgebra::LU;
use thiserror::Error;
use tracing::warn;

use crate::types::MatD;

pub mod banded;

pub use banded::{BandLu, BandMatrix};

/// Pivots with a magnitude up to this value are treated as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Solver {
    #[default]
    Banded,
    Dense,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("The pivot `{pivot:e}` of elimination step {step} vanishes.")]
pub struct SingularMatrix {
    pub step: usize,
    pub pivot: f64,
}

impl Solver {
    /// Solves `matrix · X = rhs` for all columns of `rhs` with a single factorization.
    ///
    /// `tolerance` bounds the pivots of the banded elimination. The dense solver pivots by rows and only fails on
    /// exactly vanishing pivots.
    pub fn solve(&self, matrix: BandMatrix, rhs: &MatD, tolerance: f64) -> Result<MatD, SingularMatrix> {
        let solution = match self {
            Solver::Banded => matrix.factorize(tolerance).map(|lu| lu.solve(rhs)),
            Solver::Dense => solve_dense(matrix.to_dense(), rhs),
        };

        if let Err(err) = &solution {
            warn!(solver = ?self, step = err.step, pivot = err.pivot, "singular interpolation matrix");
        }
        solution
    }
}

/// Row exchanges scale the pivots differently than elimination inside the band, so only exactly vanishing pivots
/// and non-finite solutions are singular here.
fn solve_dense(matrix: MatD, rhs: &MatD) -> Result<MatD, SingularMatrix> {
    let lu = LU::new(matrix);

    let diagonal = lu.u().diagonal();
    if let Some((step, &pivot)) = diagonal.iter().enumerate().find(|(_, d)| d.is_nan() || **d == 0.0) {
        return Err(SingularMatrix { step, pivot });
    }

    match lu.solve(rhs) {
        Some(x) if x.iter().all(|v| v.is_finite()) => Ok(x),
        _ => Err(SingularMatrix { step: 0, pivot: 0.0 }),
    }
}
