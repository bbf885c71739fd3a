//! Computes the control points of a curve passing through every data point at its parameter.
//!
//! With the parameters `ū_0,..., ū_n` and the data points `Q_0,..., Q_n`, the control points `P_0,..., P_n` solve
//!
//! `Σ_i N_{i,p}(ū_g) P_i = Q_g` for `g = 0,..., n`,
//!
//! see section 9.2.1 in `Piegl1997`. Every coordinate of the points is solved against the same factorization.

#![allow(non_snake_case)]

use tracing::trace;

use crate::{
    curve::{
        knots::Knots,
        parameters::Parameters,
        points::{DataPoints, Points},
        CurveError,
    },
    linalg::{BandMatrix, Solver},
    types::MatD,
};

/// Returns the control point matrix of the interpolating curve.
///
/// # Errors
///
/// - [`CurveError::KnotsAndPointsMismatch`] if the knots do not define one basis function per data point,
/// - [`CurveError::ParametersAndPointsMismatch`] if there is not one parameter per data point,
/// - [`CurveError::SingularSystem`] if the coefficient matrix is singular, which does not happen for knots obtained
///   by [averaging][crate::curve::knots::methods::averaging] distinct parameters.
pub fn interpolate(
    knots: &Knots,
    points: &DataPoints,
    params: &Parameters,
    solver: Solver,
    pivot_tolerance: f64,
) -> Result<MatD, CurveError> {
    let n = points.count();

    if knots.len() != n + knots.degree() + 1 {
        return Err(CurveError::KnotsAndPointsMismatch { knots: knots.len(), points: n, p: knots.degree() });
    }
    if params.len() != n {
        return Err(CurveError::ParametersAndPointsMismatch { params: params.len(), points: n });
    }

    let Nmat = coefficient_matrix(knots, params);
    trace!(n, bandwidths = ?Nmat.bandwidths(), ?solver, "solving interpolation system");

    let P = solver
        .solve(Nmat, &points.matrix().transpose(), pivot_tolerance)
        .map_err(|err| CurveError::SingularSystem { step: err.step })?;

    Ok(P.transpose())
}

/// Assembles the banded matrix `N[g][i] = N_{i,p}(ū_g)`.
///
/// Row `g` holds the `p+1` basis functions not vanishing on the knot span of `ū_g`; the band widths are the largest
/// distances of these entries from the diagonal.
pub fn coefficient_matrix(knots: &Knots, params: &Parameters) -> BandMatrix {
    let p = knots.degree();
    let U_bar = params.vector();

    let spans: Vec<usize> = U_bar.iter().map(|&u| knots.find_span(u)).collect();

    let lower = spans.iter().enumerate().map(|(g, &span)| g.saturating_sub(span - p)).max().unwrap_or(0);
    let upper = spans.iter().enumerate().map(|(g, &span)| span.saturating_sub(g)).max().unwrap_or(0);

    let mut Nmat = BandMatrix::zeros(U_bar.len(), lower, upper);
    for (g, (&u, &span)) in U_bar.iter().zip(&spans).enumerate() {
        for (r, &value) in knots.evaluate_nonzero(span, u).iter().enumerate() {
            Nmat.set(g, span - p + r, value);
        }
    }
    Nmat
}
