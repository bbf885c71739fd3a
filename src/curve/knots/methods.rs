//! Knot vector generation methods.
//!
//! - Uniform: equidistant internal knots
//! - Averaging: internal knots following the distribution of the parameters, see eq. (9.8) in `Piegl1997`
//!
//! Both methods produce clamped knot vectors on the domain `[0, 1]`.

use crate::{
    curve::{knots::Knots, parameters::Parameters, CurveError},
    types::{Degree, VecD, VecHelpers},
};

/// Returns a clamped knot vector for `segments + 1` control points with equidistant internal knots.
///
/// # Errors
///
/// Fails with [`CurveError::InsufficientPoints`] if there are fewer than `p+1` control points.
pub fn uniform(degree: Degree, segments: usize) -> Result<Knots, CurveError> {
    let p = degree.get();
    let n = segments;

    if n < p {
        return Err(CurveError::InsufficientPoints { n: n + 1, p });
    }

    let mut U = VecD::zeros(n + p + 2);
    let internal = n - p;

    for j in 1..=internal {
        U[p + j] = j as f64 / (internal + 1) as f64;
    }
    U.rows_mut(n + 1, p + 1).fill(1.0);

    Ok(Knots::new(degree, U))
}

/// Returns a clamped knot vector whose internal knots average `p` consecutive parameters,
///
/// `U_{j+p} = 1/p (ū_j + ... + ū_{j+p-1})` for `j = 1,..., n-p`.
///
/// Every knot span then contains at least one parameter, which keeps the interpolation matrix non-singular.
///
/// # Errors
///
/// Fails with [`CurveError::InsufficientPoints`] if there are fewer than `p+1` parameters.
pub fn averaging(degree: Degree, params: &Parameters) -> Result<Knots, CurveError> {
    let p = degree.get();
    let n = params.segments();

    if params.len() < p + 1 {
        return Err(CurveError::InsufficientPoints { n: params.len(), p });
    }

    let u_bar = params.vector();
    let mut U = VecD::zeros(n + p + 2);

    for j in 1..=n - p {
        U[j + p] = u_bar.segment(j, p).sum() / p as f64;
    }
    U.rows_mut(n + 1, p + 1).fill(1.0);

    Ok(Knots::new(degree, U))
}
