//! Implements the knot vector defining the [spline basis functions][crate::curve::basis].
//!
//! The knot vector of a degree `p` curve with `n+1` control points is composed of `n+p+2` scalar values
//! in ascending order, called 'knots'.
//!
//! The head and tail contain `p+1` knots of value `0` and `1`, respectively (the vector is 'clamped').
//! This leaves `n-p` internal knots in the center.
//! The interval from index `i = p,..., n+1` is called 'domain'.
//!
//! Different [knot vector generation methods][methods] are available.

#![allow(non_snake_case)]

use tracing::debug;

use crate::{
    curve::{
        basis,
        parameters::{self, Parameters},
        points::{DataPoints, Points},
        CurveError,
    },
    types::{Degree, VecD, VecDView, VecHelpers},
};

pub mod methods;

#[derive(Debug, Clone, PartialEq)]
pub struct Knots {
    U: VecD,
    p: usize,
}

/// Selects the knots of a curve built from given control points.
#[derive(Debug, Clone)]
pub enum Generation {
    Uniform,
    Manual { knots: Knots },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Equidistant internal knots, independent of the parameters.
    Uniform,
    /// Internal knots averaging `p` consecutive parameters, see eq. (9.8) in `Piegl1997`.
    #[default]
    Averaging,
}

/// Derives the parameters of the data points and the clamped knot vector of an interpolating curve of degree `degree`.
///
/// The data points must not contain consecutive duplicates.
///
/// # Errors
///
/// Fails with [`CurveError::InsufficientPoints`] if fewer than `p+1` points are provided.
pub fn build(
    points: &DataPoints,
    degree: Degree,
    parameter_method: parameters::Method,
    knot_method: Method,
) -> Result<(Parameters, Knots), CurveError> {
    let (n, p) = (points.count(), degree.get());
    if n < p + 1 {
        return Err(CurveError::InsufficientPoints { n, p });
    }

    let params = parameters::generate(points, parameter_method);
    let knots = generate(degree, &params, knot_method)?;
    debug!(n, p, ?parameter_method, ?knot_method, "built knot vector");

    Ok((params, knots))
}

pub fn generate(degree: Degree, params: &Parameters, method: Method) -> Result<Knots, CurveError> {
    match method {
        Method::Uniform => methods::uniform(degree, params.segments()),
        Method::Averaging => methods::averaging(degree, params),
    }
}

impl Knots {
    pub fn new(degree: Degree, knots: VecD) -> Self {
        Knots { U: knots, p: degree.get() }
    }

    pub fn vector(&self) -> &VecD {
        &self.U
    }

    pub fn degree(&self) -> usize {
        self.p
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.U.len()
    }

    pub fn is_empty(&self) -> bool {
        self.U.is_empty()
    }

    /// Returns `n`, the number of control points minus one.
    pub fn segments(&self) -> usize {
        self.U.len() - (self.p + 2)
    }

    pub fn internal_count(&self) -> usize {
        self.segments() - self.p
    }

    pub fn internal(&self) -> VecDView<'_> {
        self.U.segment(self.p + 1, self.internal_count())
    }

    pub fn domain_count(&self) -> usize {
        self.segments() - self.p + 2
    }

    pub fn domain(&self) -> VecDView<'_> {
        self.U.segment(self.p, self.domain_count())
    }

    /// The parameter interval `[U_p, U_{n+1}]` the curve is defined on.
    pub fn domain_bounds(&self) -> (f64, f64) {
        (self.U[self.p], self.U[self.segments() + 1])
    }

    pub fn multiplicity(&self, u: f64) -> usize {
        self.domain().iter().filter(|&x| *x == u).count()
    }

    /// Returns the highest multiplicity of any knot strictly inside the domain, zero if there is none.
    pub fn max_internal_multiplicity(&self) -> usize {
        let internal = self.internal();
        internal.iter().map(|&u| internal.iter().filter(|&&x| x == u).count()).max().unwrap_or(0)
    }

    /// Returns the index `i` of the knot span `[U_i, U_{i+1})` containing `u`.
    ///
    /// The search is restricted to the domain `i = p,..., n`, so that the right end `u = U_{n+1}` is assigned to the
    /// last non-empty span `n`, and values outside the domain are assigned to the first or last span.
    /// See algorithm A2.1 in `Piegl1997`.
    pub fn find_span(&self, u: f64) -> usize {
        let U = &self.U;
        let p = self.p;
        let n = self.segments();

        if u >= U[n + 1] {
            return n;
        }
        if u <= U[p] {
            return p;
        }

        // Bisection with the invariant `U[low] <= u < U[high]`.
        let mut low = p;
        let mut high = n + 1;
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if u < U[mid] {
                high = mid;
            } else {
                low = mid;
            }
        }
        low
    }

    /// Evaluates the `i`-th basis function of degree `p` at `u`.
    pub fn evaluate(&self, i: usize, u: f64) -> f64 {
        basis::basis(&self.U, i, self.p, self.segments(), u)
    }

    /// Evaluates the `p+1` basis functions which do not vanish on the span `span`.
    pub fn evaluate_nonzero(&self, span: usize, u: f64) -> VecD {
        basis::nonzero(&self.U, span, self.p, u)
    }
}

pub fn is_clamped(knots: &Knots) -> bool {
    let U0 = knots.vector();
    let clamp_size = knots.p + 1;

    let is_head_clamped = U0.iter().take(clamp_size).all(|&u| u == 0.0);
    let is_tail_clamped = U0.iter().rev().take(clamp_size).all(|&u| u == 1.0);

    is_head_clamped && is_tail_clamped
}

pub fn is_normed(knots: &Knots) -> bool {
    let U0 = knots.vector();
    U0.min() == 0.0 && U0.max() == 1.0
}

pub fn is_sorted(knots: &Knots) -> bool {
    knots.U.as_slice().windows(2).all(|w| w[0] <= w[1])
}
