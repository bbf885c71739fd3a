//! Evaluates curves with de Boor's algorithm.
//!
//! On the knot span `[U_k, U_{k+1})` only the control points `P_{k-p},..., P_k` contribute to the curve. De Boor's
//! algorithm blends them by repeated linear interpolation,
//!
//! `d_j^r = (1 - α_j^r) d_{j-1}^{r-1} + α_j^r d_j^{r-1}` with `α_j^r = (u - U_{j+k-p}) / (U_{j+1+k-r} - U_{j+k-p})`,
//!
//! for `r = 1,..., p` and `j = p,..., r`, until `C(u) = d_p^p` remains. The cost depends on `p` only.

#![allow(non_snake_case)]

use crate::{
    curve::{knots::Knots, Curve},
    types::{MatD, Point2, VecD},
};

/// Evaluates the curve with control points `P` at `u` lying in the knot span `span`.
pub fn de_boor(knots: &Knots, P: &MatD, span: usize, u: f64) -> VecD {
    let U = knots.vector();
    let p = knots.degree();
    let k = span;

    let mut d: Vec<VecD> = (0..=p).map(|j| P.column(j + k - p).clone_owned()).collect();

    for r in 1..=p {
        for j in (r..=p).rev() {
            let left = U[j + k - p];
            let denominator = U[j + 1 + k - r] - left;
            let alpha = if denominator == 0.0 { 0.0 } else { (u - left) / denominator };

            let blended = (1.0 - alpha) * &d[j - 1] + alpha * &d[j];
            d[j] = blended;
        }
    }

    d.swap_remove(p)
}

/// Returns `count` equally spaced values from `start` to `end`, both included.
///
/// A single value is `start`.
pub fn linspace(start: f64, end: f64, count: usize) -> impl ExactSizeIterator<Item = f64> + Clone {
    let step = if count > 1 { (end - start) / (count - 1) as f64 } else { 0.0 };
    (0..count).map(move |i| if i + 1 == count && count > 1 { end } else { start + i as f64 * step })
}

/// A lazy sequence of curve points at the parameters yielded by `I`.
#[derive(Debug, Clone)]
pub struct Samples<'a, I> {
    curve: &'a Curve,
    parameters: I,
}

impl<'a, I> Samples<'a, I> {
    pub(crate) fn new(curve: &'a Curve, parameters: I) -> Self {
        Samples { curve, parameters }
    }
}

impl<I: Iterator<Item = f64>> Iterator for Samples<'_, I> {
    type Item = Point2;

    fn next(&mut self) -> Option<Self::Item> {
        self.parameters.next().map(|u| self.curve.evaluate_point(u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.parameters.size_hint()
    }
}

impl<I: ExactSizeIterator<Item = f64>> ExactSizeIterator for Samples<'_, I> {}
