//! Evaluates the basis spline functions using the Cox-de Boor-Mansfield recurrence relation
//!
//! `N_{i,p}(u) = (u - U_i) / (U_{i+p} - U_i) N_{i,p-1}(u) + (U_{i+p+1} - u) / (U_{i+p+1} - U_{i+1}) N_{i+1,p-1}(u)`
//!
//! with the basis functions of degree `p = 0`
//!
//! `N_{i,0}(u) = 1` if `U_i ≤ u < U_{i+1} ⋁ (i = n ⋀ u = U_{n+1})`, and `0` otherwise,
//!
//! where the conditional `⋁ (i = n ⋀ u = U_{n+1})` closes the last interval.
//! Quotients with a vanishing denominator `0/0` are defined as zero.

#![allow(non_snake_case)]

use crate::types::VecD;

/// Evaluates the `i`-th basis spline function of degree `p`
///
/// ## Arguments
///
/// - `U` the knot vector
/// - `i` the index with `i ∈ {0, 1, ..., n}`
/// - `p` the spline degree
/// - `n` the index of the last basis function
/// - `u` the parameter
pub fn basis(U: &VecD, i: usize, p: usize, n: usize, u: f64) -> f64 {
    if p == 0 {
        if (U[i] <= u && u < U[i + 1]) || (i == n && u == U[n + 1]) {
            return 1.0;
        }
        return 0.0;
    }

    let summand1 = if U[i + p] == U[i] {
        0.0
    } else {
        (u - U[i]) / (U[i + p] - U[i]) * basis(U, i, p - 1, n, u)
    };

    let summand2 = if U[i + 1 + p] == U[i + 1] {
        0.0
    } else {
        // The following equation is numerically more stable than
        // `(1.0 - ((u - U[i + 1]) / (U[i + p + 1] - U[i + 1]))) * basis(U, i + 1, p - 1, n, u)`
        (U[i + 1 + p] - u) / (U[i + 1 + p] - U[i + 1]) * basis(U, i + 1, p - 1, n, u)
    };

    summand1 + summand2
}

/// Evaluates the `p+1` basis functions `N_{span-p,p}(u),..., N_{span,p}(u)`, which are the only ones not
/// vanishing on the knot span `[U_span, U_{span+1})`.
///
/// The recurrence is evaluated as a triangular table, so every lower degree function is computed once.
/// See algorithm A2.2 in `Piegl1997`.
pub fn nonzero(U: &VecD, span: usize, p: usize, u: f64) -> VecD {
    let mut N = VecD::zeros(p + 1);
    let mut left = vec![0.0; p + 1];
    let mut right = vec![0.0; p + 1];

    N[0] = 1.0;
    for j in 1..=p {
        left[j] = u - U[span + 1 - j];
        right[j] = U[span + j] - u;

        let mut saved = 0.0;
        for r in 0..j {
            let temp = N[r] / (right[r + 1] + left[j - r]);
            N[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        N[j] = saved;
    }
    N
}
