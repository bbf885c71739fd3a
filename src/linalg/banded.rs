//! Square band matrices and their LU factorization without pivoting.
//!
//! An `n × n` matrix with `lower` sub- and `upper` super-diagonals is stored row-wise in a `n × (lower + upper + 1)`
//! array, where entry `(i, j)` lives in column `j + lower - i`.

use crate::{linalg::SingularMatrix, types::MatD};

#[derive(Debug, Clone, PartialEq)]
pub struct BandMatrix {
    n: usize,
    lower: usize,
    upper: usize,
    data: MatD,
}

/// The factors `L` (unit lower triangular, diagonal not stored) and `U` of a [`BandMatrix`], sharing its storage.
#[derive(Debug, Clone, PartialEq)]
pub struct BandLu {
    factors: BandMatrix,
}

impl BandMatrix {
    pub fn zeros(n: usize, lower: usize, upper: usize) -> Self {
        BandMatrix { n, lower, upper, data: MatD::zeros(n, lower + upper + 1) }
    }

    /// Returns the number of sub- and super-diagonals.
    pub fn bandwidths(&self) -> (usize, usize) {
        (self.lower, self.upper)
    }

    fn in_band(&self, i: usize, j: usize) -> bool {
        j + self.lower >= i && j <= i + self.upper
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        if self.in_band(i, j) {
            self.data[(i, j + self.lower - i)]
        } else {
            0.0
        }
    }

    /// Sets entry `(i, j)`, which must lie inside the band.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(self.in_band(i, j), "entry ({i}, {j}) lies outside the band ({}, {})", self.lower, self.upper);
        self.data[(i, j + self.lower - i)] = value;
    }

    pub fn to_dense(&self) -> MatD {
        MatD::from_fn(self.n, self.n, |i, j| self.get(i, j))
    }

    /// Computes `A = L · U` by Gaussian elimination without row exchanges.
    ///
    /// Without pivoting, no fill-in occurs outside the band. Fails at the first pivot with a magnitude not above
    /// `tolerance`.
    pub fn factorize(mut self, tolerance: f64) -> Result<BandLu, SingularMatrix> {
        let n = self.n;

        for k in 0..n {
            let pivot = self.get(k, k);
            if pivot.is_nan() || pivot.abs() <= tolerance {
                return Err(SingularMatrix { step: k, pivot });
            }

            let last_row = (k + self.lower).min(n - 1);
            let last_col = (k + self.upper).min(n - 1);

            for i in k + 1..=last_row {
                let l = self.get(i, k) / pivot;
                self.set(i, k, l);
                if l == 0.0 {
                    continue;
                }
                for j in k + 1..=last_col {
                    let value = self.get(i, j) - l * self.get(k, j);
                    self.set(i, j, value);
                }
            }
        }

        Ok(BandLu { factors: self })
    }
}

impl BandLu {
    /// Solves `L · U · X = rhs` column by column by forward and backward substitution.
    pub fn solve(&self, rhs: &MatD) -> MatD {
        let a = &self.factors;
        let n = a.n;
        debug_assert_eq!(rhs.nrows(), n);

        let mut x = rhs.clone();
        for mut col in x.column_iter_mut() {
            for i in 0..n {
                let first = i.saturating_sub(a.lower);
                let sum: f64 = (first..i).map(|j| a.get(i, j) * col[j]).sum();
                col[i] -= sum;
            }
            for i in (0..n).rev() {
                let last = (i + a.upper).min(n - 1);
                let sum: f64 = (i + 1..=last).map(|j| a.get(i, j) * col[j]).sum();
                col[i] = (col[i] - sum) / a.get(i, i);
            }
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, DMatrix};

    use super::*;

    fn pentadiagonal(n: usize) -> BandMatrix {
        let mut m = BandMatrix::zeros(n, 2, 1);
        for i in 0..n {
            for j in i.saturating_sub(2)..=(i + 1).min(n - 1) {
                m.set(i, j, if i == j { 6.0 } else { 1.0 + (i + 2 * j) as f64 * 0.1 });
            }
        }
        m
    }

    #[test]
    fn storage() {
        let mut m = BandMatrix::zeros(3, 1, 0);
        m.set(1, 0, 2.0);
        m.set(2, 2, 3.0);

        assert_eq!(m.get(1, 0), 2.0);
        assert_eq!(m.get(0, 2), 0.0);
        assert_eq!(m.bandwidths(), (1, 0));
        assert_eq!(m.to_dense(), dmatrix![
            0., 0., 0.;
            2., 0., 0.;
            0., 0., 3.;
        ]);
    }

    #[test]
    fn factors_reproduce_matrix() {
        let m = pentadiagonal(6);
        let dense = m.to_dense();
        let lu = m.factorize(1e-12).unwrap();

        let f = &lu.factors;
        let l = DMatrix::from_fn(6, 6, |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Greater => f.get(i, j),
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => 0.0,
        });
        let u = DMatrix::from_fn(6, 6, |i, j| if i <= j { f.get(i, j) } else { 0.0 });

        assert_relative_eq!(l * u, dense, epsilon = 1e-12);
    }

    #[test]
    fn solve_matches_dense() {
        let m = pentadiagonal(7);
        let dense = m.to_dense();
        let rhs = DMatrix::from_fn(7, 2, |i, j| (i as f64 - 3.0) * (j as f64 + 1.0));

        let x = m.factorize(1e-12).unwrap().solve(&rhs);
        let expected = dense.lu().solve(&rhs).unwrap();

        assert_relative_eq!(x, expected, epsilon = 1e-12);
    }

    #[test]
    fn nan_pivot_is_singular() {
        let mut m = BandMatrix::zeros(2, 0, 0);
        m.set(0, 0, f64::NAN);
        m.set(1, 1, 1.0);

        assert_eq!(m.factorize(1e-12).unwrap_err().step, 0);
    }
}
