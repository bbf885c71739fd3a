//! Implements the B-spline curve.
//!
//! A B-spline curve of degree `p` is defined by
//!
//! `C(u) = Σ_{i=0}^{n} N_{i,p}(u) P_i`
//!
//! with the
//! - parameter `u ∈ [0,1]` defining a point on the curve,
//! - number of polynomial spline segments `n`,
//! - spline degree `p`,
//! - [knot vector][knots] `U`,
//! - `n+1` [spline basis functions][basis] `N` of degree `p` defined by the [knot vector][knots] `U`, and
//! - `n+1`, `N`-dimensional [control points][points] `P`.
//!
//! Curves are immutable. Evaluation uses [de Boor's algorithm][evaluation], which only touches the `p+1` control
//! points of the knot span containing `u`.

use thiserror::Error;

use crate::{
    curve::{
        evaluation::{de_boor, linspace, Samples},
        knots::{is_sorted, Knots},
        points::{ControlPoints, Points},
    },
    types::{Point2, VecD},
};

pub mod basis;
pub mod evaluation;
pub mod generation;
pub mod knots;
pub mod parameters;
pub mod points;

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    knots: Knots,
    points: ControlPoints,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error(
        "A curve of degree `p = {p}` requires at least `p + 1 = {}` points, but only `n = {n}` are available.",
        .p + 1
    )]
    InsufficientPoints { n: usize, p: usize },

    #[error(
        "The interpolation system is singular at elimination step {step}. \
        The knot vector does not match the parameters of the data points."
    )]
    SingularSystem { step: usize },

    #[error(
        "A knot vector with {knots} knots of degree `p = {p}` does not fit {points} points, \
        which require `{points} + p + 1` knots."
    )]
    KnotsAndPointsMismatch { knots: usize, points: usize, p: usize },

    #[error("The number of parameters {params} must be equal to the number of data points {points}.")]
    ParametersAndPointsMismatch { params: usize, points: usize },

    #[error("The knots must be in ascending order.")]
    UnsortedKnots,
}

impl Curve {
    /// Returns a B-Spline
    ///
    /// # Examples
    /// ```
    /// use nalgebra::{dmatrix, dvector};
    /// use spline_builder::curve::Curve;
    /// use spline_builder::curve::knots;
    /// use spline_builder::curve::points::ControlPoints;
    /// use spline_builder::types::Degree;
    ///
    /// // Create a coordinate matrix containing five 2D points.
    /// let points = ControlPoints::new(dmatrix![
    /// // 1    2    3    4    5
    ///  -2.0,-2.0,-1.0, 0.5, 1.5; // x
    ///  -1.0, 0.0, 1.0, 1.0, 2.0; // y
    /// ]);
    /// let knots = knots::methods::uniform(Degree::new(2).unwrap(), 4).unwrap();
    /// let curve = Curve::new(knots, points).unwrap();
    /// assert_eq!(curve.evaluate(0.0), dvector![-2.0, -1.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`CurveError::InsufficientPoints`] for fewer than `p+1` control points,
    /// - [`CurveError::KnotsAndPointsMismatch`] unless there are `p+1` knots more than control points,
    /// - [`CurveError::UnsortedKnots`] for descending knots.
    pub fn new(knots: Knots, points: ControlPoints) -> Result<Self, CurveError> {
        let p = knots.degree();

        match (knots.len(), points.count()) {
            (_, n) if n < p + 1 => Err(CurveError::InsufficientPoints { n, p }),
            (m, n) if m != n + p + 1 => Err(CurveError::KnotsAndPointsMismatch { knots: m, points: n, p }),
            _ if !is_sorted(&knots) => Err(CurveError::UnsortedKnots),
            _ => Ok(Self { knots, points }),
        }
    }

    pub fn degree(&self) -> usize {
        self.knots.degree()
    }

    pub fn segments(&self) -> usize {
        self.points.segments()
    }

    /// Returns the dimension of the curve.
    pub fn dimension(&self) -> usize {
        self.points.dimension()
    }

    pub fn knots(&self) -> &Knots {
        &self.knots
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    /// Returns the control points of a planar curve, in order.
    pub fn control_polygon(&self) -> Vec<Point2> {
        self.points.to_points()
    }

    /// Evaluates the curve at `u` with de Boor's algorithm.
    ///
    /// Parameters outside the domain are clamped to it, so `u < 0` yields the first and `u > 1` the last point.
    pub fn evaluate(&self, u: f64) -> VecD {
        let u = self.clamp(u);
        let span = self.knots.find_span(u);
        de_boor(&self.knots, self.points.matrix(), span, u)
    }

    /// Evaluates a planar curve at `u`, see [`Curve::evaluate`].
    pub fn evaluate_point(&self, u: f64) -> Point2 {
        let v = self.evaluate(u);
        Point2::new(v[0], v[1])
    }

    /// Evaluates the curve at `u` by summing up all basis functions times their control points.
    ///
    /// This costs `O(n·2^p)` instead of `O(p²)` and only serves as a reference for [`Curve::evaluate`].
    pub fn evaluate_naive(&self, u: f64) -> VecD {
        let u = self.clamp(u);
        let mut value = VecD::zeros(self.dimension());
        for (i, column) in self.points.matrix().column_iter().enumerate() {
            value += self.knots.evaluate(i, u) * column;
        }
        value
    }

    /// Returns a lazy sequence of the planar curve points at `samples`.
    ///
    /// The sequence can be restarted by cloning it before it is consumed.
    pub fn samples<I>(&self, samples: I) -> Samples<'_, I::IntoIter>
    where
        I: IntoIterator<Item = f64>,
    {
        Samples::new(self, samples.into_iter())
    }

    /// Evaluates the planar curve at `count` equally spaced parameters covering `[0, 1]`.
    pub fn polyline(&self, count: usize) -> Vec<Point2> {
        self.samples(linspace(0.0, 1.0, count)).collect()
    }

    fn clamp(&self, u: f64) -> f64 {
        let (lower, upper) = self.knots.domain_bounds();
        if u < lower || u > upper {
            tracing::trace!(u, lower, upper, "clamping parameter to the curve domain");
        }
        u.clamp(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};
    use rstest::{fixture, rstest};

    use crate::types::Degree;

    use super::*;

    #[fixture]
    /// A two-dimensional, linear test curve with default degree two.
    fn c(#[default(2)] degree: usize) -> Curve {
        let knots = knots::methods::uniform(Degree::new(degree).unwrap(), 2).unwrap();
        let c = Curve::new(
            knots,
            ControlPoints::new(dmatrix![
                1., 3., 5.;
                2., 4., 6.;
            ]),
        )
        .unwrap();
        assert_eq!(c.knots.vector(), &dvector![0., 0., 0., 1., 1., 1.]);
        c
    }

    mod new {
        use super::*;

        #[test]
        fn insufficient_points() {
            let knots = Knots::new(Degree::CUBIC, dvector![0., 0., 0., 0., 1., 1., 1.]);
            assert_eq!(
                Curve::new(knots, ControlPoints::new(dmatrix![0., 1., 2.;])),
                Err(CurveError::InsufficientPoints { n: 3, p: 3 })
            );
        }

        #[test]
        fn knots_and_points_mismatch() {
            let knots = Knots::new(Degree::LINEAR, dvector![0., 0., 0.5, 1., 1.]);
            assert_eq!(
                Curve::new(knots, ControlPoints::new(dmatrix![0., 1.;])),
                Err(CurveError::KnotsAndPointsMismatch { knots: 5, points: 2, p: 1 })
            );
        }

        #[test]
        fn unsorted_knots() {
            let knots = Knots::new(Degree::LINEAR, dvector![0., 0., 0.7, 0.3, 1., 1.]);
            assert_eq!(
                Curve::new(knots, ControlPoints::new(dmatrix![0., 1., 2., 3.;])),
                Err(CurveError::UnsortedKnots)
            );
        }
    }

    mod evaluate {
        use super::*;

        #[rstest]
        fn start(c: Curve) {
            assert_eq!(c.evaluate(0.), dvector![1., 2.])
        }

        #[rstest]
        fn middle(c: Curve) {
            assert_eq!(c.evaluate(0.5), dvector![3., 4.])
        }

        #[rstest]
        fn end(c: Curve) {
            assert_eq!(c.evaluate(1.), dvector![5., 6.])
        }

        #[rstest]
        fn outside_lower_bound_is_clamped(c: Curve) {
            assert_eq!(c.evaluate(-0.1), dvector![1., 2.]);
        }

        #[rstest]
        fn outside_upper_bound_is_clamped(c: Curve) {
            assert_eq!(c.evaluate(1.1), dvector![5., 6.]);
        }

        #[rstest]
        fn point(c: Curve) {
            assert_eq!(c.evaluate_point(0.5), Point2::new(3., 4.));
        }

        #[test]
        fn de_boor_matches_basis_sum() {
            let knots = Knots::new(Degree::CUBIC, dvector![0.0, 0.0, 0.0, 0.0, 0.2, 0.45, 0.7, 1.0, 1.0, 1.0, 1.0]);
            let c = Curve::new(
                knots,
                ControlPoints::new(dmatrix![
                    0.5, 10.0, 9.0, 4.5, 1.5, 1.0, 0.2;
                    0.5,  1.0, 4.0, 7.5, 6.0, 1.0, 3.0;
                ]),
            )
            .unwrap();

            for u in linspace(0.0, 1.0, 41) {
                assert_relative_eq!(c.evaluate(u), c.evaluate_naive(u), epsilon = 1e-12);
            }
        }

        #[test]
        fn unnormalized_domain() {
            let knots = Knots::new(Degree::CUBIC, dvector![0.0, 0.0, 0.0, 0.0, 1.0, 4.0, 9.0, 9.0, 9.0, 9.0]);
            let c = Curve::new(
                knots,
                ControlPoints::new(dmatrix![
                    0.5, 10.0, 9.0, 4.5, 1.5, 1.0;
                    0.5,  1.0, 4.0, 7.5, 6.0, 1.0;
                ]),
            )
            .unwrap();

            assert_relative_eq!(c.evaluate(0.0), dvector![0.5, 0.5]);
            assert_relative_eq!(c.evaluate(1.1), dvector![9.3419010416666683, 2.6049366319444447], epsilon = 1e-12);
            assert_relative_eq!(c.evaluate(9.0), dvector![1.0, 1.0]);
        }
    }

    #[rstest]
    fn control_polygon(c: Curve) {
        assert_eq!(c.control_polygon(), vec![Point2::new(1., 2.), Point2::new(3., 4.), Point2::new(5., 6.)]);
    }

    #[rstest]
    fn polyline(c: Curve) {
        assert_eq!(c.polyline(3), vec![Point2::new(1., 2.), Point2::new(3., 4.), Point2::new(5., 6.)]);
        assert_eq!(c.polyline(1), vec![Point2::new(1., 2.)]);
        assert!(c.polyline(0).is_empty());
    }

    #[rstest]
    fn samples_are_restartable(c: Curve) {
        let samples = c.samples(vec![0.0, 0.25, 1.0]);
        let first: Vec<Point2> = samples.clone().collect();
        let second: Vec<Point2> = samples.collect();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn error_display() {
        let err = CurveError::InsufficientPoints { n: 2, p: 3 };
        assert!(format!("{err}").contains("at least `p + 1 = 4` points"));
    }
}
