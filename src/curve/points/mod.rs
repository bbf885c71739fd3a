//! Implements the data points to be interpolated and the control points constituting the control polygon of the
//! curve.
//!
//! Points are stored column-wise in a `N × count` coordinate matrix, so the same code serves any dimension `N`.
//! The sketching front-end works with `N = 2` and converts from and to [`Point2`] at the boundary.

use crate::types::{MatD, Point2, VecDView};

pub mod methods;

#[derive(PartialEq, Debug, Clone)]
pub struct ControlPoints {
    matrix: MatD,
}

#[derive(PartialEq, Debug, Clone)]
pub struct DataPoints {
    matrix: MatD,
}

pub trait Points {
    fn matrix(&self) -> &MatD;

    fn get(&self, i: usize) -> VecDView<'_> {
        self.matrix().column(i)
    }

    fn dimension(&self) -> usize {
        self.matrix().nrows()
    }

    fn count(&self) -> usize {
        self.matrix().ncols()
    }

    fn is_empty(&self) -> bool {
        self.matrix().is_empty()
    }

    /// Number of segments between consecutive points, zero for an empty set.
    fn segments(&self) -> usize {
        self.count().saturating_sub(1)
    }

    /// Returns the first two coordinates of every point, in order.
    fn to_points(&self) -> Vec<Point2> {
        debug_assert!(self.dimension() >= 2, "points of dimension {} have no planar projection", self.dimension());
        self.matrix().column_iter().map(|c| Point2::new(c[0], c[1])).collect()
    }
}

impl Points for DataPoints {
    fn matrix(&self) -> &MatD {
        &self.matrix
    }
}

impl DataPoints {
    pub fn new(matrix: MatD) -> Self {
        DataPoints { matrix }
    }

    pub fn from_points(points: &[Point2]) -> Self {
        DataPoints { matrix: MatD::from_fn(2, points.len(), |r, c| points[c][r]) }
    }

    /// Returns a copy without repeated consecutive points and the number of points dropped.
    ///
    /// Of every run of identical points only the first one is kept, as a repeated point would produce a parameter
    /// interval of length zero.
    pub fn without_consecutive_duplicates(&self) -> (DataPoints, usize) {
        let keep: Vec<usize> = (0..self.count())
            .filter(|&i| i == 0 || self.get(i) != self.get(i - 1))
            .collect();

        let removed = self.count() - keep.len();
        if removed == 0 {
            return (self.clone(), 0);
        }

        let matrix = MatD::from_fn(self.dimension(), keep.len(), |r, c| self.matrix[(r, keep[c])]);
        (DataPoints { matrix }, removed)
    }
}

impl Points for ControlPoints {
    fn matrix(&self) -> &MatD {
        &self.matrix
    }
}

impl ControlPoints {
    pub fn new(matrix: MatD) -> Self {
        ControlPoints { matrix }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    fn control_points_example() -> ControlPoints {
        ControlPoints::new(dmatrix![
            1., 3., 5., 7.;
            2., 4., 6., 8.;
        ])
    }

    #[test]
    fn dimension() {
        assert_eq!(control_points_example().dimension(), 2);
    }

    #[test]
    fn count() {
        assert_eq!(control_points_example().count(), 4);
    }

    #[test]
    fn segments() {
        assert_eq!(control_points_example().segments(), 3);
        assert_eq!(DataPoints::from_points(&[]).segments(), 0);
    }

    #[test]
    fn from_points() {
        let points = DataPoints::from_points(&[Point2::new(0.0, 1.0), Point2::new(2.0, 3.0)]);
        assert_eq!(points.matrix(), &dmatrix![0., 2.; 1., 3.;]);
        assert_eq!(points.to_points(), vec![Point2::new(0.0, 1.0), Point2::new(2.0, 3.0)]);
    }

    mod duplicates {
        use super::*;

        #[test]
        fn consecutive_runs_collapse() {
            let points = DataPoints::new(dmatrix![
                0., 0., 1., 1., 1., 0.;
                0., 0., 1., 1., 1., 0.;
            ]);
            let (filtered, removed) = points.without_consecutive_duplicates();

            assert_eq!(removed, 3);
            assert_eq!(filtered.matrix(), &dmatrix![0., 1., 0.; 0., 1., 0.;]);
        }

        #[test]
        fn non_consecutive_repeats_survive() {
            let points = DataPoints::new(dmatrix![0., 1., 0.; 0., 1., 0.;]);
            let (filtered, removed) = points.without_consecutive_duplicates();

            assert_eq!(removed, 0);
            assert_eq!(filtered, points);
        }

        #[test]
        fn partially_equal_coordinates_are_distinct() {
            let points = DataPoints::new(dmatrix![0., 0.; 0., 1.;]);
            assert_eq!(points.without_consecutive_duplicates().1, 0);
        }
    }
}
