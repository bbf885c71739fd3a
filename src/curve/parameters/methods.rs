use tracing::debug;

use crate::{
    curve::{
        parameters::Parameters,
        points::{DataPoints, Points},
    },
    types::VecD,
};

/// Creates a parameters for every data point and distributes them equally ranging from 0 to 1.
/// This method is not recommended, as it can produce erratic shapes (such as loops) when the data is unevenly spaced.
///  see eq. (9.3) in `Piegl1997`
pub fn equally_spaced(segments: usize) -> Parameters {
    let m = segments;
    let mut u_bar = VecD::zeros(m + 1);

    for g in 1..m {
        u_bar[g] = g as f64 / m as f64;
    }
    if m > 0 {
        u_bar[m] = 1f64;
    }

    Parameters::new(u_bar)
}

///  see eqs. (9.4) and (9.5) in `Piegl1997`
pub fn centripetal(points: &DataPoints) -> Parameters {
    accumulated(points, |distance| distance.sqrt())
}

///  see eqs. (9.4) and (9.5) in `Piegl1997`
pub fn chord_length(points: &DataPoints) -> Parameters {
    accumulated(points, |distance| distance)
}

/// Accumulates the `weight`ed distances between consecutive points and normalizes the sums to `[0, 1]`.
fn accumulated(points: &DataPoints, weight: impl Fn(f64) -> f64) -> Parameters {
    let m = points.segments();

    let lengths: Vec<f64> = (1..=m).map(|g| weight((points.get(g) - points.get(g - 1)).norm())).collect();
    let sum: f64 = lengths.iter().sum();

    if sum == 0.0 || !sum.is_finite() {
        debug!(points = points.count(), sum, "degenerate point spacing, using equally spaced parameters");
        return equally_spaced(m);
    }

    let mut u_bar = VecD::zeros(m + 1);
    for g in 1..m {
        u_bar[g] = u_bar[g - 1] + lengths[g - 1] / sum;
    }
    if m > 0 {
        u_bar[m] = 1f64;
    }

    Parameters::new(u_bar)
}

#[cfg(test)]
mod tests {
    use nalgebra::{dmatrix, dvector};

    use super::*;

    mod equally_spaced {
        use super::*;

        #[test]
        fn test() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 3.0, 4.0, 5.0;]);
            let params = equally_spaced(points.segments());
            assert_eq!(params.vector(), &dvector![0., 0.25, 0.5, 0.75, 1.]);
        }

        #[test]
        fn no_segments() {
            assert_eq!(equally_spaced(0).vector(), &dvector![0.]);
        }
    }

    mod chord_length {
        use super::*;

        #[test]
        fn linear_1() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 3.0, 4.0, 5.0;]);
            let params = chord_length(&points);
            assert_eq!(params.vector(), &dvector![0., 0.25, 0.5, 0.75, 1.]);
        }

        #[test]
        fn linear_2() {
            let points = DataPoints::new(dmatrix![1.0, 3.0, 5.0;]);
            let params = chord_length(&points);
            assert_eq!(params.vector(), &dvector![0., 0.5, 1.]);
        }

        #[test]
        fn non_linear_1() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 5.0;]);
            let params = chord_length(&points);
            assert_eq!(params.vector(), &dvector![0., 0.25, 1.]);
        }

        #[test]
        fn non_linear_2() {
            let points = DataPoints::new(dmatrix![1.0, 4.0, 5.0;]);
            let params = chord_length(&points);
            assert_eq!(params.vector(), &dvector![0., 0.75, 1.]);
        }

        #[test]
        fn planar() {
            // Segment lengths 5 and 15.
            let points = DataPoints::new(dmatrix![
                0.0, 3.0, 12.0;
                0.0, 4.0, 16.0;
            ]);
            let params = chord_length(&points);
            assert_eq!(params.vector(), &dvector![0., 0.25, 1.]);
        }

        #[test]
        fn coincident_points_fall_back_to_equal_spacing() {
            let points = DataPoints::new(dmatrix![
                0.5, 0.5, 0.5, 0.5;
                0.2, 0.2, 0.2, 0.2;
            ]);
            let params = chord_length(&points);
            assert_eq!(params.vector(), &dvector![0., 1. / 3., 2. / 3., 1.]);
        }
    }

    mod centripetal {
        use super::*;

        #[test]
        fn linear_1() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 3.0, 4.0, 5.0;]);
            let params = centripetal(&points);
            assert_eq!(params.vector(), &dvector![0., 0.25, 0.5, 0.75, 1.]);
        }

        #[test]
        fn linear_2() {
            let points = DataPoints::new(dmatrix![1.0, 3.0, 5.0;]);
            let params = centripetal(&points);
            assert_eq!(params.vector(), &dvector![0., 0.5, 1.]);
        }

        #[test]
        fn non_linear_1() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 11.0;]);
            let params = centripetal(&points);
            assert_eq!(params.vector(), &dvector![0., 0.25, 1.]);
        }

        #[test]
        fn non_linear_2() {
            let points = DataPoints::new(dmatrix![1.0, 10.0, 11.0;]);
            let params = centripetal(&points);
            assert_eq!(params.vector(), &dvector![0., 0.75, 1.]);
        }

        #[test]
        fn coincident_points_fall_back_to_equal_spacing() {
            let points = DataPoints::new(dmatrix![2.0, 2.0, 2.0;]);
            let params = centripetal(&points);
            assert_eq!(params.vector(), &dvector![0., 0.5, 1.]);
        }
    }
}
