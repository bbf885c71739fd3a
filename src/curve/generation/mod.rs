#![cfg_attr(feature = "doc-images",
cfg_attr(all(),
doc = ::embed_doc_image::embed_image!("points", "doc-images/plots/generation/points.svg"),
doc = ::embed_doc_image::embed_image!("manual", "doc-images/plots/generation/manual.svg"),
doc = ::embed_doc_image::embed_image!("interpolation", "doc-images/plots/generation/interpolation.svg")))]
//! Generates a curve from control points or by interpolating data points.
//!
//! ## Methods
//!
//! - Manual control polygon
//! - Interpolation
//!   - chord-length, centripetal or equally spaced parameters
//!   - averaged or uniform knots
//!
//! | Raw Data | Manual Control Polygon | Interpolation |
//! |:------------------------------|:--------------------------|:--------------------------|
//! | ![][points]             | ![][manual]                            | ![][interpolation] |
//! | Scattered, 2-dimensional data points<br>(`N = 12`).<br><br>   | Curve of degree `p = 3` with `n = N-1`<br>segments and control points taken<br>directly from the data points. | Curve of degree `p = 3` and `n = N-1`<br>segments interpolating the data points.<br><br> |

use tracing::debug;

use crate::{
    curve::{
        knots,
        parameters::Parameters,
        points::{methods::interpolation, ControlPoints, DataPoints, Points},
        Curve, CurveError,
    },
    params::InterpolationParams,
    types::{Degree, Point2},
};

#[derive(Debug, Clone)]
pub enum Generation<'a> {
    Manual {
        degree: Degree,
        points: ControlPoints,
        knots: knots::Generation,
    },
    Interpolation {
        degree: Degree,
        points: &'a DataPoints,
        params: &'a InterpolationParams,
    },
}

/// An interpolating curve together with the parameters at which it passes through the data points.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub curve: Curve,
    pub parameters: Parameters,
}

/// Returns a B-Spline
///
/// # Examples
/// ```
/// use nalgebra::dmatrix;
/// use spline_builder::curve::generation::{generate, Generation::Manual};
/// use spline_builder::curve::knots::Generation::Uniform;
/// use spline_builder::curve::points::ControlPoints;
/// use spline_builder::types::Degree;
///
/// // Create a coordinate matrix containing five 2D points.
/// let points = ControlPoints::new(dmatrix![
/// // 1    2    3    4    5
///  -2.0,-2.0,-1.0, 0.5, 1.5; // x
///  -1.0, 0.0, 1.0, 1.0, 2.0; // y
/// ]);
/// let degree = Degree::new(2).unwrap();
/// let curve = generate(Manual { degree, points, knots: Uniform }).unwrap();
/// println!("{:?}", curve.evaluate(0.5));
/// ```
///
/// # Errors
///
/// - [`CurveError::InsufficientPoints`] for fewer than `p+1` points,
/// - [`CurveError::KnotsAndPointsMismatch`] or [`CurveError::UnsortedKnots`] for a manual knot vector not fitting the
///   control points,
/// - [`CurveError::SingularSystem`] if the data points cannot be interpolated with the chosen knots.
pub fn generate(generation: Generation) -> Result<Curve, CurveError> {
    match generation {
        Generation::Manual { degree, points, knots: method } => {
            let knots = match method {
                knots::Generation::Uniform => {
                    if points.count() < degree.get() + 1 {
                        return Err(CurveError::InsufficientPoints { n: points.count(), p: degree.get() });
                    }
                    knots::methods::uniform(degree, points.segments())?
                }
                knots::Generation::Manual { knots: given } => knots::Knots::new(degree, given.vector().clone()),
            };
            Curve::new(knots, points)
        }
        Generation::Interpolation { degree, points, params } => fit(points, degree, params).map(|fit| fit.curve),
    }
}

/// Interpolates the data points with a curve of degree `degree`.
///
/// Consecutive duplicates are dropped before the parameters are computed, so `n` counts distinct points only.
///
/// # Errors
///
/// - [`CurveError::InsufficientPoints`] for fewer than `p+1` distinct points,
/// - [`CurveError::SingularSystem`] if the knots violate the Schoenberg-Whitney conditions, which only happens for
///   [uniform knots][knots::Method::Uniform].
pub fn fit(points: &DataPoints, degree: Degree, params: &InterpolationParams) -> Result<Fit, CurveError> {
    let (points, removed) = points.without_consecutive_duplicates();
    if removed > 0 {
        debug!(removed, remaining = points.count(), "dropped consecutive duplicate points");
    }

    let (parameters, knots) = knots::build(&points, degree, params.parameterization, params.knots)?;
    let control_points =
        interpolation::interpolate(&knots, &points, &parameters, params.solver, params.pivot_tolerance)?;
    let curve = Curve::new(knots, ControlPoints::new(control_points))?;

    debug!(n = points.count(), p = degree.get(), solver = ?params.solver, "interpolated data points");
    Ok(Fit { curve, parameters })
}

/// Interpolates planar points with default parameters.
///
/// # Examples
/// ```
/// use nalgebra::Point2;
/// use spline_builder::curve::generation::interpolate;
/// use spline_builder::types::Degree;
///
/// let points = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 0.0)];
/// let curve = interpolate(&points, Degree::new(2).unwrap()).unwrap();
/// assert_eq!(curve.evaluate_point(1.0), Point2::new(2.0, 0.0));
/// ```
///
/// # Errors
///
/// See [`fit`].
pub fn interpolate(points: &[Point2], degree: Degree) -> Result<Curve, CurveError> {
    fit(&DataPoints::from_points(points), degree, &InterpolationParams::default()).map(|fit| fit.curve)
}
