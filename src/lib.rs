#![cfg_attr(feature = "doc-images",
cfg_attr(all(),
doc = ::embed_doc_image::embed_image!("img-curve", "doc-images/plots/generation/interpolation.svg")))]
//! **spline-builder** interpolates sketched point sequences with B-spline curves of arbitrary degree, based on
//! [nalgebra].
//!
//! ## Features
//! - [Interpolate][curve::generation::fit] `N`-dimensional data points with a curve of polynomial degree `p ≥ 1`.
//! - Multiple methods for
//!   - [curve parametrization][curve::parameters]
//!   - [knot generation][curve::knots]
//!   - [solving the interpolation system][linalg]
//! - Fast [curve evaluation][curve::evaluation] with de Boor's algorithm, as single points or lazy sample sequences.
//! - An interactive [session] holding the sketched points, the degree and the latest frame to draw.
//! - Built with [nalgebra](https://crates.io/crates/nalgebra) to store point data in contiguous arrays.
//!
//! ## What are B-Splines?
//!
//! B-splines are parametric functions composed of piecewise polynomials with a polynomial degree `p > 0`.
//! These piecewise polynomials are joined so that the parametric function is `p-1` times continuously
//! differentiable. The overall functions are parametrized over finite domains with the co-domain being an
//! `N`-dimensional vector space.
//!
//! Interpolating `n+1` points with such a curve amounts to a banded linear system for its `n+1` control points.
//! Because every basis function only spans `p+1` knot intervals, moving a single point changes the curve locally,
//! which keeps sketching responsive.
//!
//! ![A 2D B-Spline curve interpolating scattered points.][img-curve]
//!
//! ## Example
//! ```
//! use nalgebra::Point2;
//! use spline_builder::session::Session;
//!
//! let mut session = Session::new();
//! for (x, y) in [(0.1, 0.1), (0.3, 0.6), (0.6, 0.7)] {
//!     assert!(session.click(Point2::new(x, y)).unwrap().is_none());
//! }
//! let frame = session.click(Point2::new(0.9, 0.2)).unwrap().unwrap();
//! assert_eq!(frame.control_polygon.len(), 4);
//! ```

//! ## Literature:
//! |            |                                                                                                                        |
//! |-----------:|:-----------------------------------------------------------------------------------------------------------------------|
//! | Piegl1997  | Piegl, L., Tiller, W. The NURBS Book. Monographs in Visual Communication. Springer, Berlin, Heidelberg, 2nd ed., 1997. |
//! | deBoor2001 | de Boor, C. A Practical Guide to Splines. Applied Mathematical Sciences 27. Springer, New York, revised ed., 2001.      |

pub mod curve;
pub mod linalg;
pub mod params;
pub mod session;
pub mod types;
