//! Methods computing control points from data points.

pub mod interpolation;
