//! Parameters for fitting and sampling interpolating curves.

use crate::{
    curve::{knots, parameters},
    linalg::{Solver, DEFAULT_PIVOT_TOLERANCE},
};

/// Parameters for curve interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationParams {
    /// Method assigning a parameter value to every data point. Default: chord length
    pub parameterization: parameters::Method,

    /// Method placing the internal knots. Default: averaging
    pub knots: knots::Method,

    /// Linear solver of the interpolation system. Default: banded
    pub solver: Solver,

    /// Pivots with a magnitude up to this value make the system singular. Default: 1e-12
    pub pivot_tolerance: f64,

    /// Number of curve samples per segment between two data points. Default: 10
    pub samples_per_segment: usize,
}

impl Default for InterpolationParams {
    fn default() -> Self {
        Self {
            parameterization: parameters::Method::default(),
            knots: knots::Method::default(),
            solver: Solver::default(),
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            samples_per_segment: 10,
        }
    }
}

impl InterpolationParams {
    /// Create params with centripetal parameters, which follow sharp turns of the data more closely.
    #[must_use]
    pub fn centripetal() -> Self {
        Self {
            parameterization: parameters::Method::Centripetal,
            ..Default::default()
        }
    }

    /// Create params solving densely, as a reference for small systems.
    #[must_use]
    pub fn dense() -> Self {
        Self {
            solver: Solver::Dense,
            ..Default::default()
        }
    }

    /// Set the parameterization method.
    #[must_use]
    pub const fn with_parameterization(mut self, method: parameters::Method) -> Self {
        self.parameterization = method;
        self
    }

    /// Set the knot generation method.
    #[must_use]
    pub const fn with_knots(mut self, method: knots::Method) -> Self {
        self.knots = method;
        self
    }

    #[must_use]
    pub const fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    /// Set the pivot tolerance. Negative values are treated as zero.
    #[must_use]
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance.max(0.0);
        self
    }

    /// Set the samples per segment, at least one.
    #[must_use]
    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples.max(1);
        self
    }

    /// Number of samples for a curve through `points` data points, `samples_per_segment · (points - 1)`.
    ///
    /// A curve needs at least two points, so the count never drops below `samples_per_segment`.
    pub fn sample_count(&self, points: usize) -> usize {
        self.samples_per_segment * points.saturating_sub(1).max(1)
    }
}
