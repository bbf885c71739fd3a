//! The state behind an interactive sketch.
//!
//! A [`Session`] collects the points a user clicks and refits the interpolating curve after every event that changes
//! what is shown. While editing, the pointer acts as a trailing point that follows the cursor without being
//! committed. The previewing mode freezes the pointer where it was when the mode was entered.
//!
//! The session only returns data. Drawing the [`Frame`] and mapping keys to [`Session::set_degree`] or
//! [`Session::toggle_control_polygon`] is left to the front-end.

use tracing::debug;

use crate::{
    curve::{generation, points::DataPoints, CurveError},
    params::InterpolationParams,
    types::{Degree, Point2},
};

/// The highest degree a user can select.
pub const MAX_DEGREE: usize = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Clicks commit points and the pointer trails the curve.
    #[default]
    Editing,
    /// Clicks and pointer motion are ignored.
    Previewing,
}

/// The renderable result of a refit.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Samples of the curve, equally spaced in the parameter domain.
    pub curve: Vec<Point2>,
    pub control_polygon: Vec<Point2>,
}

#[derive(Debug, Clone)]
pub struct Session {
    points: Vec<Point2>,
    degree: Degree,
    control_polygon_visible: bool,
    mode: Mode,
    pointer: Option<Point2>,
    frame: Option<Frame>,
    params: InterpolationParams,
}

/// The frame after an event, `None` while there are too few points for a curve.
pub type Update<'a> = Result<Option<&'a Frame>, CurveError>;

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_params(InterpolationParams::default())
    }

    pub fn with_params(params: InterpolationParams) -> Self {
        Session {
            points: Vec::new(),
            degree: Degree::default(),
            control_polygon_visible: false,
            mode: Mode::default(),
            pointer: None,
            frame: None,
            params,
        }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn params(&self) -> &InterpolationParams {
        &self.params
    }

    pub fn is_control_polygon_visible(&self) -> bool {
        self.control_polygon_visible
    }

    /// The last frame, if the view had enough points for a curve.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// The control polygon of the last frame, if it is shown.
    pub fn visible_control_polygon(&self) -> Option<&[Point2]> {
        match (&self.frame, self.control_polygon_visible) {
            (Some(frame), true) => Some(&frame.control_polygon),
            _ => None,
        }
    }

    /// The points the curve is fitted to: the committed points followed by the trailing pointer.
    ///
    /// The pointer is left out if it coincides with the last committed point.
    pub fn view(&self) -> DataPoints {
        let mut view = self.points.clone();
        if let Some(pointer) = self.pointer.filter(|&p| !self.is_last(p)) {
            view.push(pointer);
        }
        DataPoints::from_points(&view)
    }

    /// Commits `point` and refits. Ignored while previewing or if `point` repeats the last committed point.
    ///
    /// # Errors
    ///
    /// Fails with [`CurveError::SingularSystem`] if the view cannot be interpolated.
    pub fn click(&mut self, point: Point2) -> Update<'_> {
        if self.mode == Mode::Previewing || self.is_last(point) {
            return Ok(self.frame.as_ref());
        }

        self.points.push(point);
        self.pointer = Some(point);
        debug!(x = point.x, y = point.y, count = self.points.len(), "committed point");
        self.refit()
    }

    /// Moves the trailing point to `point` and refits. Ignored while previewing or if `point` repeats the last
    /// committed point.
    ///
    /// # Errors
    ///
    /// See [`Session::click`].
    pub fn pointer_moved(&mut self, point: Point2) -> Update<'_> {
        if self.mode == Mode::Previewing || self.is_last(point) {
            return Ok(self.frame.as_ref());
        }

        self.pointer = Some(point);
        self.refit()
    }

    /// Switches between editing and previewing with the trailing point at `pointer`, then refits.
    ///
    /// # Errors
    ///
    /// See [`Session::click`].
    pub fn toggle_mode(&mut self, pointer: Point2) -> Update<'_> {
        self.mode = match self.mode {
            Mode::Editing => Mode::Previewing,
            Mode::Previewing => Mode::Editing,
        };
        self.pointer = Some(pointer);
        debug!(mode = ?self.mode, "toggled mode");
        self.refit()
    }

    /// Sets the degree for `1 ≤ degree ≤ 9` and refits. Other values are ignored.
    ///
    /// # Errors
    ///
    /// See [`Session::click`].
    pub fn set_degree(&mut self, degree: usize) -> Update<'_> {
        let Some(degree) = Degree::new(degree).filter(|d| d.get() <= MAX_DEGREE) else {
            debug!(degree, "ignored degree outside of 1..=9");
            return Ok(self.frame.as_ref());
        };

        self.degree = degree;
        debug!(p = degree.get(), "set degree");
        self.refit()
    }

    /// Shows or hides the control polygon. The curve is not refitted.
    pub fn toggle_control_polygon(&mut self) -> bool {
        self.control_polygon_visible = !self.control_polygon_visible;
        self.control_polygon_visible
    }

    /// Drops all points and restores the defaults, keeping the interpolation parameters.
    pub fn reset(&mut self) {
        *self = Self::with_params(self.params.clone());
        debug!("reset session");
    }

    fn is_last(&self, point: Point2) -> bool {
        self.points.last() == Some(&point)
    }

    fn refit(&mut self) -> Update<'_> {
        self.frame = None;

        let view = self.view();
        let fit = match generation::fit(&view, self.degree, &self.params) {
            Ok(fit) => fit,
            Err(CurveError::InsufficientPoints { n, p }) => {
                debug!(n, p, "too few points for a curve");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let count = self.params.sample_count(fit.parameters.len());
        let frame = Frame { curve: fit.curve.polyline(count), control_polygon: fit.curve.control_polygon() };
        Ok(Some(&*self.frame.insert(frame)))
    }
}
