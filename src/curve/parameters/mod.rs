//! Implements different parameter generation methods.
//!
//! Every data point receives a parameter value `ū_g ∈ [0, 1]`, at which the interpolating curve will pass through it.
//!
//! - Chord-length method (default)
//! - Centripetal method
//! - Equally spaced parameters
//!
//! If all data points coincide, the geometric methods fall back to equally spaced parameters.

use crate::{
    curve::points::{DataPoints, Points},
    types::VecD,
};

pub mod methods;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    vector: VecD,
    segments: usize,
}

impl Parameters {
    pub fn new(vector: VecD) -> Self {
        let segments = vector.len().saturating_sub(1);
        Parameters { vector, segments }
    }

    pub fn vector(&self) -> &VecD {
        &self.vector
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.vector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    EquallySpaced,
    Centripetal,
    #[default]
    ChordLength,
}

pub fn generate(points: &DataPoints, method: Method) -> Parameters {
    match method {
        Method::EquallySpaced => methods::equally_spaced(points.segments()),
        Method::ChordLength => methods::chord_length(points),
        Method::Centripetal => methods::centripetal(points),
    }
}
