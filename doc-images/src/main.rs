use std::error::Error;

use nalgebra::dmatrix;
use plotters::prelude::*;

use spline_builder::{
    curve::{
        generation::{fit, generate, Generation::Manual},
        knots::Generation::Uniform,
        parameters,
        points::{ControlPoints, DataPoints, Points},
    },
    params::InterpolationParams,
    types::Degree,
};

use crate::visualization::{Limits, Styled};

mod visualization;

const PLOTS_DIR: &str = "doc-images/plots/";

const RED_100: RGBAColor = RGBAColor(255, 0, 0, 1.0);
const BLUE_100: RGBAColor = RGBAColor(0, 0, 255, 1.0);
const PURPLE_100: RGBAColor = RGBAColor(200, 0, 200, 1.0);

fn limits() -> Limits {
    Limits { min: [0.0, 0.0], max: [1.0, 1.0] }
}

/// Points as they would be sketched into the unit square.
fn scattered_data_points() -> DataPoints {
    DataPoints::new(dmatrix![
        0.08, 0.12, 0.22, 0.35, 0.41, 0.50, 0.62, 0.70, 0.74, 0.82, 0.90, 0.93;
        0.10, 0.38, 0.62, 0.70, 0.52, 0.30, 0.28, 0.45, 0.72, 0.86, 0.66, 0.40;
    ])
}

fn degree(p: usize) -> Result<Degree, Box<dyn Error>> {
    Degree::new(p).ok_or_else(|| "degree must be positive".into())
}

fn manual_plot() -> Result<(), Box<dyn Error>> {
    let dp = scattered_data_points();
    let points = ControlPoints::new(dp.matrix().clone());
    let c = generate(Manual { degree: Degree::CUBIC, knots: Uniform, points })?;
    visualization::generate_2d_plot(
        "generation/manual.svg",
        &[Styled { curve: &c, color: RED_100, control_polygon: true }],
        &limits(),
        Some(&dp),
    )
}

fn interpolation_plots() -> Result<(), Box<dyn Error>> {
    let dp = scattered_data_points();
    let params = InterpolationParams::default();
    let c = fit(&dp, Degree::CUBIC, &params)?.curve;

    visualization::generate_2d_plot("generation/points.svg", &[], &limits(), Some(&dp))?;
    visualization::generate_2d_plot(
        "generation/interpolation.svg",
        &[Styled { curve: &c, color: RED_100, control_polygon: true }],
        &limits(),
        Some(&dp),
    )
}

fn degree_plot() -> Result<(), Box<dyn Error>> {
    let dp = scattered_data_points();
    let params = InterpolationParams::default();
    let curves = [(1, BLUE_100), (2, PURPLE_100), (3, RED_100)]
        .into_iter()
        .map(|(p, color)| -> Result<_, Box<dyn Error>> { Ok((fit(&dp, degree(p)?, &params)?.curve, color)) })
        .collect::<Result<Vec<_>, Box<dyn Error>>>()?;
    let styled: Vec<Styled> =
        curves.iter().map(|(curve, color)| Styled { curve, color: *color, control_polygon: false }).collect();

    visualization::generate_2d_plot("interpolation/degrees.svg", &styled, &limits(), Some(&dp))
}

fn parameterization_plot() -> Result<(), Box<dyn Error>> {
    let dp = scattered_data_points();
    let methods = [
        (parameters::Method::EquallySpaced, BLUE_100),
        (parameters::Method::Centripetal, PURPLE_100),
        (parameters::Method::ChordLength, RED_100),
    ];
    let curves = methods
        .into_iter()
        .map(|(method, color)| -> Result<_, Box<dyn Error>> {
            let params = InterpolationParams::default().with_parameterization(method);
            Ok((fit(&dp, Degree::CUBIC, &params)?.curve, color))
        })
        .collect::<Result<Vec<_>, Box<dyn Error>>>()?;
    let styled: Vec<Styled> =
        curves.iter().map(|(curve, color)| Styled { curve, color: *color, control_polygon: false }).collect();

    visualization::generate_2d_plot("interpolation/parameterization.svg", &styled, &limits(), Some(&dp))
}

fn main() -> Result<(), Box<dyn Error>> {
    // Generation
    manual_plot()?;
    interpolation_plots()?;

    // Interpolation
    degree_plot()?;
    parameterization_plot()?;

    Ok(())
}
