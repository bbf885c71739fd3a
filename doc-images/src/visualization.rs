use std::{error::Error, fs, path::Path};

use plotters::{backend::SVGBackend, chart::ChartContext, coord::types::RangedCoordf64, prelude::*};

use spline_builder::{
    curve::{
        points::{DataPoints, Points},
        Curve,
    },
    types::Point2,
};

use crate::PLOTS_DIR;

const IMG_SIZE: (u32, u32) = (400, 400);
const NUM_POINTS: usize = 200;

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

pub struct Limits {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

/// A curve to draw, optionally together with its control polygon.
pub struct Styled<'a> {
    pub curve: &'a Curve,
    pub color: RGBAColor,
    pub control_polygon: bool,
}

fn xy(p: &Point2) -> (f64, f64) {
    (p.x, p.y)
}

pub fn draw_curve_2d(chart: &mut Chart, curve: &Curve, color: RGBAColor) -> Result<(), Box<dyn Error>> {
    let polyline = curve.polyline(NUM_POINTS);
    chart.draw_series(LineSeries::new(polyline.iter().map(xy), color.filled().stroke_width(1)).point_size(0))?;

    let mut knot_values = curve.knots().domain().iter().copied().collect::<Vec<_>>();
    knot_values.dedup();
    chart.draw_series(curve.samples(knot_values).map(|p| Circle::new(xy(&p), 2, color)))?;
    Ok(())
}

pub fn draw_control_polygon_2d(chart: &mut Chart, curve: &Curve, color: RGBAColor) -> Result<(), Box<dyn Error>> {
    let polygon = curve.control_polygon();
    let marker = |p: &Point2| Rectangle::new([(p.x - 0.01, p.y - 0.01), (p.x + 0.01, p.y + 0.01)], color.filled());
    chart.draw_series(polygon.iter().map(marker))?;
    chart.draw_series(LineSeries::new(polygon.iter().map(xy), color))?;
    Ok(())
}

pub fn draw_data_points_2d(chart: &mut Chart, points: &DataPoints) -> Result<(), Box<dyn Error>> {
    chart.draw_series(points.to_points().iter().map(|p| Circle::new(xy(p), 3, BLACK.filled())))?;
    Ok(())
}

pub fn generate_2d_plot(
    filename: &str,
    curves: &[Styled],
    limits: &Limits,
    data: Option<&DataPoints>,
) -> Result<(), Box<dyn Error>> {
    let path = format!("{PLOTS_DIR}{filename}");
    if let Some(dir) = Path::new(&path).parent() {
        fs::create_dir_all(dir)?;
    }
    let area = SVGBackend::new(&path, IMG_SIZE).into_drawing_area();
    area.fill(&RGBAColor(255, 255, 255, 0.81))?; // Matches the font color in docs.rs dark mode

    let mut chart_builder = ChartBuilder::on(&area);
    chart_builder.margin(10).set_left_and_bottom_label_area_size(20);

    let mut chart = chart_builder.build_cartesian_2d(limits.min[0]..limits.max[0], limits.min[1]..limits.max[1])?;
    chart.configure_mesh().draw()?;

    if let Some(dp) = data {
        draw_data_points_2d(&mut chart, dp)?;
    }

    for styled in curves {
        if styled.control_polygon {
            draw_control_polygon_2d(&mut chart, styled.curve, styled.color.mix(0.5))?;
        }
        draw_curve_2d(&mut chart, styled.curve, styled.color)?;
    }

    area.present()?;
    println!("Result has been saved to {}", path);
    Ok(())
}
