use crate::constants::{CHART_DPI, CHART_SIZE_INCHES};
use crate::errors::AeroErrors;
use crate::models::performance::PerformanceSweep;
use nalgebra as na;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use tracing::info;

const FONT: FontFamily = FontFamily::SansSerif;
const LINE_WIDTH_PT: f64 = 1.5;
const POWER_COLOUR: RGBColor = RGBColor(0, 128, 0);

/// Pixel dimensions of the chart bitmap.
pub fn chart_dimensions() -> (u32, u32) {
    (CHART_SIZE_INCHES.0 * CHART_DPI, CHART_SIZE_INCHES.1 * CHART_DPI)
}

fn points_to_pixels(points: f64) -> f64 {
    points * CHART_DPI as f64 / 72.0
}

fn line_width() -> u32 {
    points_to_pixels(LINE_WIDTH_PT).round() as u32
}

fn plot_error<E: Display>(err: E) -> AeroErrors {
    AeroErrors::Plot(err.to_string())
}

/// Range covering the finite values with a 5% margin either side.
fn axis_range<'a>(values: impl Iterator<Item = &'a f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        0.0..1.0
    } else if min == max {
        min - 0.5..max + 0.5
    } else {
        let margin = (max - min) * 0.05;
        min - margin..max + margin
    }
}

fn series<'a>(
    x: &'a na::DVector<f64>,
    y: &'a na::DVector<f64>,
) -> impl Iterator<Item = (f64, f64)> + 'a {
    x.iter().copied().zip(y.iter().copied())
}

/// Writes the stacked lift/drag and power chart for `sweep` to `path` as a PNG.
pub fn render_performance_chart(
    sweep: &PerformanceSweep,
    airfoil_name: &str,
    path: &Path,
) -> Result<(), AeroErrors> {
    info!(
        "Rendering {} samples to {} at {:?} px",
        sweep.len(),
        path.display(),
        chart_dimensions()
    );

    let root = BitMapBackend::new(path, chart_dimensions()).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let title = format!("Aerodynamic Performance of {} Airfoil", airfoil_name);
    let title_font = FontDesc::new(FONT, points_to_pixels(12.0), FontStyle::Bold);
    let body = root.titled(&title, title_font).map_err(plot_error)?;

    let panels = body.split_evenly((2, 1));
    draw_force_panel(&panels[0], sweep)?;
    draw_power_panel(&panels[1], sweep)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn draw_force_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    sweep: &PerformanceSweep,
) -> Result<(), AeroErrors> {
    let x_range = axis_range(sweep.velocities().iter());
    let y_range = axis_range(sweep.lift().iter().chain(sweep.drag().iter()));

    let mut chart = ChartBuilder::on(area)
        .margin(30)
        .caption(
            "Lift and Drag Forces vs. Velocity",
            (FONT, points_to_pixels(10.0)),
        )
        .set_label_area_size(LabelAreaPosition::Bottom, 80)
        .set_label_area_size(LabelAreaPosition::Left, 110)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Velocity (m/s)")
        .y_desc("Force (N)")
        .axis_desc_style((FONT, points_to_pixels(9.0)))
        .label_style((FONT, points_to_pixels(8.0)))
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.05))
        .draw()
        .map_err(plot_error)?;

    let width = line_width();
    chart
        .draw_series(LineSeries::new(
            series(sweep.velocities(), sweep.lift()),
            BLUE.stroke_width(width),
        ))
        .map_err(plot_error)?
        .label("Lift Force")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], BLUE.stroke_width(width)));

    chart
        .draw_series(LineSeries::new(
            series(sweep.velocities(), sweep.drag()),
            RED.stroke_width(width),
        ))
        .map_err(plot_error)?
        .label("Drag Force")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], RED.stroke_width(width)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, points_to_pixels(8.0)))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.3))
        .draw()
        .map_err(plot_error)?;

    Ok(())
}

fn draw_power_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    sweep: &PerformanceSweep,
) -> Result<(), AeroErrors> {
    let x_range = axis_range(sweep.velocities().iter());
    let y_range = axis_range(sweep.power().iter());

    let mut chart = ChartBuilder::on(area)
        .margin(30)
        .caption(
            "Power Required to Overcome Drag",
            (FONT, points_to_pixels(10.0)),
        )
        .set_label_area_size(LabelAreaPosition::Bottom, 80)
        .set_label_area_size(LabelAreaPosition::Left, 110)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Velocity (m/s)")
        .y_desc("Power (Watts)")
        .axis_desc_style((FONT, points_to_pixels(9.0)))
        .label_style((FONT, points_to_pixels(8.0)))
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.05))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            series(sweep.velocities(), sweep.power()),
            POWER_COLOUR.stroke_width(line_width()),
        ))
        .map_err(plot_error)?;

    Ok(())
}
