//! SVG rendering of call/put price curves with `plotters`.
//!
//! Draws both series against the underlying price, a dashed vertical marker at
//! the strike, axis labels, a legend and the mesh grid.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::curve::CurveSet;

const CALL_COLOR: RGBColor = RGBColor(31, 119, 180);
const PUT_COLOR: RGBColor = RGBColor(255, 127, 14);
const STRIKE_COLOR: RGBColor = RGBColor(128, 128, 128);

/// Size, labels and styling of the rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Stroke width of the price series, in pixels
    pub line_width: u32,
    /// Draw the dashed strike marker
    pub show_strike: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            title: "Option Prices vs. Underlying Stock Price (Black-Scholes Model)".to_string(),
            x_label: "Underlying Stock Price (S)".to_string(),
            y_label: "Option Price".to_string(),
            line_width: 2,
            show_strike: true,
        }
    }
}

/// Renders `curves` to an SVG file at `path`.
pub fn render_svg(curves: &CurveSet, path: impl AsRef<Path>, options: &RenderOptions) -> Result<()> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, (options.width, options.height)).into_drawing_area();
    draw(&root, curves, options)?;
    root.present().map_err(draw_error)?;
    tracing::info!(path = %path.display(), "chart written");
    Ok(())
}

/// Renders `curves` to an in-memory SVG document.
pub fn render_svg_string(curves: &CurveSet, options: &RenderOptions) -> Result<String> {
    let mut buffer = String::new();
    {
        let root =
            SVGBackend::with_string(&mut buffer, (options.width, options.height)).into_drawing_area();
        draw(&root, curves, options)?;
        root.present().map_err(draw_error)?;
    }
    Ok(buffer)
}

fn draw<DB>(root: &DrawingArea<DB, Shift>, curves: &CurveSet, options: &RenderOptions) -> Result<()>
where
    DB: DrawingBackend,
{
    let (x_min, x_max) = curves
        .underlying_range()
        .ok_or_else(|| anyhow!("cannot chart an empty curve"))?;
    let (p_min, p_max) = curves
        .price_range()
        .ok_or_else(|| anyhow!("cannot chart an empty curve"))?;

    let (x_min, x_max) = padded_axis(x_min, x_max, 0.0);
    // 5% headroom so the curves do not touch the frame
    let (y_min, y_max) = padded_axis(p_min.min(0.0), p_max, 0.05);

    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .caption(&options.title, ("sans-serif", 24))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .draw()
        .map_err(draw_error)?;

    let line_width = options.line_width.max(1);
    for (curve, color, label) in [
        (&curves.call, CALL_COLOR, "Call Option Price"),
        (&curves.put, PUT_COLOR, "Put Option Price"),
    ] {
        let style = color.stroke_width(line_width);
        let line: Vec<(f64, f64)> = curve.iter().map(|p| (p.underlying_price, p.price)).collect();
        chart
            .draw_series(std::iter::once(PathElement::new(line, style)))
            .map_err(draw_error)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    if options.show_strike && curves.strike_price >= x_min && curves.strike_price <= x_max {
        let style = STRIKE_COLOR.stroke_width(1);
        chart
            .draw_series(
                dashes(curves.strike_price, y_min, y_max)
                    .into_iter()
                    .map(move |segment| PathElement::new(segment, style)),
            )
            .map_err(draw_error)?
            .label("Strike Price")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 8, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_error)?;

    Ok(())
}

/// Widens a degenerate axis and adds `pad` (a fraction of the span) on both ends.
fn padded_axis(lo: f64, hi: f64, pad: f64) -> (f64, f64) {
    if hi - lo <= f64::EPSILON * hi.abs().max(1.0) {
        let half = lo.abs().max(1.0) * 0.5;
        return (lo - half, hi + half);
    }
    let margin = (hi - lo) * pad;
    (lo - margin, hi + margin)
}

/// Vertical dash segments at `x` covering `[y_min, y_max]`, 2% on / 1% off.
fn dashes(x: f64, y_min: f64, y_max: f64) -> Vec<Vec<(f64, f64)>> {
    let span = y_max - y_min;
    let on = span * 0.02;
    let period = span * 0.03;
    let mut segments = Vec::new();
    let mut y = y_min;
    while y < y_max {
        segments.push(vec![(x, y), (x, (y + on).min(y_max))]);
        y += period;
    }
    segments
}

// plotters errors borrow the backend's error type; flatten them to text.
fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> anyhow::Error {
    anyhow!("chart rendering failed: {err}")
}
