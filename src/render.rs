//! Planform rendering.
//!
//! Draws the outline produced by `FinModel::planform_outline` as a closed
//! polygon and marks the center of pressure. No fin quantities are computed
//! here; the renderer only reads the pre-computed points.

use std::fs;
use std::path::Path;

use fin_aero::PlanformOutline;
use plotters::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
    #[error("output path contains invalid UTF-8")]
    InvalidPath,
    #[error("drawing failed: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

/// Render the planform to a PNG at `output`.
pub fn render_planform(
    outline: &PlanformOutline,
    caption: &str,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<(), RenderError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = output.to_str().ok_or(RenderError::InvalidPath)?;
    let root = BitMapBackend::new(output_str, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let ((x0, x1), (y0, y1)) = equal_aspect_ranges(outline, width, height);

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 22.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption.to_string(), caption_font)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("Radial [m]")
        .y_desc("Longitudinal [m]")
        .label_style(label_font.clone())
        .x_label_formatter(&|v| format!("{v:.3}"))
        .y_label_formatter(&|v| format!("{v:.3}"))
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        outline.corners.to_vec(),
        ShapeStyle::from(&BLUE).stroke_width(2),
    )))?;

    let (cx, cy) = outline.center_of_pressure;
    let marker_color = RGBColor(210, 100, 20);
    let half = 0.02 * (x1 - x0);
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(cx - half, cy - half), (cx + half, cy + half)],
        ShapeStyle::from(&marker_color).stroke_width(3),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(cx - half, cy + half), (cx + half, cy - half)],
        ShapeStyle::from(&marker_color).stroke_width(3),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "CP".to_string(),
        (cx + 1.5 * half, cy + 1.5 * half),
        label_font.color(&marker_color),
    )))?;

    root.present()?;
    Ok(())
}

/// Axis ranges padded around the outline with one metre per pixel on both axes.
pub fn equal_aspect_ranges(
    outline: &PlanformOutline,
    width: u32,
    height: u32,
) -> ((f64, f64), (f64, f64)) {
    let (x_min, x_max, y_min, y_max) = outline.bounds();
    let pad = 0.1 * (x_max - x_min).max(y_max - y_min).max(f64::EPSILON);
    let (mut x0, mut x1) = (x_min - pad, x_max + pad);
    let (mut y0, mut y1) = (y_min - pad, y_max + pad);

    let aspect = width.max(1) as f64 / height.max(1) as f64;
    let (w, h) = (x1 - x0, y1 - y0);
    if w / h < aspect {
        let grow = (h * aspect - w) * 0.5;
        x0 -= grow;
        x1 += grow;
    } else {
        let grow = (w / aspect - h) * 0.5;
        y0 -= grow;
        y1 += grow;
    }
    ((x0, x1), (y0, y1))
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
