use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use thiserror::Error;

use crate::color;
use crate::data::model::Subject;
use crate::view::PerformanceChart;

// ---------------------------------------------------------------------------
// Off-screen chart rendering for the PDF report
// ---------------------------------------------------------------------------

/// Pixel size of the per-student bar chart snapshot.
pub const PERFORMANCE_SNAPSHOT_SIZE: (u32, u32) = (1040, 380);
/// Pixel size of the subject-share pie snapshot.
pub const SHARE_SNAPSHOT_SIZE: (u32, u32) = (520, 380);

static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
static FONT_INIT: Once = Once::new();
static FONT_OK: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("chart font could not be registered")]
    Font,
    #[error("chart drawing failed: {0}")]
    Draw(String),
    #[error("rendered buffer had unexpected size")]
    Buffer,
    #[error("png encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Register the bundled font with the rasterizer. Must run before any
/// snapshot is drawn; safe to call repeatedly.
pub fn register_fonts() -> Result<(), SnapshotError> {
    FONT_INIT.call_once(|| {
        let ok = register_font("sans-serif", FontStyle::Normal, FONT_BYTES).is_ok();
        FONT_OK.store(ok, Ordering::SeqCst);
    });
    if FONT_OK.load(Ordering::SeqCst) {
        Ok(())
    } else {
        Err(SnapshotError::Font)
    }
}

/// Draw the grouped per-subject bar chart into an RGB buffer.
pub fn render_performance(
    chart: &PerformanceChart,
    size: (u32, u32),
) -> Result<RgbImage, SnapshotError> {
    register_fonts()?;
    let (width, height) = size;
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let n = chart.labels.len();
        let x_span = n.max(1) as f64;
        let mut cc = ChartBuilder::on(&root)
            .caption("Per-student subject scores", ("sans-serif", 22))
            .margin(14)
            .x_label_area_size(30)
            .y_label_area_size(42)
            .build_cartesian_2d(-0.5f64..(x_span - 0.5), 0f64..100f64)
            .map_err(draw_err)?;

        // Group centres sit on the integers so the labels line up under them.
        let label_for = |x: &f64| -> String {
            let nearest = x.round();
            if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
                return String::new();
            }
            chart
                .labels
                .get(nearest as usize)
                .map(|name| short_name(name))
                .unwrap_or_default()
        };
        cc.configure_mesh()
            .disable_x_mesh()
            .y_desc("Score")
            .x_labels(n.max(1))
            .x_label_formatter(&label_for)
            .draw()
            .map_err(draw_err)?;

        let bar_width = 0.26;
        for (series_index, series) in chart.series.iter().enumerate() {
            let (r, g, b) = color::subject_rgb(series.subject);
            let style = RGBColor(r, g, b).filled();
            cc.draw_series(series.values.iter().enumerate().map(|(i, &value)| {
                let x0 = i as f64 - 0.39 + series_index as f64 * bar_width;
                let x1 = x0 + bar_width - 0.02;
                Rectangle::new([(x0, 0.0), (x1, value)], style)
            }))
            .map_err(draw_err)?
            .label(series.subject.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], style));
        }
        cc.configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.85))
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    RgbImage::from_raw(width, height, buffer).ok_or(SnapshotError::Buffer)
}

/// Draw the subject-share pie into an RGB buffer. Slices are filled as fans
/// of small triangles so any sweep angle stays convex.
pub fn render_subject_share(
    shares: &[f64; 3],
    size: (u32, u32),
) -> Result<RgbImage, SnapshotError> {
    register_fonts()?;
    let (width, height) = size;
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        root.draw(&Text::new(
            "Subject averages",
            (14, 10),
            ("sans-serif", 22),
        ))
        .map_err(draw_err)?;

        let total: f64 = shares.iter().sum();
        let cx = width as i32 / 2;
        let cy = height as i32 / 2 + 12;
        let radius = width.min(height) as f64 * 0.30;

        if total > 0.0 {
            let mut start = -std::f64::consts::FRAC_PI_2;
            for (subject, &share) in Subject::ALL.iter().zip(shares) {
                let sweep = share / total * std::f64::consts::TAU;
                let (r, g, b) = color::subject_rgb(*subject);
                let style = RGBColor(r, g, b).filled();
                let steps = ((sweep / 0.05).ceil() as usize).max(1);
                for step in 0..steps {
                    let a0 = start + sweep * step as f64 / steps as f64;
                    let a1 = start + sweep * (step + 1) as f64 / steps as f64;
                    let triangle = vec![
                        (cx, cy),
                        (
                            cx + (radius * a0.cos()) as i32,
                            cy + (radius * a0.sin()) as i32,
                        ),
                        (
                            cx + (radius * a1.cos()) as i32,
                            cy + (radius * a1.sin()) as i32,
                        ),
                    ];
                    root.draw(&Polygon::new(triangle, style)).map_err(draw_err)?;
                }

                let mid = start + sweep / 2.0;
                let lx = cx + ((radius + 30.0) * mid.cos()) as i32;
                let ly = cy + ((radius + 30.0) * mid.sin()) as i32;
                let label = format!("{} {:.1}", subject.label(), share);
                root.draw(&Text::new(label, (lx - 34, ly - 8), ("sans-serif", 15)))
                    .map_err(draw_err)?;
                start += sweep;
            }
        } else {
            root.draw(&Text::new(
                "No data",
                (cx - 28, cy - 8),
                ("sans-serif", 16),
            ))
            .map_err(draw_err)?;
        }
        root.present().map_err(draw_err)?;
    }
    RgbImage::from_raw(width, height, buffer).ok_or(SnapshotError::Buffer)
}

/// Encode a rendered snapshot as PNG bytes, the raster form the report
/// embeds.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, SnapshotError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(bytes)
}

fn short_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}

fn draw_err<E: std::fmt::Display>(error: E) -> SnapshotError {
    SnapshotError::Draw(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed::demo_roster;
    use crate::view;

    fn demo_performance() -> PerformanceChart {
        let roster = demo_roster();
        let all: Vec<usize> = (0..roster.len()).collect();
        view::performance_chart(&roster, &all)
    }

    #[test]
    fn performance_snapshot_has_requested_dimensions() {
        let image = render_performance(&demo_performance(), (320, 200)).unwrap();
        assert_eq!(image.width(), 320);
        assert_eq!(image.height(), 200);
    }

    #[test]
    fn performance_snapshot_is_not_blank() {
        let image = render_performance(&demo_performance(), (320, 200)).unwrap();
        let non_white = image
            .pixels()
            .filter(|p| p.0 != [255, 255, 255])
            .count();
        assert!(non_white > 0);
    }

    #[test]
    fn share_snapshot_contains_all_three_subject_colors() {
        let image = render_subject_share(&[71.5, 70.9, 72.2], (260, 200)).unwrap();
        for subject in Subject::ALL {
            let (r, g, b) = color::subject_rgb(subject);
            let found = image.pixels().any(|p| p.0 == [r, g, b]);
            assert!(found, "missing slice colour for {subject:?}");
        }
    }

    #[test]
    fn empty_share_snapshot_still_renders() {
        let image = render_subject_share(&[0.0; 3], (260, 200)).unwrap();
        assert_eq!(image.width(), 260);
    }

    #[test]
    fn snapshot_png_has_signature() {
        let image = render_subject_share(&[71.5, 70.9, 72.2], (120, 90)).unwrap();
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }
}
