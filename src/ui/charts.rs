use std::ops::RangeInclusive;

use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use crate::color;
use crate::data::model::Subject;
use crate::view::{PerformanceChart, RadialChart};

/// Height of each chart cell in the dashboard grid.
const CHART_HEIGHT: f32 = 230.0;

// ---------------------------------------------------------------------------
// Grouped bar chart – per-student subject scores
// ---------------------------------------------------------------------------

/// Render the per-student grouped bars, one series per subject. Group
/// centres sit on the integers so the student labels line up under them.
pub fn performance_plot(ui: &mut Ui, chart: &PerformanceChart) {
    let n = chart.labels.len();
    let bar_width = 0.26;

    let mut bar_charts = Vec::with_capacity(chart.series.len());
    for (series_index, series) in chart.series.iter().enumerate() {
        let fill = color::subject_color(series.subject);
        let bars: Vec<Bar> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let x = i as f64 + (series_index as f64 - 1.0) * bar_width;
                Bar::new(x, value).width(bar_width - 0.02).fill(fill)
            })
            .collect();
        bar_charts.push(
            BarChart::new(bars)
                .name(series.subject.label())
                .color(fill),
        );
    }

    let labels = chart.labels.clone();
    Plot::new("performance_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .include_y(0.0)
        .include_y(100.0)
        .include_x(-0.6)
        .include_x(n.max(1) as f64 - 0.4)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let nearest = mark.value.round();
            if (mark.value - nearest).abs() > 0.01 || nearest < 0.0 {
                return String::new();
            }
            labels
                .get(nearest as usize)
                .map(|name| short_name(name))
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for bars in bar_charts {
                plot_ui.bar_chart(bars);
            }
        });
}

fn short_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}

// ---------------------------------------------------------------------------
// Trend line – simulated weekly class average
// ---------------------------------------------------------------------------

pub fn trend_plot(ui: &mut Ui, points: &[[f64; 2]]) {
    let plot_points: PlotPoints = points.iter().copied().collect();
    let line = Line::new(plot_points)
        .name("Class average")
        .color(color::TREND_COLOR)
        .width(2.0)
        .fill(0.0);

    Plot::new("trend_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .include_y(0.0)
        .include_y(100.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            let week = mark.value;
            if week.fract().abs() > 0.01 || week < 1.0 {
                return String::new();
            }
            format!("W{week:.0}")
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

// ---------------------------------------------------------------------------
// Pie – subject averages as shares
// ---------------------------------------------------------------------------

/// Paint the subject-average pie. egui_plot has no pie type, so slices are
/// filled as fans of small triangles (convex shapes only).
pub fn subject_share_pie(ui: &mut Ui, shares: &[f64; 3]) {
    let (response, painter) =
        ui.allocate_painter(Vec2::new(ui.available_width(), CHART_HEIGHT), Sense::hover());
    let rect = response.rect;

    let total: f64 = shares.iter().sum();
    if total <= 0.0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No data",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let center = rect.center() - Vec2::new(0.0, 12.0);
    let radius = (rect.width().min(rect.height()) * 0.34).max(10.0);

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (subject, &share) in Subject::ALL.iter().zip(shares) {
        let sweep = share / total * std::f64::consts::TAU;
        let fill = color::subject_color(*subject);
        let steps = ((sweep / 0.08).ceil() as usize).max(1);
        for step in 0..steps {
            let a0 = start + sweep * step as f64 / steps as f64;
            let a1 = start + sweep * (step + 1) as f64 / steps as f64;
            painter.add(Shape::convex_polygon(
                vec![
                    center,
                    point_on(center, radius, a0),
                    point_on(center, radius, a1),
                ],
                fill,
                Stroke::NONE,
            ));
        }
        start += sweep;
    }

    // Legend row under the pie, swatch plus value per subject.
    let legend_y = rect.bottom() - 12.0;
    let mut x = rect.left() + 8.0;
    for (subject, &share) in Subject::ALL.iter().zip(shares) {
        let swatch = Rect::from_min_size(Pos2::new(x, legend_y - 5.0), Vec2::splat(10.0));
        painter.rect_filled(swatch, 2.0, color::subject_color(*subject));
        let written = painter.text(
            Pos2::new(x + 14.0, legend_y),
            Align2::LEFT_CENTER,
            format!("{} {share:.1}", subject.label()),
            FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
        x = written.right() + 14.0;
    }
}

// ---------------------------------------------------------------------------
// Radar – top performer across the three subjects
// ---------------------------------------------------------------------------

/// Paint the three-axis radar for the strongest visible student. With three
/// axes the score triangle is always convex, so one filled shape suffices.
pub fn radial_plot(ui: &mut Ui, radial: Option<&RadialChart>) {
    let (response, painter) =
        ui.allocate_painter(Vec2::new(ui.available_width(), CHART_HEIGHT), Sense::hover());
    let rect = response.rect;

    let Some(radial) = radial else {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No students in view",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    };

    let center = rect.center() + Vec2::new(0.0, 8.0);
    let radius = (rect.width().min(rect.height()) * 0.30).max(10.0);
    let grid = ui.visuals().widgets.noninteractive.bg_stroke.color;
    let axis_angle =
        |axis: usize| -std::f64::consts::FRAC_PI_2 + axis as f64 * std::f64::consts::TAU / 3.0;

    // Reference rings at 25/50/75/100.
    for ring in [0.25f32, 0.5, 0.75, 1.0] {
        let corners: Vec<Pos2> = (0..3)
            .map(|axis| point_on(center, radius * ring, axis_angle(axis)))
            .collect();
        for axis in 0..3 {
            painter.line_segment(
                [corners[axis], corners[(axis + 1) % 3]],
                Stroke::new(1.0, grid),
            );
        }
    }

    // Spokes and subject labels.
    for (axis, subject) in Subject::ALL.iter().enumerate() {
        let tip = point_on(center, radius, axis_angle(axis));
        painter.line_segment([center, tip], Stroke::new(1.0, grid));
        painter.text(
            point_on(center, radius + 16.0, axis_angle(axis)),
            Align2::CENTER_CENTER,
            subject.label(),
            FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
    }

    // Score triangle.
    let accent = color::subject_color(Subject::Math);
    let fill = Color32::from_rgba_unmultiplied(0x0b, 0x83, 0xb5, 46);
    let triangle: Vec<Pos2> = radial
        .scores
        .iter()
        .enumerate()
        .map(|(axis, &score)| {
            point_on(center, radius * (score / 100.0) as f32, axis_angle(axis))
        })
        .collect();
    painter.add(Shape::convex_polygon(triangle, fill, Stroke::new(2.0, accent)));

    painter.text(
        Pos2::new(rect.center().x, rect.top() + 10.0),
        Align2::CENTER_CENTER,
        format!("Top: {}", radial.name),
        FontId::proportional(13.0),
        ui.visuals().strong_text_color(),
    );
}

fn point_on(center: Pos2, radius: f32, angle: f64) -> Pos2 {
    center + Vec2::new(radius * angle.cos() as f32, radius * angle.sin() as f32)
}
