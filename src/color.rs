use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Category, Subject};

// ---------------------------------------------------------------------------
// Fixed series palette
// ---------------------------------------------------------------------------

/// Brand colour per subject as raw RGB, shared by the live charts and the
/// report renderer (which does not speak `Color32`).
pub fn subject_rgb(subject: Subject) -> (u8, u8, u8) {
    match subject {
        Subject::Math => (0x0b, 0x83, 0xb5),
        Subject::Science => (0x0e, 0xa5, 0xa4),
        Subject::English => (0xf5, 0x9e, 0x0b),
    }
}

pub fn subject_color(subject: Subject) -> Color32 {
    let (r, g, b) = subject_rgb(subject);
    Color32::from_rgb(r, g, b)
}

/// Accent for category badges in the table and the tip cards.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Excellent => Color32::from_rgb(0x16, 0xa3, 0x4a),
        Category::Average => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Category::Poor => Color32::from_rgb(0xdc, 0x26, 0x26),
    }
}

/// Line colour of the weekly trend chart.
pub const TREND_COLOR: Color32 = Color32::from_rgb(0x66, 0x10, 0xf2);

// ---------------------------------------------------------------------------
// Score gradient
// ---------------------------------------------------------------------------

/// Map a score in [0, 100] onto a red→green hue ramp for KPI and table
/// accents, using evenly spaced HSL hues.
pub fn score_color(score: f64) -> Color32 {
    let t = (score / 100.0).clamp(0.0, 1.0) as f32;
    let hue = t * 120.0; // 0 = red, 120 = green
    let hsl = Hsl::new(hue, 0.72, 0.42);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
