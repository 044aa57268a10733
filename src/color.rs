use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Header colours
// ---------------------------------------------------------------------------

pub const TITLE_RED: Color32 = Color32::from_rgb(0xff, 0x4c, 0x5b);
pub const ORANGE: Color32 = Color32::from_rgb(0xf7, 0x76, 0x00);
pub const BLUE: Color32 = Color32::from_rgb(0x1f, 0xb4, 0xff);

/// Single-series colour for lines, points and histograms.
pub const SERIES: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

/// Overlay colour for the density curve.
pub const DENSITY: Color32 = Color32::from_rgb(0x0b, 0x3d, 0x6b);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
