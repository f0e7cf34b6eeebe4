use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Instrument colours
// ---------------------------------------------------------------------------

/// Convert a hue (degrees) to an sRGB `Color32` at fixed saturation/lightness.
fn hue_to_color(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Stable colour for an instrument name, so the same spectrograph is drawn
/// in the same colour across runs.
pub fn instrument_color(instrument: &str) -> Color32 {
    // FNV-1a; std's hasher is randomly seeded per process.
    let hash = instrument
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
            (h ^ b as u64).wrapping_mul(0x0100_0000_01b3)
        });
    hue_to_color((hash % 360) as f32)
}
