use eframe::egui::Color32;

use crate::color::instrument_color;
use crate::data::model::SpectrumRecord;

// ---------------------------------------------------------------------------
// Preview state
// ---------------------------------------------------------------------------

/// Everything the preview window shows, independent of rendering.
pub struct PreviewState {
    pub object_id: String,
    pub spectrum: SpectrumRecord,
    /// Line colour, derived from the instrument.
    pub color: Color32,
    /// Rescale flux to [0, 1] for display.
    pub minmax_scaling: bool,
}

impl PreviewState {
    pub fn new(object_id: &str, spectrum: SpectrumRecord) -> Self {
        let color = instrument_color(&spectrum.instrument_name);
        Self {
            object_id: object_id.to_string(),
            spectrum,
            color,
            minmax_scaling: false,
        }
    }

    /// `{object} {instrument} {date}`
    pub fn title(&self) -> String {
        format!(
            "{} {} {}",
            self.object_id,
            self.spectrum.instrument_name,
            self.spectrum.observed_date()
        )
    }

    /// Flux values as displayed (optionally min-max scaled).
    pub fn y_values(&self) -> Vec<f64> {
        let y = &self.spectrum.fluxes;
        if !self.minmax_scaling {
            return y.clone();
        }
        let min = y.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        if range.abs() < f64::EPSILON {
            vec![0.0; y.len()]
        } else {
            y.iter().map(|&yi| (yi - min) / range).collect()
        }
    }
}
