use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::PreviewState;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the selected spectrum as a wavelength vs. flux line.
pub fn spectrum_plot(ui: &mut Ui, state: &PreviewState) {
    let y_label = if state.minmax_scaling {
        "Normalized flux (min-max)"
    } else {
        "Normalized flux"
    };

    let points: PlotPoints = state
        .spectrum
        .wavelengths
        .iter()
        .zip(state.y_values())
        .map(|(&xi, yi)| [xi, yi])
        .collect();

    Plot::new("spectrum_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Wavelength [Å]")
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points)
                .name(&state.spectrum.instrument_name)
                .color(state.color)
                .width(1.5);
            plot_ui.line(line);
        });
}
