use eframe::egui::{self, RichText, Ui};

use crate::state::PreviewState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and spectrum summary above the plot.
pub fn top_bar(ui: &mut Ui, state: &mut PreviewState) {
    ui.heading(state.title());

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(&state.spectrum.instrument_name).color(state.color));
        ui.separator();
        ui.label(format!("observed {}", state.spectrum.observed_at));
        ui.separator();
        ui.label(format!("{} points", state.spectrum.point_count()));
        ui.separator();

        if ui
            .selectable_label(state.minmax_scaling, "Min-Max Scaling")
            .clicked()
        {
            state.minmax_scaling = !state.minmax_scaling;
        }

        ui.separator();
        ui.label(RichText::new("Close the window to save").weak());
    });
}
