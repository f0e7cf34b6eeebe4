use anyhow::Result;
use eframe::egui;

use crate::app::PreviewApp;
use crate::data::model::SpectrumRecord;
use crate::error::SpectraError;
use crate::state::PreviewState;

// ---------------------------------------------------------------------------
// Preview sinks
// ---------------------------------------------------------------------------

/// Shows the chosen spectrum before it is written. Presentation only.
pub trait PreviewSink {
    fn preview(&self, object_id: &str, spectrum: &SpectrumRecord) -> Result<()>;
}

/// Preview disabled.
pub struct NoPreview;

impl PreviewSink for NoPreview {
    fn preview(&self, _object_id: &str, _spectrum: &SpectrumRecord) -> Result<()> {
        Ok(())
    }
}

/// Opens a native plot window and blocks until the operator closes it.
pub struct WindowPreview;

impl PreviewSink for WindowPreview {
    fn preview(&self, object_id: &str, spectrum: &SpectrumRecord) -> Result<()> {
        let state = PreviewState::new(object_id, spectrum.clone());
        let title = state.title();
        log::info!("Previewing {title} ({} points)", spectrum.point_count());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(&title)
                .with_inner_size([1000.0, 600.0])
                .with_min_inner_size([600.0, 400.0]),
            ..Default::default()
        };

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PreviewApp::new(state)))),
        )
        .map_err(|e| SpectraError::Preview(e.to_string()))?;

        Ok(())
    }
}

/// Pick the sink for the `--plot` flag.
pub fn preview_sink(enabled: bool) -> Box<dyn PreviewSink> {
    if enabled {
        Box::new(WindowPreview)
    } else {
        Box::new(NoPreview)
    }
}
