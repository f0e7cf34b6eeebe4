use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::client::SpectraSource;
use crate::data::writer::write_spectrum;
use crate::preview::PreviewSink;
use crate::select::{select_spectrum, Selection};

// ---------------------------------------------------------------------------
// Per-object outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Written(PathBuf),
    Skipped,
    NoSpectra,
    /// The service answered `"status": "error"`; holds its message.
    ServiceError(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> Self {
        let mut summary = Summary::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Written(_) => summary.written += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::NoSpectra | Outcome::ServiceError(_) => summary.failed += 1,
            }
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// Fetch → select → preview → write
// ---------------------------------------------------------------------------

pub struct Pipeline<'a> {
    pub source: &'a dyn SpectraSource,
    pub preview: &'a dyn PreviewSink,
    pub output_dir: &'a Path,
}

impl Pipeline<'_> {
    /// Handle one object id end to end.
    ///
    /// Service-reported errors and empty listings are outcomes, not errors;
    /// transport, JSON and filesystem failures propagate.
    pub fn process_object<R: BufRead, W: Write>(
        &self,
        object_id: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<Outcome> {
        let response = self
            .source
            .fetch_spectra(object_id)
            .with_context(|| format!("fetching spectra for {object_id}"))?;

        if response.is_error() {
            let message = response
                .message
                .unwrap_or_else(|| "no message from service".to_string());
            log::warn!("Query for {object_id} failed: {message}");
            return Ok(Outcome::ServiceError(message));
        }

        let spectra = response.spectra();
        if spectra.is_empty() {
            log::warn!("Sorry, no spectra are available for {object_id}!");
            return Ok(Outcome::NoSpectra);
        }

        let spectrum = match select_spectrum(object_id, spectra, &mut *input, &mut *output)? {
            Selection::Skipped => {
                log::info!("Skipped {object_id}");
                return Ok(Outcome::Skipped);
            }
            Selection::Chosen(idx) => &spectra[idx],
        };

        // Presentation only: a failed preview is logged and the write goes ahead.
        if let Err(e) = self.preview.preview(object_id, spectrum) {
            log::warn!("Preview for {object_id} unavailable: {e:#}");
        }

        let path = write_spectrum(self.output_dir, object_id, spectrum)?;
        log::info!("Wrote {} ({} points)", path.display(), spectrum.point_count());
        Ok(Outcome::Written(path))
    }

    /// Process every id in order; one bad id never stops the rest.
    pub fn run<R: BufRead, W: Write>(
        &self,
        object_ids: &[String],
        input: &mut R,
        output: &mut W,
    ) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(object_ids.len());
        for object_id in object_ids {
            outcomes.push(self.process_object(object_id, input, output)?);
        }

        let summary = Summary::from_outcomes(&outcomes);
        log::warn!(
            "Download completed! {} written, {} skipped, {} failed",
            summary.written,
            summary.skipped,
            summary.failed
        );
        Ok(outcomes)
    }
}
