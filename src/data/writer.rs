use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::SpectrumRecord;
use crate::error::SpectraError;

// ---------------------------------------------------------------------------
// File naming
// ---------------------------------------------------------------------------

/// `{object_id}_{instrument}_{YYYY-MM-DD}.ascii`
pub fn output_file_name(object_id: &str, record: &SpectrumRecord) -> String {
    format!(
        "{object_id}_{}_{}.ascii",
        record.instrument_name,
        record.observed_date()
    )
}

// ---------------------------------------------------------------------------
// ASCII writer
// ---------------------------------------------------------------------------

/// Output layout: two space-separated columns, no header:
///
/// ```text
/// 4000.0 1.0
/// 4001.0 0.98
/// ```
fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(b' ')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

/// Write `record` into `output_dir`, replacing any file of the same name.
/// Returns the path written.
pub fn write_spectrum(
    output_dir: &Path,
    object_id: &str,
    record: &SpectrumRecord,
) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Err(SpectraError::OutputDirMissing(output_dir.to_path_buf()).into());
    }
    if record.wavelengths.len() != record.fluxes.len() {
        return Err(SpectraError::LengthMismatch {
            wavelengths: record.wavelengths.len(),
            fluxes: record.fluxes.len(),
        }
        .into());
    }

    let path = output_dir.join(output_file_name(object_id, record));
    let mut writer = writer_builder()
        .from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    for (wl, flux) in record.wavelengths.iter().zip(&record.fluxes) {
        // `{:?}` keeps the shortest round-trip form and always a decimal point.
        writer
            .write_record([format!("{wl:?}"), format!("{flux:?}")])
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    Ok(path)
}

/// Read a file produced by [`write_spectrum`] back into its two columns.
#[cfg(test)]
pub fn read_spectrum(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut wavelengths = Vec::new();
    let mut fluxes = Vec::new();
    for (row_no, result) in reader.deserialize::<(f64, f64)>().enumerate() {
        let (wl, flux) = result.with_context(|| format!("row {row_no}"))?;
        wavelengths.push(wl);
        fluxes.push(flux);
    }
    Ok((wavelengths, fluxes))
}
