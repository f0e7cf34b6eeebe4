use serde::Deserialize;

// ---------------------------------------------------------------------------
// SpectrumRecord – one observation returned by the service
// ---------------------------------------------------------------------------

/// A single spectrum as listed by `GET /api/sources/{id}/spectra`.
///
/// The service sends many more fields per spectrum (owner, groups, units…);
/// only the ones needed to list and save a spectrum are kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpectrumRecord {
    pub instrument_name: String,
    /// ISO-8601 date-time, e.g. `2021-05-01T03:00:00`.
    pub observed_at: String,
    /// Wavelength axis (x), in Ångström.
    pub wavelengths: Vec<f64>,
    /// Flux axis (y) – same length as `wavelengths`.
    pub fluxes: Vec<f64>,
}

impl SpectrumRecord {
    /// Date part of `observed_at` (everything before the first `T`).
    pub fn observed_date(&self) -> &str {
        self.observed_at
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.observed_at)
    }

    /// Number of (wavelength, flux) points.
    pub fn point_count(&self) -> usize {
        self.wavelengths.len()
    }
}

// ---------------------------------------------------------------------------
// SpectraResponse – the JSON envelope
// ---------------------------------------------------------------------------

/// Envelope of every SkyPortal API response:
///
/// ```json
/// { "status": "success", "data": { "spectra": [ ... ] } }
/// { "status": "error", "message": "Invalid source ID.", "data": {} }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SpectraResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: SpectraData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpectraData {
    #[serde(default)]
    pub spectra: Vec<SpectrumRecord>,
}

impl SpectraResponse {
    /// Whether the service flagged the query as failed.
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }

    pub fn spectra(&self) -> &[SpectrumRecord] {
        &self.data.spectra
    }
}
