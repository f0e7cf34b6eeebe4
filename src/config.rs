use std::path::PathBuf;
use std::time::Duration;

use crate::error::SpectraError;

pub const DEFAULT_BASE_URL: &str = "https://fritz.science/";
pub const DEFAULT_OUTPUT_DIR: &str = "fritz_spectra";

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything the pipeline needs to know, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: String,
    /// Must already exist; it is never created.
    pub output_dir: PathBuf,
    /// Show a plot window before writing each selected spectrum.
    pub preview: bool,
    /// `None` waits on the service indefinitely.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(
        base_url: String,
        token: Option<String>,
        output_dir: PathBuf,
        preview: bool,
        timeout_secs: Option<u64>,
    ) -> Result<Self, SpectraError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(SpectraError::MissingToken)?;

        Ok(Self {
            base_url,
            token,
            output_dir,
            preview,
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }
}
