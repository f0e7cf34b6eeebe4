use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpectraError {
    #[error("No API token configured (use --token or set FRITZ_TOKEN)")]
    MissingToken,

    #[error("Output directory '{}' does not exist", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("Spectrum has {wavelengths} wavelengths but {fluxes} fluxes")]
    LengthMismatch { wavelengths: usize, fluxes: usize },

    #[error("Preview window failed: {0}")]
    Preview(String),
}
