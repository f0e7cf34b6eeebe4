/// Data layer: service access, core types, and the on-disk format.
///
/// Architecture:
/// ```text
///   GET /api/sources/{id}/spectra
///        │
///        ▼
///   ┌──────────┐
///   │  client   │  authorised request → SpectraResponse
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ SpectrumRecord │  instrument, observed_at, wavelengths, fluxes
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  two-column .ascii file in the output directory
///   └──────────┘
/// ```

pub mod client;
pub mod model;
pub mod writer;
