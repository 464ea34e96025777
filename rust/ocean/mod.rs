//! Tessendorf spectral ocean engine
//!
//! Phillips spectrum, seeded Gaussian amplitudes, and the height /
//! choppy-displacement field built from them.

pub mod error;
pub mod field;
pub mod gaussian;
pub mod lattice;
pub mod params;
pub mod phillips;
pub mod spectrum;

pub use error::{OceanError, Result};
pub use field::{evaluate, FieldSample, SpectralOceanField, SpectrumSample, WaveTerm};
pub use gaussian::GaussianSource;
pub use lattice::{WaveLattice, WaveVector};
pub use params::OceanParameters;
pub use phillips::{phillips, GRAVITY, K_EPSILON, PHILLIPS_AMPLITUDE};
pub use spectrum::SpectrumTable;
