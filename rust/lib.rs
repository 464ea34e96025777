//! Native Tessendorf ocean engine
//!
//! Spectral wave synthesis for procedural mesh deformation:
//! - Phillips spectrum and seeded Gaussian wave amplitudes
//! - Per-point height and choppy horizontal displacement
//! - Precomputed spectrum table for whole-mesh frames (parallel over vertices)
//! - Rest-position cache and mesh deformer
//!
//! Build with the `python` feature for the host extension module.

pub mod deform;
pub mod ocean;

pub use deform::{plane_positions, Bounds, OceanDeformer, OriginalPositions};
pub use ocean::{
    evaluate, phillips, FieldSample, OceanError, OceanParameters, Result, SpectralOceanField,
    SpectrumTable,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Native ocean displacement for the deformer scripts.
#[cfg(feature = "python")]
#[pymodule(name = "_tessendorf")]
fn _tessendorf(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ocean::phillips::phillips_spectrum, m)?)?;
    m.add_function(wrap_pyfunction!(ocean::field::tessendorf_displacement, m)?)?;

    m.add_class::<deform::deformer::PyOceanDeformer>()?;

    // Physical constants
    m.add("GRAVITY", ocean::GRAVITY)?;
    m.add("PHILLIPS_AMPLITUDE", ocean::PHILLIPS_AMPLITUDE)?;

    Ok(())
}
