//! Ocean mesh deformer
//!
//! Snapshots rest positions once, then displaces every vertex by the ocean
//! field sampled at its patch-normalized (x, z). Normalization bounds come
//! from the rest positions, so applying again with new parameters never
//! compounds previous deformations.

#[cfg(feature = "python")]
use numpy::{PyArray2, PyArrayMethods, PyReadonlyArray2};
#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::deform::bounds::Bounds;
use crate::deform::cache::OriginalPositions;
use crate::ocean::{OceanError, OceanParameters, Result, SpectrumTable};

#[derive(Clone, Debug)]
pub struct OceanDeformer {
    rest: OriginalPositions,
    bounds: Option<Bounds>,
    /// Last frame's spectrum, reused while only `time` changes
    table: Option<SpectrumTable>,
}

impl OceanDeformer {
    /// Snapshot `positions` as the rest shape.
    pub fn new(positions: &[[f64; 3]]) -> Self {
        Self::from_cache(OriginalPositions::snapshot(positions))
    }

    /// Resume from a previously stored snapshot.
    pub fn from_cache(rest: OriginalPositions) -> Self {
        let bounds = Bounds::from_positions(rest.positions());
        Self {
            rest,
            bounds,
            table: None,
        }
    }

    pub fn cache(&self) -> &OriginalPositions {
        &self.rest
    }

    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    /// Spectrum currently cached for animation, if any.
    pub fn spectrum(&self) -> Option<&SpectrumTable> {
        self.table.as_ref()
    }

    /// Deformed positions: rest + (dx, height, dz) per vertex.
    pub fn apply(&mut self, params: &OceanParameters) -> Result<Vec<[f64; 3]>> {
        let mut out = vec![[0.0; 3]; self.rest.len()];
        self.apply_into(params, &mut out)?;
        Ok(out)
    }

    /// Write deformed positions into `out` (same length as the rest shape).
    pub fn apply_into(&mut self, params: &OceanParameters, out: &mut [[f64; 3]]) -> Result<()> {
        if out.len() != self.rest.len() {
            return Err(OceanError::VertexCountMismatch {
                expected: self.rest.len(),
                actual: out.len(),
            });
        }

        let table = self.take_table(params)?;
        self.deform(&table, out);
        self.table = Some(table);
        Ok(())
    }

    /// Cached table rotated to `params.time`, or a fresh one when anything
    /// else changed.
    fn take_table(&mut self, params: &OceanParameters) -> Result<SpectrumTable> {
        match self.table.take() {
            Some(table) if table.params().same_spectrum(params) => {
                if table.params().time == params.time {
                    Ok(table)
                } else {
                    table.at_time(params.time)
                }
            }
            _ => SpectrumTable::build(params),
        }
    }

    fn deform(&self, table: &SpectrumTable, out: &mut [[f64; 3]]) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let params = table.params();

        log::info!(
            "Applying ocean to {} vertices (resolution {}x{}, wind {} m/s)",
            self.rest.len(),
            params.resolution,
            params.resolution,
            params.wind_speed
        );

        let coords: Vec<[f64; 2]> = self
            .rest
            .positions()
            .iter()
            .map(|&p| bounds.patch_coords(p, params.patch_size))
            .collect();
        let samples = table.sample_many(&coords);

        for ((dst, rest), sample) in out.iter_mut().zip(self.rest.positions()).zip(&samples) {
            let offset = sample.offset();
            *dst = [rest[0] + offset[0], rest[1] + offset[1], rest[2] + offset[2]];
        }
    }

    /// Rest positions, unchanged.
    pub fn reset(&self) -> &[[f64; 3]] {
        log::info!("Resetting {} vertices to rest shape", self.rest.len());
        self.rest.positions()
    }

    pub fn reset_into(&self, out: &mut [[f64; 3]]) -> Result<()> {
        self.rest.restore_into(out)?;
        log::info!("Resetting {} vertices to rest shape", self.rest.len());
        Ok(())
    }
}

/// Ocean deformer bound to a host mesh's rest positions.
///
/// Positions are numpy arrays of shape (N, 3), world space.
#[cfg(feature = "python")]
#[pyclass(name = "OceanDeformer")]
pub struct PyOceanDeformer {
    inner: OceanDeformer,
}

#[cfg(feature = "python")]
#[pymethods]
impl PyOceanDeformer {
    #[new]
    fn new(positions: PyReadonlyArray2<'_, f64>) -> PyResult<Self> {
        let positions = read_positions(&positions)?;
        Ok(Self {
            inner: OceanDeformer::new(&positions),
        })
    }

    /// Restore a deformer from the JSON produced by `to_json`.
    #[staticmethod]
    fn from_json(text: &str) -> PyResult<Self> {
        Ok(Self {
            inner: OceanDeformer::from_cache(OriginalPositions::from_json(text)?),
        })
    }

    /// Serialize the rest positions for storage on the host node.
    fn to_json(&self) -> PyResult<String> {
        Ok(self.inner.cache().to_json()?)
    }

    #[getter]
    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Write deformed positions into `output` (shape (N, 3)).
    #[pyo3(signature = (output, resolution=8, patch_size=100.0, wind_speed=15.0, wind_dir_x=1.0, wind_dir_z=0.0, wave_amplitude=1.0, choppiness=1.0, time=0.0, seed=42))]
    #[allow(clippy::too_many_arguments)]
    fn apply<'py>(
        &mut self,
        output: &Bound<'py, PyArray2<f64>>,
        resolution: u32,
        patch_size: f64,
        wind_speed: f64,
        wind_dir_x: f64,
        wind_dir_z: f64,
        wave_amplitude: f64,
        choppiness: f64,
        time: f64,
        seed: u64,
    ) -> PyResult<()> {
        let params = OceanParameters::new(
            resolution,
            patch_size,
            wind_speed,
            [wind_dir_x, wind_dir_z],
            wave_amplitude,
            choppiness,
            time,
            seed,
        )?;
        let deformed = self.inner.apply(&params)?;
        write_positions(output, &deformed)
    }

    /// Write the rest positions into `output` (shape (N, 3)).
    fn reset<'py>(&self, output: &Bound<'py, PyArray2<f64>>) -> PyResult<()> {
        write_positions(output, self.inner.reset())
    }

    fn __repr__(&self) -> String {
        format!("OceanDeformer(vertex_count={})", self.inner.vertex_count())
    }
}

#[cfg(feature = "python")]
fn read_positions(array: &PyReadonlyArray2<'_, f64>) -> PyResult<Vec<[f64; 3]>> {
    let view = array.as_array();
    if view.ncols() != 3 {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "Positions must have shape (N, 3), got (N, {})",
            view.ncols()
        )));
    }
    Ok(view.outer_iter().map(|row| [row[0], row[1], row[2]]).collect())
}

#[cfg(feature = "python")]
fn write_positions(output: &Bound<'_, PyArray2<f64>>, positions: &[[f64; 3]]) -> PyResult<()> {
    // SAFETY: We have exclusive write access to output through PyO3's borrow rules
    unsafe {
        let mut out = output.as_array_mut();
        check_output_shape(out.dim(), positions.len())?;
        for (row, p) in positions.iter().enumerate() {
            out[[row, 0]] = p[0];
            out[[row, 1]] = p[1];
            out[[row, 2]] = p[2];
        }
    }
    Ok(())
}

/// An output buffer for `rows` positions must be exactly (rows, 3).
#[cfg_attr(not(feature = "python"), allow(dead_code))]
fn check_output_shape((actual_rows, actual_cols): (usize, usize), rows: usize) -> Result<()> {
    if actual_rows != rows || actual_cols != 3 {
        return Err(OceanError::ShapeMismatch {
            rows,
            actual_rows,
            actual_cols,
        });
    }
    Ok(())
}
