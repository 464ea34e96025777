//! Spectral ocean field - direct summation
//!
//! Sums one sinusoid per lattice wave vector at the requested point:
//!
//! ```text
//! h0(k)   = (g1, g2) * sqrt(P(k) / 2)
//! h(k, t) = h0(k) * e^{iωt},   ω = sqrt(g |k|)
//! height  = Σ amplitude * Re(h(k, t) * e^{i k·x})
//! disp    = Σ -choppiness * k̂ * contribution
//! ```
//!
//! O(resolution²) per point. For many points sharing one frame, build a
//! [`SpectrumTable`](crate::ocean::SpectrumTable) instead: it produces the
//! same numbers without redrawing the lattice per point.

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::ocean::gaussian::GaussianSource;
use crate::ocean::lattice::{WaveLattice, WaveVector};
use crate::ocean::phillips::{phillips, GRAVITY, K_EPSILON};
use crate::ocean::{OceanParameters, Result};

/// Height and horizontal displacement at one point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldSample {
    pub height: f64,
    /// Horizontal displacement (x, z)
    pub displacement: [f64; 2],
}

impl FieldSample {
    /// Offset to add to a rest position: (dx, height, dz).
    #[inline]
    pub fn offset(&self) -> [f64; 3] {
        [self.displacement[0], self.height, self.displacement[1]]
    }

    pub fn is_finite(&self) -> bool {
        self.height.is_finite() && self.displacement[0].is_finite() && self.displacement[1].is_finite()
    }
}

/// Spectrum energy and drawn amplitude for one wave vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectrumSample {
    pub wave: WaveVector,
    pub k: [f64; 2],
    pub k_len: f64,
    pub energy: f64,
    /// Complex amplitude at t = 0 (re, im)
    pub h0: (f64, f64),
}

impl SpectrumSample {
    /// Compute the spectrum for `wave` and draw its amplitude.
    ///
    /// Returns None (without consuming draws) for wave vectors under the DC guard.
    pub fn draw(
        wave: WaveVector,
        params: &OceanParameters,
        source: &mut GaussianSource,
    ) -> Option<Self> {
        let k = wave.k(params.dk());
        let k_len = (k[0] * k[0] + k[1] * k[1]).sqrt();
        if k_len < K_EPSILON {
            return None;
        }

        let energy = phillips(k[0], k[1], params.wind_speed, params.wind_direction);
        let h0 = source.next_amplitude(energy);

        Some(Self {
            wave,
            k,
            k_len,
            energy,
            h0,
        })
    }
}

/// One time-evolved wave ready to be summed at arbitrary points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveTerm {
    pub k: [f64; 2],
    pub k_hat: [f64; 2],
    /// Deep-water angular frequency
    pub omega: f64,
    pub h0: (f64, f64),
    /// Amplitude rotated to the current time
    pub ht: (f64, f64),
}

impl WaveTerm {
    pub fn new(sample: &SpectrumSample, time: f64) -> Self {
        let omega = (GRAVITY * sample.k_len).sqrt();
        let k_hat = [sample.k[0] / sample.k_len, sample.k[1] / sample.k_len];
        Self {
            k: sample.k,
            k_hat,
            omega,
            h0: sample.h0,
            ht: evolve(sample.h0, omega, time),
        }
    }

    /// Same wave, rotated to a different time.
    #[inline]
    pub fn at_time(&self, time: f64) -> Self {
        Self {
            ht: evolve(self.h0, self.omega, time),
            ..*self
        }
    }

    /// Real part of h(t) * e^{i k·x}, scaled.
    #[inline]
    pub fn contribution(&self, x: f64, z: f64, amplitude: f64) -> f64 {
        let phase = self.k[0] * x + self.k[1] * z;
        let (sin_p, cos_p) = phase.sin_cos();
        (self.ht.0 * cos_p - self.ht.1 * sin_p) * amplitude
    }

    /// Add this wave's height and choppy displacement into `out`.
    #[inline]
    pub fn accumulate(&self, out: &mut FieldSample, x: f64, z: f64, amplitude: f64, choppiness: f64) {
        let c = self.contribution(x, z, amplitude);
        out.height += c;
        out.displacement[0] += -choppiness * self.k_hat[0] * c;
        out.displacement[1] += -choppiness * self.k_hat[1] * c;
    }
}

/// h0 * e^{iωt}
#[inline]
fn evolve(h0: (f64, f64), omega: f64, time: f64) -> (f64, f64) {
    let (sin_t, cos_t) = (omega * time).sin_cos();
    (h0.0 * cos_t - h0.1 * sin_t, h0.0 * sin_t + h0.1 * cos_t)
}

/// Per-call evaluator over a validated parameter set.
#[derive(Clone, Copy, Debug)]
pub struct SpectralOceanField {
    params: OceanParameters,
}

impl SpectralOceanField {
    pub fn new(params: OceanParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &OceanParameters {
        &self.params
    }

    /// Evaluate the field at (x, z), same units as `patch_size`.
    ///
    /// The Gaussian source is reseeded on every call and consumed in
    /// lattice order, so the result depends only on the arguments.
    pub fn evaluate(&self, x: f64, z: f64) -> FieldSample {
        let p = &self.params;
        let mut source = GaussianSource::new(p.seed);
        let mut out = FieldSample::default();

        for wave in WaveLattice::new(p.resolution) {
            let Some(sample) = SpectrumSample::draw(wave, p, &mut source) else {
                continue;
            };
            WaveTerm::new(&sample, p.time).accumulate(&mut out, x, z, p.wave_amplitude, p.choppiness);
        }

        out
    }
}

/// Validate `params` and evaluate a single point.
pub fn evaluate(x: f64, z: f64, params: &OceanParameters) -> Result<FieldSample> {
    Ok(SpectralOceanField::new(*params)?.evaluate(x, z))
}

/// Tessendorf ocean displacement for a single point.
///
/// # Returns
/// `(height, displacement_x, displacement_z)`
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (x, z, time, resolution, patch_size, wind_speed, wind_dir_x, wind_dir_z, wave_amplitude, choppiness, seed=42))]
#[allow(clippy::too_many_arguments)]
pub fn tessendorf_displacement(
    x: f64,
    z: f64,
    time: f64,
    resolution: u32,
    patch_size: f64,
    wind_speed: f64,
    wind_dir_x: f64,
    wind_dir_z: f64,
    wave_amplitude: f64,
    choppiness: f64,
    seed: u64,
) -> PyResult<(f64, f64, f64)> {
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
    let sample = SpectralOceanField::new(params)?.evaluate(x, z);
    Ok((sample.height, sample.displacement[0], sample.displacement[1]))
}
