//! Precomputed spectrum table
//!
//! Draws the lattice once per (seed, time) and reuses it for every point of
//! a frame. Per-point results match [`SpectralOceanField::evaluate`] exactly:
//! the same terms are summed in the same order.
//!
//! The table is immutable after construction, so `sample_many` shares it
//! across rayon workers without locking.

use rayon::prelude::*;

use crate::ocean::field::{FieldSample, SpectrumSample, WaveTerm};
use crate::ocean::gaussian::GaussianSource;
use crate::ocean::lattice::WaveLattice;
use crate::ocean::{OceanParameters, Result};

#[derive(Clone, Debug)]
pub struct SpectrumTable {
    params: OceanParameters,
    terms: Vec<WaveTerm>,
}

impl SpectrumTable {
    /// Sweep the lattice for `params` and cache every time-evolved wave.
    pub fn build(params: &OceanParameters) -> Result<Self> {
        params.validate()?;

        let mut source = GaussianSource::new(params.seed);
        let terms: Vec<WaveTerm> = WaveLattice::new(params.resolution)
            .filter_map(|wave| SpectrumSample::draw(wave, params, &mut source))
            .map(|sample| WaveTerm::new(&sample, params.time))
            .collect();

        log::debug!(
            "Built spectrum table: {} waves (resolution {}, seed {}, t = {})",
            terms.len(),
            params.resolution,
            params.seed,
            params.time
        );

        Ok(Self {
            params: *params,
            terms,
        })
    }

    /// Same amplitudes, rotated to another time. No redraw.
    pub fn at_time(&self, time: f64) -> Result<Self> {
        let params = self.params.with_time(time)?;
        Ok(Self {
            params,
            terms: self.terms.iter().map(|t| t.at_time(time)).collect(),
        })
    }

    pub fn params(&self) -> &OceanParameters {
        &self.params
    }

    pub fn terms(&self) -> &[WaveTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Field value at (x, z).
    #[inline]
    pub fn sample(&self, x: f64, z: f64) -> FieldSample {
        let amplitude = self.params.wave_amplitude;
        let choppiness = self.params.choppiness;
        let mut out = FieldSample::default();
        for term in &self.terms {
            term.accumulate(&mut out, x, z, amplitude, choppiness);
        }
        out
    }

    /// Field values for many (x, z) points, evaluated in parallel.
    pub fn sample_many(&self, points: &[[f64; 2]]) -> Vec<FieldSample> {
        points
            .par_iter()
            .map(|&[x, z]| self.sample(x, z))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::SpectralOceanField;

    fn points() -> Vec<[f64; 2]> {
        (0..64)
            .map(|i| {
                let f = i as f64;
                [f * 1.7 - 50.0, (f * 0.61).sin() * 40.0]
            })
            .collect()
    }

    #[test]
    fn test_matches_direct_evaluation() {
        let params = OceanParameters {
            resolution: 10,
            time: 2.75,
            wind_direction: [0.4, 0.9],
            ..OceanParameters::default()
        };
        let table = SpectrumTable::build(&params).unwrap();
        let field = SpectralOceanField::new(params).unwrap();

        for [x, z] in points() {
            assert_eq!(table.sample(x, z), field.evaluate(x, z));
        }
    }

    #[test]
    fn test_at_time_matches_rebuild() {
        let params = OceanParameters::default();
        let table = SpectrumTable::build(&params).unwrap();

        for &t in &[0.5, 3.0, 17.25] {
            let moved = table.at_time(t).unwrap();
            let rebuilt = SpectrumTable::build(&params.with_time(t).unwrap()).unwrap();
            assert_eq!(moved.terms(), rebuilt.terms());
            assert_eq!(moved.sample(3.0, -4.0), rebuilt.sample(3.0, -4.0));
        }
    }

    #[test]
    fn test_sample_many_matches_sequential() {
        let table = SpectrumTable::build(&OceanParameters::default()).unwrap();
        let pts = points();
        let parallel = table.sample_many(&pts);

        assert_eq!(parallel.len(), pts.len());
        for (s, [x, z]) in parallel.iter().zip(pts) {
            assert_eq!(*s, table.sample(x, z));
        }
    }

    #[test]
    fn test_term_count() {
        let table = SpectrumTable::build(&OceanParameters::default()).unwrap();
        assert_eq!(table.len(), 63);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_rejects_invalid_params() {
        let params = OceanParameters {
            patch_size: 0.0,
            ..OceanParameters::default()
        };
        assert!(SpectrumTable::build(&params).is_err());

        let table = SpectrumTable::build(&OceanParameters::default()).unwrap();
        assert!(table.at_time(f64::NAN).is_err());
    }
}
