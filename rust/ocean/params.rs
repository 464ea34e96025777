//! Ocean simulation parameters
//!
//! Immutable once validated. Defaults match the deformer UI:
//! 8x8 lattice over a 100 m patch, 15 m/s wind along +X.

use serde::{Deserialize, Serialize};

use crate::ocean::phillips::GRAVITY;
use crate::ocean::{OceanError, Result};

/// Parameter set for one field evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanParameters {
    /// Lattice width in wave vectors per axis
    pub resolution: u32,
    /// Spatial period of the lattice in meters
    pub patch_size: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction (x, z), normalized internally
    pub wind_direction: [f64; 2],
    /// Height scale applied to every wave contribution
    pub wave_amplitude: f64,
    /// Horizontal displacement scale
    pub choppiness: f64,
    /// Simulation time in seconds
    pub time: f64,
    /// Reproducibility key for the Gaussian amplitudes
    pub seed: u64,
}

impl Default for OceanParameters {
    fn default() -> Self {
        Self {
            resolution: 8,
            patch_size: 100.0,
            wind_speed: 15.0,
            wind_direction: [1.0, 0.0],
            wave_amplitude: 1.0,
            choppiness: 1.0,
            time: 0.0,
            seed: 42,
        }
    }
}

impl OceanParameters {
    /// Build and validate a parameter set.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resolution: u32,
        patch_size: f64,
        wind_speed: f64,
        wind_direction: [f64; 2],
        wave_amplitude: f64,
        choppiness: f64,
        time: f64,
        seed: u64,
    ) -> Result<Self> {
        let params = Self {
            resolution,
            patch_size,
            wind_speed,
            wind_direction,
            wave_amplitude,
            choppiness,
            time,
            seed,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parse a TOML preset. Missing keys fall back to the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let params: Self = toml::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Copy with a different time value (one animation frame).
    pub fn with_time(self, time: f64) -> Result<Self> {
        let params = Self { time, ..self };
        params.validate()?;
        Ok(params)
    }

    /// Copy with a different seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Grid spacing of the wave-vector lattice: 2π / patch_size.
    #[inline]
    pub fn dk(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.patch_size
    }

    /// Check every precondition the evaluator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(invalid(
                "resolution",
                0.0,
                "lattice needs at least one wave vector",
            ));
        }

        finite("patch_size", self.patch_size)?;
        finite("wind_speed", self.wind_speed)?;
        finite("wind_direction.x", self.wind_direction[0])?;
        finite("wind_direction.z", self.wind_direction[1])?;
        finite("wave_amplitude", self.wave_amplitude)?;
        finite("choppiness", self.choppiness)?;
        finite("time", self.time)?;

        if self.patch_size <= 0.0 {
            return Err(invalid("patch_size", self.patch_size, "must be positive"));
        }
        if self.wind_speed <= 0.0 {
            return Err(invalid("wind_speed", self.wind_speed, "must be positive"));
        }
        if self.wave_amplitude < 0.0 {
            return Err(invalid(
                "wave_amplitude",
                self.wave_amplitude,
                "must not be negative",
            ));
        }
        if self.choppiness < 0.0 {
            return Err(invalid(
                "choppiness",
                self.choppiness,
                "must not be negative",
            ));
        }

        // Derived quantities must stay finite too: |k|² over the whole
        // lattice and the phase ω·t of its fastest wave.
        let k_max = self.max_wave_number();
        if !(k_max * k_max).is_finite() {
            return Err(invalid(
                "patch_size",
                self.patch_size,
                "too small for this resolution, wave numbers overflow",
            ));
        }
        if !((GRAVITY * k_max).sqrt() * self.time).is_finite() {
            return Err(invalid(
                "time",
                self.time,
                "too large, wave phase overflows",
            ));
        }

        Ok(())
    }

    /// Upper bound on |k| over the lattice.
    #[inline]
    pub fn max_wave_number(&self) -> f64 {
        self.dk() * (self.resolution / 2 + 1) as f64 * std::f64::consts::SQRT_2
    }

    /// True when both sets draw the same amplitudes (everything but `time` matches).
    pub fn same_spectrum(&self, other: &Self) -> bool {
        Self { time: 0.0, ..*self } == Self { time: 0.0, ..*other }
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> OceanError {
    OceanError::InvalidParameter {
        name,
        value,
        reason,
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value, "must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = OceanParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.resolution, 8);
        assert_eq!(params.seed, 42);
    }

    #[test]
    fn test_rejects_zero_resolution() {
        let err = OceanParameters::new(0, 100.0, 15.0, [1.0, 0.0], 1.0, 1.0, 0.0, 42);
        assert!(matches!(
            err,
            Err(OceanError::InvalidParameter {
                name: "resolution",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_positive_patch_size() {
        for patch_size in [0.0, -10.0] {
            let err = OceanParameters::new(8, patch_size, 15.0, [1.0, 0.0], 1.0, 1.0, 0.0, 42);
            assert!(matches!(
                err,
                Err(OceanError::InvalidParameter {
                    name: "patch_size",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let base = OceanParameters::default();
        assert!(base.with_time(f64::NAN).is_err());
        assert!(base.with_time(f64::INFINITY).is_err());

        let wind = OceanParameters {
            wind_direction: [f64::NAN, 0.0],
            ..base
        };
        assert!(wind.validate().is_err());

        let speed = OceanParameters {
            wind_speed: f64::INFINITY,
            ..base
        };
        assert!(speed.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_scales() {
        let base = OceanParameters::default();
        let amp = OceanParameters {
            wave_amplitude: -1.0,
            ..base
        };
        let chop = OceanParameters {
            choppiness: -0.5,
            ..base
        };
        assert!(amp.validate().is_err());
        assert!(chop.validate().is_err());
    }

    #[test]
    fn test_zero_wind_direction_is_allowed() {
        let params = OceanParameters {
            wind_direction: [0.0, 0.0],
            ..OceanParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_toml_preset_partial() {
        let params = OceanParameters::from_toml_str(
            r#"
            resolution = 12
            wind_speed = 22.5
            wind_direction = [0.0, 1.0]
            "#,
        )
        .unwrap();

        assert_eq!(params.resolution, 12);
        assert_eq!(params.wind_speed, 22.5);
        assert_eq!(params.wind_direction, [0.0, 1.0]);
        // Unspecified keys keep their defaults
        assert_eq!(params.patch_size, 100.0);
        assert_eq!(params.seed, 42);
    }

    #[test]
    fn test_toml_preset_rejects_invalid_values() {
        let err = OceanParameters::from_toml_str("patch_size = -1.0");
        assert!(matches!(err, Err(OceanError::InvalidParameter { .. })));

        let err = OceanParameters::from_toml_str("resolution = \"eight\"");
        assert!(matches!(err, Err(OceanError::Config(_))));
    }

    #[test]
    fn test_rejects_overflowing_time() {
        let base = OceanParameters::default();
        let err = base.with_time(1e308);
        assert!(matches!(
            err,
            Err(OceanError::InvalidParameter { name: "time", .. })
        ));
        assert!(base.with_time(-1e308).is_err());
        // Long but ordinary animation times are fine
        assert!(base.with_time(1e6).is_ok());
    }

    #[test]
    fn test_rejects_tiny_patch_size() {
        let params = OceanParameters {
            patch_size: 1e-160,
            ..OceanParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(OceanError::InvalidParameter {
                name: "patch_size",
                ..
            })
        ));

        let small = OceanParameters {
            patch_size: 1e-3,
            ..OceanParameters::default()
        };
        assert!(small.validate().is_ok());
    }

    #[test]
    fn test_max_wave_number_bounds_lattice() {
        let params = OceanParameters::default();
        let dk = params.dk();
        let largest = crate::ocean::WaveLattice::new(params.resolution)
            .map(|w| {
                let [kx, kz] = w.k(dk);
                (kx * kx + kz * kz).sqrt()
            })
            .fold(0.0, f64::max);
        assert!(largest <= params.max_wave_number());
    }

    #[test]
    fn test_same_spectrum_ignores_time() {
        let base = OceanParameters::default();
        assert!(base.same_spectrum(&base.with_time(3.5).unwrap()));
        assert!(!base.same_spectrum(&base.with_seed(7)));
        let windier = OceanParameters {
            wind_speed: 20.0,
            ..base
        };
        assert!(!base.same_spectrum(&windier));
    }

    #[test]
    fn test_dk() {
        let params = OceanParameters {
            patch_size: 2.0 * std::f64::consts::PI,
            ..OceanParameters::default()
        };
        assert!((params.dk() - 1.0).abs() < 1e-12);
    }
}
