//! Phillips spectrum
//!
//! Statistical energy density of wind-driven ocean waves:
//!
//! ```text
//! P(k) = A * exp(-1 / (|k| L)^2) * exp(-|k|^2 (L / 1000)^2) / |k|^4 * cos²θ
//! L    = wind_speed² / g
//! cosθ = max(k̂ · ŵ, 0)
//! ```
//!
//! The first exponential suppresses waves longer than the wind can build,
//! the second fades out very short waves.

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Gravitational acceleration in m/s²
pub const GRAVITY: f64 = 9.81;

/// Empirical ocean amplitude constant
pub const PHILLIPS_AMPLITUDE: f64 = 0.0081;

/// Wave vectors shorter than this contribute nothing (DC term guard)
pub const K_EPSILON: f64 = 1e-4;

/// Short-wave cutoff as a fraction of the largest wind-driven wave
pub const SHORT_WAVE_RATIO: f64 = 1.0 / 1000.0;

/// Normalize a wind direction, falling back to +X for a near-zero vector.
#[inline]
pub fn wind_unit(wind_dir: [f64; 2]) -> [f64; 2] {
    let len = (wind_dir[0] * wind_dir[0] + wind_dir[1] * wind_dir[1]).sqrt();
    if len < K_EPSILON {
        [1.0, 0.0]
    } else {
        [wind_dir[0] / len, wind_dir[1] / len]
    }
}

/// Phillips spectrum energy for wave vector (kx, kz).
///
/// Always finite and non-negative. Waves travelling against the wind get zero energy.
#[inline]
pub fn phillips(kx: f64, kz: f64, wind_speed: f64, wind_dir: [f64; 2]) -> f64 {
    let k_len = (kx * kx + kz * kz).sqrt();
    if k_len < K_EPSILON {
        return 0.0;
    }

    // Largest wave sustained by the wind
    let l = (wind_speed * wind_speed) / GRAVITY;
    let [wx, wz] = wind_unit(wind_dir);

    let k_dot_w = ((kx * wx + kz * wz) / k_len).max(0.0);

    let k_len2 = k_len * k_len;
    let k_len4 = k_len2 * k_len2;
    let kl = k_len * l;

    let mut damping = (-1.0 / (kl * kl)).exp();
    let l_small = l * SHORT_WAVE_RATIO;
    damping *= (-k_len2 * l_small * l_small).exp();

    PHILLIPS_AMPLITUDE * damping / k_len4 * (k_dot_w * k_dot_w)
}

/// Phillips spectrum energy for a single wave vector.
///
/// # Arguments
/// * `kx`, `kz` - Wave vector components (rad/m)
/// * `wind_speed` - Wind speed in m/s
/// * `wind_dir_x`, `wind_dir_z` - Wind direction, need not be unit length
#[cfg(feature = "python")]
#[pyfunction]
pub fn phillips_spectrum(kx: f64, kz: f64, wind_speed: f64, wind_dir_x: f64, wind_dir_z: f64) -> f64 {
    phillips(kx, kz, wind_speed, [wind_dir_x, wind_dir_z])
}
