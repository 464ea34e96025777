//! Deterministic Gaussian source
//!
//! PCG64 (`rand_pcg::Pcg64`, seeded with `seed_from_u64`) feeding
//! `rand_distr::StandardNormal` (ziggurat). Each field evaluation owns its
//! own source, so concurrent evaluations never share generator state.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64;

/// Seeded stream of standard-normal samples.
#[derive(Clone, Debug)]
pub struct GaussianSource {
    rng: Pcg64,
}

impl GaussianSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Reset the stream to the start of the sequence for `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Pcg64::seed_from_u64(seed);
    }

    /// Next N(0, 1) sample.
    #[inline]
    pub fn next_gaussian(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    /// Complex amplitude with E[|h0|²] = energy: two draws, real then imaginary.
    #[inline]
    pub fn next_amplitude(&mut self, energy: f64) -> (f64, f64) {
        let scale = (energy * 0.5).sqrt();
        let re = self.next_gaussian() * scale;
        let im = self.next_gaussian() * scale;
        (re, im)
    }
}
