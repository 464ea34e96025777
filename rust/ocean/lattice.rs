//! Wave-vector lattice
//!
//! Integer index pairs (nx, nz) over [floor(-n/2), floor(n/2)) per axis,
//! origin excluded. Iteration order is nx outer, nz inner, both ascending.
//! Gaussian amplitudes are drawn in this order, so it is part of the output.

/// Integer lattice index of one wave vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WaveVector {
    pub nx: i64,
    pub nz: i64,
}

impl WaveVector {
    /// Continuous wave vector (kx, kz) for lattice spacing `dk`.
    #[inline]
    pub fn k(self, dk: f64) -> [f64; 2] {
        [self.nx as f64 * dk, self.nz as f64 * dk]
    }
}

/// Sweep over all wave vectors for a given resolution.
#[derive(Clone, Debug)]
pub struct WaveLattice {
    lo: i64,
    hi: i64,
    nx: i64,
    nz: i64,
}

impl WaveLattice {
    pub fn new(resolution: u32) -> Self {
        let n = resolution as i64;
        let lo = (-n).div_euclid(2);
        let hi = n.div_euclid(2);
        Self {
            lo,
            hi,
            nx: lo,
            nz: lo,
        }
    }

    /// Index range per axis, half-open.
    pub fn bounds(&self) -> (i64, i64) {
        (self.lo, self.hi)
    }
}

impl Iterator for WaveLattice {
    type Item = WaveVector;

    fn next(&mut self) -> Option<WaveVector> {
        loop {
            if self.nx >= self.hi {
                return None;
            }

            let current = WaveVector {
                nx: self.nx,
                nz: self.nz,
            };

            self.nz += 1;
            if self.nz >= self.hi {
                self.nz = self.lo;
                self.nx += 1;
            }

            if current.nx == 0 && current.nz == 0 {
                continue;
            }
            return Some(current);
        }
    }
}
