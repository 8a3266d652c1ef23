//! 2D simplex noise over a seeded permutation lattice
//!
//! The input point is skewed onto a lattice of equilateral triangles, the
//! three corners of the containing triangle are hashed to gradients, and each
//! corner contributes a gradient ramp attenuated by a quartic falloff of
//! radius² 0.5. Evaluation is a pure function of the seed and the coordinate.

use log::debug;
use serde::{Deserialize, Serialize};

use super::tables::{GRAD2, GRAD_COUNT, PERM};

/// Skew factor, (sqrt(3) - 1) / 2
const F2: f32 = 0.366_025_403_784_438_6;

/// Unskew factor, (3 - sqrt(3)) / 6
const G2: f32 = 0.211_324_865_405_187_1;

/// Scales the summed corner contributions to roughly [-1, 1]
const NORMALIZATION: f32 = 70.0;

/// Squared radius of influence of each lattice corner
const FALLOFF_RADIUS_SQ: f32 = 0.5;

/// Seeded 2D coherent noise field
///
/// The seed offsets the lattice coordinates before hashing, so it is
/// independent of any [`Lcg`](crate::random::Lcg) stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseField {
    seed: i64,
}

impl NoiseField {
    /// Create a field with the given seed
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Replace the seed
    pub fn seed(&mut self, seed: i64) {
        debug!("NOISE: seeded with {}", seed);
        self.seed = seed;
    }

    /// Current seed
    pub fn seed_value(&self) -> i64 {
        self.seed
    }

    /// Sample the field at `(x, y)`
    ///
    /// Returns a value in approximately `[-1.0, 1.0]`.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        // Skew into simplex space to find the cell origin
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        // Unskew the origin back to find the offset of the first corner
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower triangle visits (1,0) second, upper triangle visits (0,1)
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = self.wrap(i);
        let jj = self.wrap(j);
        let gi0 = Self::hash(ii, jj);
        let gi1 = Self::hash(ii + i1, jj + j1);
        let gi2 = Self::hash(ii + 1, jj + 1);

        let n0 = Self::corner(gi0, x0, y0);
        let n1 = Self::corner(gi1, x1, y1);
        let n2 = Self::corner(gi2, x2, y2);

        NORMALIZATION * (n0 + n1 + n2)
    }

    /// Fractional Brownian motion: `octaves` layers of [`sample`](Self::sample)
    ///
    /// Each layer scales the frequency by `lacunarity` and the amplitude by
    /// `persistence`. The sum is divided by the total amplitude so the result
    /// keeps the single-octave range. `persistence` is expected to be positive;
    /// zero octaves, or a persistence whose amplitudes cancel to a zero total,
    /// yields 0.0.
    pub fn fractal(&self, x: f32, y: f32, octaves: u32, persistence: f32, lacunarity: f32) -> f32 {
        if octaves == 0 {
            return 0.0;
        }

        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_amplitude == 0.0 {
            return 0.0;
        }
        total / max_amplitude
    }

    /// Lattice coordinate offset by the seed, reduced to a byte
    #[inline]
    fn wrap(&self, lattice: f32) -> usize {
        ((lattice as i64).wrapping_add(self.seed) & 255) as usize
    }

    /// Gradient index for a corner; inputs are at most 256
    #[inline]
    fn hash(ii: usize, jj: usize) -> usize {
        PERM[ii + PERM[jj] as usize] as usize % GRAD_COUNT
    }

    #[inline]
    fn corner(gradient: usize, dx: f32, dy: f32) -> f32 {
        let t = FALLOFF_RADIUS_SQ - dx * dx - dy * dy;
        if t < 0.0 {
            return 0.0;
        }
        let g = &GRAD2[gradient];
        let t2 = t * t;
        t2 * t2 * (g[0] * dx + g[1] * dy)
    }
}
