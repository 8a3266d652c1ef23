//! Owned generator bundling the integer stream, the normal sampler and the
//! noise field behind one seedable handle

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::noise::NoiseField;
use crate::random::{GaussianSampler, Lcg};

/// Independent random streams with their own seeds
///
/// The integer stream (and the uniform and normal draws built on it) and the
/// noise field never share state: reseeding one leaves the other untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Generator {
    lcg: Lcg,
    gaussian: GaussianSampler,
    noise: NoiseField,
}

impl Generator {
    /// Create a generator with both seeds set
    pub fn new(generator_seed: i64, noise_seed: i64) -> Self {
        Self {
            lcg: Lcg::new(generator_seed),
            gaussian: GaussianSampler::new(),
            noise: NoiseField::new(noise_seed),
        }
    }

    /// Restart the integer stream. Any cached normal deviate is dropped.
    pub fn seed_generator(&mut self, seed: i64) {
        self.lcg.seed(seed);
        self.gaussian.reset();
    }

    /// Integer in `[0, 32766]`
    pub fn next_int(&mut self) -> i32 {
        self.lcg.next_int()
    }

    /// Float in `[0.0, 1.0)`
    pub fn next_float(&mut self) -> f32 {
        self.lcg.next_float()
    }

    /// Normally distributed value with the given mean and standard deviation
    pub fn next_normal(&mut self, mean: f32, std: f32) -> Result<f32> {
        self.gaussian.next_normal(&mut self.lcg, mean, std)
    }

    /// Replace the noise seed
    pub fn seed_noise(&mut self, seed: i64) {
        self.noise.seed(seed);
    }

    /// Noise value at `(x, y)`, approximately in `[-1.0, 1.0]`
    pub fn sample_noise_2d(&self, x: f32, y: f32) -> f32 {
        self.noise.sample(x, y)
    }

    /// Integer stream
    pub fn lcg(&self) -> &Lcg {
        &self.lcg
    }

    /// Normal sampler and its cache
    pub fn gaussian(&self) -> &GaussianSampler {
        &self.gaussian
    }

    /// Noise field
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }
}
