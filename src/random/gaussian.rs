//! Normally distributed draws using the Box-Muller polar method
//!
//! Each accepted pair of uniform draws yields two independent standard normal
//! deviates. The first is returned immediately and the second is cached and
//! handed out by the following call, so on average one pair of integer draws
//! is consumed per two normals.

use anyhow::{anyhow, Result};
use log::{error, trace};
use serde::{Deserialize, Serialize};

use super::lcg::Lcg;

/// Upper bound on rejected pairs before a single draw is abandoned.
///
/// Roughly 21% of pairs fall outside the unit disc, so reaching this bound
/// means the integer stream has degenerated.
pub const MAX_REJECTIONS: usize = 1000;

/// Second deviate left over from the previous pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum GaussianCache {
    /// The next call draws a fresh pair
    #[default]
    Empty,
    /// The next call returns this standard normal value
    Filled(f32),
}

impl GaussianCache {
    /// Cached value that the next call may reuse.
    ///
    /// A cached value of exactly 0.0 counts as empty, matching the C library
    /// that used 0.0 as its "nothing cached" marker.
    pub fn usable(self) -> Option<f32> {
        match self {
            GaussianCache::Filled(value) if value != 0.0 => Some(value),
            _ => None,
        }
    }
}

/// Normal sampler drawing its uniforms from an [`Lcg`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GaussianSampler {
    cache: GaussianCache,
}

impl GaussianSampler {
    /// Create a sampler with nothing cached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler from a previously captured cache state
    pub fn with_cache(cache: GaussianCache) -> Self {
        Self { cache }
    }

    /// Current cache state
    pub fn cache(&self) -> GaussianCache {
        self.cache
    }

    /// Drop any cached deviate
    pub fn reset(&mut self) {
        self.cache = GaussianCache::Empty;
    }

    /// Draw a value from N(`mean`, `std`²)
    ///
    /// Fails only when [`MAX_REJECTIONS`] consecutive pairs miss the unit
    /// disc. The cache is left empty in that case.
    pub fn next_normal(&mut self, lcg: &mut Lcg, mean: f32, std: f32) -> Result<f32> {
        if let Some(cached) = self.cache.usable() {
            self.cache = GaussianCache::Empty;
            return Ok(cached * std + mean);
        }
        self.cache = GaussianCache::Empty;

        let (x, y, r) = Self::draw_in_disc(lcg)?;
        let d = (-2.0 * r.ln() / r).sqrt();
        let n1 = x * d;
        let n2 = y * d;
        trace!("GAUSSIAN: pair x={}, y={}, r={}, n1={}, n2={}", x, y, r, n1, n2);

        self.cache = GaussianCache::Filled(n2);
        Ok(n1 * std + mean)
    }

    /// Rejection sample a point inside the unit disc, excluding the origin
    fn draw_in_disc(lcg: &mut Lcg) -> Result<(f32, f32, f32)> {
        for _ in 0..MAX_REJECTIONS {
            let x = lcg.next_signed();
            let y = lcg.next_signed();
            let r = x * x + y * y;
            if r > 0.0 && r <= 1.0 {
                return Ok((x, y, r));
            }
        }

        error!(
            "GAUSSIAN: no point inside the unit disc after {} pairs (lcg state {})",
            MAX_REJECTIONS,
            lcg.state()
        );
        Err(anyhow!(
            "Rejection sampling exceeded {} attempts",
            MAX_REJECTIONS
        ))
    }
}
