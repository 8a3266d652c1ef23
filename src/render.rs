//! Audio-rate rendering of the random streams
//!
//! Listening to a stream, or running it through an FFT, is the quickest way to
//! spot a degenerate seed or a lattice artifact.

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::generator::Generator;

/// Standard deviation of the normal source, keeping ±4σ inside full scale
pub const NORMAL_STD: f32 = 0.25;

/// Row of the noise field walked by the noise source
pub const NOISE_ROW: f32 = 0.5;

/// Which stream feeds the rendered buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Source {
    /// `next_float` mapped to [-1, 1)
    Uniform,
    /// `next_normal(0, NORMAL_STD)` clamped to [-1, 1]
    Normal,
    /// The noise field sampled along a row
    Noise,
}

impl Source {
    /// Lowercase name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Source::Uniform => "uniform",
            Source::Normal => "normal",
            Source::Noise => "noise",
        }
    }
}

/// Everything needed to reproduce a render
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Stream to render
    pub source: Source,
    /// Seed of the integer stream
    pub generator_seed: i64,
    /// Seed of the noise field
    pub noise_seed: i64,
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Length of the render
    pub duration: Duration,
    /// Lattice cells crossed per second by the noise source
    pub frequency: f32,
}

impl RenderSettings {
    /// Number of samples the render will produce
    ///
    /// Fails when the duration and sample rate multiply past what a buffer
    /// can index.
    pub fn sample_count(&self) -> Result<usize> {
        self.duration
            .as_millis()
            .checked_mul(self.sample_rate as u128)
            .and_then(|n| usize::try_from(n / 1000).ok())
            .ok_or_else(|| {
                anyhow!(
                    "Render too long: {} ms at {} Hz",
                    self.duration.as_millis(),
                    self.sample_rate
                )
            })
    }

    fn validate(&self) -> Result<usize> {
        if self.sample_rate == 0 {
            return Err(anyhow!("Invalid sample rate: {}", self.sample_rate));
        }
        if self.source == Source::Noise && !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(anyhow!("Invalid noise frequency: {}", self.frequency));
        }
        self.sample_count()
    }
}

/// Render `settings` into a mono buffer in [-1, 1]
pub fn render(settings: &RenderSettings) -> Result<Vec<f32>> {
    let n_samples = settings.validate()?;
    debug!(
        "RENDER: {} samples of {} at {} Hz",
        n_samples,
        settings.source.name(),
        settings.sample_rate
    );

    let mut generator = Generator::new(settings.generator_seed, settings.noise_seed);
    let mut output = Vec::with_capacity(n_samples);

    match settings.source {
        Source::Uniform => {
            output.extend((0..n_samples).map(|_| 2.0 * generator.next_float() - 1.0));
        }
        Source::Normal => {
            for _ in 0..n_samples {
                let value = generator.next_normal(0.0, NORMAL_STD)?;
                output.push(value.clamp(-1.0, 1.0));
            }
        }
        Source::Noise => {
            let step = settings.frequency / settings.sample_rate as f32;
            output.extend(
                (0..n_samples).map(|n| generator.sample_noise_2d(n as f32 * step, NOISE_ROW)),
            );
        }
    }

    Ok(output)
}
