#![allow(dead_code)]

use num_complex::Complex;
use rustfft::FftPlanner;

use rngtv::Lcg;

/// `count` points spread uniformly over the square [-extent, extent]²
pub fn scatter_points(seed: i64, count: usize, extent: f32) -> Vec<(f32, f32)> {
    let mut lcg = Lcg::new(seed);
    (0..count)
        .map(|_| (lcg.next_signed() * extent, lcg.next_signed() * extent))
        .collect()
}

/// Power spectrum of a real signal, positive frequencies only, DC dropped
pub fn power_spectrum(samples: &[f32]) -> Vec<f32> {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(samples.len());

    let mut buffer: Vec<Complex<f32>> = samples
        .iter()
        .map(|&s| Complex { re: s, im: 0.0 })
        .collect();

    fft.process(&mut buffer);

    buffer
        .iter()
        .take(buffer.len() / 2)
        .skip(1)
        .map(|c| c.norm_sqr())
        .collect()
}

/// Share of spectral energy in the lowest quarter of the bins
pub fn low_band_fraction(samples: &[f32]) -> f32 {
    let spectrum = power_spectrum(samples);
    let quarter = spectrum.len() / 4;
    let low: f32 = spectrum[..quarter].iter().sum();
    let total: f32 = spectrum.iter().sum();
    low / total
}

/// Mean and population variance
pub fn mean_variance(values: &[f32]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, variance)
}
