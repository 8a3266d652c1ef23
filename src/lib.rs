// Copyright 2025 Tyler Neely (tylerneely@gmail.com).
// Copyright 2021 Emilie Gillet (emilie.o.gillet@gmail.com)
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.
//
// See http://creativecommons.org/licenses/MIT/ for more information.

//! Reproducible pseudo random streams and coherent noise.
//!
//! This crate provides a small numeric kernel for procedural generation and
//! testing, where replaying a stream from its seed matters more than
//! statistical or cryptographic quality:
//!
//! - [`Lcg`]: the C standard sample `rand()` recurrence on a 64-bit state,
//!   drawing integers in `[0, 32766]` and floats in `[0, 1)`
//! - [`GaussianSampler`]: Box-Muller polar normals, caching the second deviate
//!   of every pair
//! - [`NoiseField`]: seeded 2D simplex noise in roughly `[-1, 1]`
//! - [`Generator`]: all three behind one owned handle

#![warn(missing_docs)]

pub mod generator;
/// TOML sidecar describing a render
pub mod manifest;
pub mod noise;
pub mod random;
pub mod render;
/// WAV encoding of rendered buffers
pub mod wav;

pub use generator::Generator;
pub use noise::NoiseField;
pub use random::{GaussianCache, GaussianSampler, Lcg, RAND_MAX};
pub use render::{render, RenderSettings, Source};
