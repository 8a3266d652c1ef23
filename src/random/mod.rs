//! Seeded integer, uniform and normal streams

pub mod gaussian;
pub mod lcg;

pub use gaussian::{GaussianCache, GaussianSampler, MAX_REJECTIONS};
pub use lcg::{Lcg, RAND_MAX};
