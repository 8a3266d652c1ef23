//! Coherent 2D noise

pub mod simplex;
pub mod tables;

pub use simplex::NoiseField;
