use rngtv::{Generator, NoiseField};

mod common;
use common::scatter_points;

#[test]
fn test_bounded_over_random_points() {
    let field = NoiseField::new(42);
    for (x, y) in scatter_points(1, 1000, 100.0) {
        let v = field.sample(x, y);
        assert!(v.is_finite(), "non-finite at ({}, {})", x, y);
        assert!((-1.2..=1.2).contains(&v), "{} out of range at ({}, {})", v, x, y);
    }
}

#[test]
fn test_golden_reference() {
    let mut generator = Generator::default();
    generator.seed_noise(42);
    let value = generator.sample_noise_2d(3.5, -2.25);
    assert_eq!(value.to_bits(), 0xbe9c_b122, "got {}", value);
    assert_eq!(value, -0.306_038_92);
}

#[test]
fn test_sampling_is_pure() {
    let field = NoiseField::new(-8);
    let points = scatter_points(3, 200, 50.0);
    let first: Vec<f32> = points.iter().map(|&(x, y)| field.sample(x, y)).collect();
    let second: Vec<f32> = points.iter().rev().map(|&(x, y)| field.sample(x, y)).collect();
    assert!(first.iter().eq(second.iter().rev()));
}

#[test]
fn test_continuity() {
    let field = NoiseField::new(42);
    let delta = 1e-3;
    for (x, y) in scatter_points(5, 500, 20.0) {
        let v = field.sample(x, y);
        let dx = (field.sample(x + delta, y) - v).abs();
        let dy = (field.sample(x, y + delta) - v).abs();
        assert!(dx < 0.02 && dy < 0.02, "jump at ({}, {}): {} {}", x, y, dx, dy);
    }
}

#[test]
fn test_not_constant() {
    let field = NoiseField::new(0);
    let values: Vec<f32> = scatter_points(8, 100, 10.0)
        .into_iter()
        .map(|(x, y)| field.sample(x, y))
        .collect();
    let min = values.iter().cloned().fold(f32::MAX, f32::min);
    let max = values.iter().cloned().fold(f32::MIN, f32::max);
    assert!(max - min > 0.5, "range too narrow: {}..{}", min, max);
}

#[test]
fn test_shared_between_threads() {
    let field = NoiseField::new(42);
    let expected = field.sample(3.5, -2.25);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(field.sample(3.5, -2.25), expected));
        }
    });
}
