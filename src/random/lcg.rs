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

//! Linear congruential generator and the uniform float draw built on it

use log::debug;
use serde::{Deserialize, Serialize};

/// Modulus applied to every integer draw. Draws never reach this value.
pub const RAND_MAX: i32 = 0x7fff;

/// Multiplier of the C standard sample `rand()` recurrence
pub const MULTIPLIER: i64 = 1103515245;

/// Increment of the C standard sample `rand()` recurrence
pub const INCREMENT: i64 = 12345;

/// Pseudo random integer stream (Linear Congruential Generator)
///
/// The state is a signed 64-bit integer advanced with wrapping arithmetic, so
/// any seed, including 0 and negative values, yields a reproducible stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    /// Create a generator already seeded with `seed`
    pub fn new(seed: i64) -> Self {
        Self { state: seed }
    }

    /// Restart the stream from `seed`
    pub fn seed(&mut self, seed: i64) {
        debug!("LCG: seeded with {}", seed);
        self.state = seed;
    }

    /// Raw 64-bit state, as it will be fed to the next draw
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Generates the next integer in `[0, RAND_MAX)`
    #[inline]
    pub fn next_int(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        // i64 division truncates toward zero; the cast keeps the low 32 bits
        ((self.state / 65536) as u32 % RAND_MAX as u32) as i32
    }

    /// Generates a float in `[0.0, 1.0)`
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        self.next_int() as f32 / RAND_MAX as f32
    }

    /// Generates a float in `[-1.0, 1.0)`
    #[inline]
    pub fn next_signed(&mut self) -> f32 {
        2.0 * self.next_float() - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seed_zero() {
        assert_eq!(Lcg::default(), Lcg::new(0));
        assert_eq!(Lcg::default().state(), 0);
    }

    #[test]
    fn test_first_draws_from_seed_one() {
        // Same values as the C standard sample rand() seeded with 1
        let mut lcg = Lcg::new(1);
        let expected = (1i64 * MULTIPLIER + INCREMENT) / 65536 % RAND_MAX as i64;
        assert_eq!(expected, 16838);
        assert_eq!(lcg.next_int(), 16838);
        assert_eq!(lcg.next_int(), 18984);
        assert_eq!(lcg.next_int(), 21520);
        assert_eq!(lcg.next_int(), 3905);
        assert_eq!(lcg.next_int(), 10112);
    }

    #[test]
    fn test_seed_zero_starts_at_zero() {
        let mut lcg = Lcg::new(0);
        assert_eq!(lcg.next_int(), 0);
        assert_eq!(lcg.state(), INCREMENT);
        assert_eq!(lcg.next_int(), 27811);
    }

    #[test]
    fn test_negative_state_wraps() {
        // Seeds whose state goes negative still draw from the same recurrence
        let mut lcg = Lcg::new(-7);
        let draws: Vec<i32> = (0..5).map(|_| lcg.next_int()).collect();
        assert_eq!(draws, vec![13205, 24074, 23449, 11294, 7621]);
        assert_eq!(lcg.state(), 7129269410421906762);

        let mut lcg = Lcg::new(0);
        for _ in 0..5 {
            lcg.next_int();
        }
        assert_eq!(lcg.state(), -5702537557386291467);
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut lcg = Lcg::new(42);
        let first: Vec<i32> = (0..8).map(|_| lcg.next_int()).collect();
        lcg.seed(42);
        let second: Vec<i32> = (0..8).map(|_| lcg.next_int()).collect();
        assert_eq!(first, second);
        assert_eq!(first[..5], [19102, 17492, 32109, 11090, 26962]);
    }

    #[test]
    fn test_ranges() {
        let mut lcg = Lcg::new(987654321);
        for _ in 0..10_000 {
            let i = lcg.next_int();
            assert!((0..RAND_MAX).contains(&i), "int out of range: {}", i);
        }
        for _ in 0..10_000 {
            let f = lcg.next_float();
            assert!((0.0..1.0).contains(&f), "float out of range: {}", f);
            let s = lcg.next_signed();
            assert!((-1.0..1.0).contains(&s), "signed out of range: {}", s);
        }
    }
}
