//! Shared helpers for orrery benchmarks: seeded RNG, input generators.

use orrery::{Point2, Vec2};
use orrery_la::Matrix;
use orrery_motion::TwoBody;

/// Simple xoshiro256** PRNG for reproducible benchmarks (no rand dependency in lib).
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f64 in [-1, 1]
    pub fn f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

/// `n` values in [-1, 1].
pub fn random_f64_flat(n: usize) -> Vec<f64> {
    let mut rng = make_rng();
    (0..n).map(|_| rng.f64()).collect()
}

/// nrows×ncols matrix; `flat` is column-major, shared with the nalgebra baseline.
pub fn random_matrix(nrows: usize, ncols: usize) -> Matrix<f64> {
    let flat = random_f64_flat(nrows * ncols);
    Matrix::from_fn(nrows, ncols, |i, j| flat[j * nrows + i])
}

/// Two bodies well apart, with small velocities.
pub fn random_two_body() -> TwoBody<f64> {
    let mut rng = make_rng();
    TwoBody::new(
        Point2::new(-4.0 + rng.f64(), rng.f64()),
        Point2::new(4.0 + rng.f64(), rng.f64()),
        Vec2::new(0.1 * rng.f64(), 0.1 * rng.f64()),
        Vec2::new(0.1 * rng.f64(), 0.1 * rng.f64()),
    )
}
