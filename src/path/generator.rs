//! Seeded noise field and the deterministic path it describes.

use glam::{Vec2, Vec3, Vec3Swizzles};
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::params::DEFAULT_PATH_GAIN;

/// Permutation seed for the underlying Perlin table. Path variation comes
/// from the per-axis sample origins, not from the table.
const PERMUTATION_SEED: u32 = 0;

/// Starting sample location on the noise plane for one spatial axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSample {
    /// (x, y) coordinate on the noise plane, each in [0, 1)
    pub origin: Vec2,
    /// Scaled noise value at `origin`, subtracted so w = 0 maps to zero
    pub initial_offset: f32,
}

/// Per-axis noise sample origins derived from a seed string.
///
/// Immutable once built; the same seed always yields the same field.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    axes: [AxisSample; 3],
}

impl NoiseField {
    /// Derive six coordinates in [0, 1) from the seed and cache the noise
    /// value at each axis origin.
    pub fn from_seed(seed: &str, perlin: &Perlin, gain: f32) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed_hash(seed));
        let mut next_axis = || {
            let origin = Vec2::new(rng.random::<f32>(), rng.random::<f32>());
            AxisSample {
                origin,
                initial_offset: scaled_noise(perlin, gain, origin.x as f64, origin.y as f64),
            }
        };
        let x = next_axis();
        let y = next_axis();
        let z = next_axis();
        Self { axes: [x, y, z] }
    }

    /// Samples for the x, y and z axes, in that order.
    pub fn axes(&self) -> &[AxisSample; 3] {
        &self.axes
    }
}

/// Deterministic 3D path driven by 2D Perlin noise.
pub struct PathGenerator {
    perlin: Perlin,
    field: NoiseField,
    gain: f32,
}

impl PathGenerator {
    /// Create a generator with the default gain
    pub fn new(seed: &str) -> Self {
        Self::with_gain(seed, DEFAULT_PATH_GAIN)
    }

    /// Create a generator whose offsets are scaled by `gain`
    pub fn with_gain(seed: &str, gain: f32) -> Self {
        let perlin = Perlin::new(PERMUTATION_SEED);
        let field = NoiseField::from_seed(seed, &perlin, gain);
        Self {
            perlin,
            field,
            gain,
        }
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    /// Point on the path at parameter `w`.
    ///
    /// Pure in `w`. `get_point(0.0)` is exactly the origin because each axis
    /// subtracts the value it sampled at its own origin.
    pub fn get_point(&self, w: f32) -> Vec3 {
        let [x, y, z] = self.field.axes.map(|axis| {
            scaled_noise(
                &self.perlin,
                self.gain,
                w as f64 + axis.origin.x as f64,
                axis.origin.y as f64,
            ) - axis.initial_offset
        });
        Vec3::new(x, y, z)
    }

    /// Point on the path at `w` with its height adjusted so the climb from
    /// `previous` is no steeper than `max_slope`.
    pub fn get_point_with_limited_slope(&self, w: f32, previous: Vec3, max_slope: f32) -> Vec3 {
        let mut next = self.get_point(w);
        next.y = limit_slope(previous, next, max_slope);
        next
    }
}

/// Height for `next` such that |Δy| / |Δxz| relative to `previous` does not
/// exceed `max_slope`. Returns `next.y` unchanged when already within bounds.
pub fn limit_slope(previous: Vec3, next: Vec3, max_slope: f32) -> f32 {
    let horizontal = previous.xz().distance(next.xz());
    let rise = next.y - previous.y;

    if rise == 0.0 {
        return next.y;
    }
    // Zero horizontal travel allows no vertical change at all.
    if horizontal == 0.0 || rise.abs() / horizontal > max_slope {
        return previous.y + rise.signum() * max_slope * horizontal;
    }
    next.y
}

/// Noise remapped to [0, 1] and scaled by `gain`.
fn scaled_noise(perlin: &Perlin, gain: f32, x: f64, y: f64) -> f32 {
    let unit = 0.5 * (perlin.get([x, y]) + 1.0);
    (gain as f64 * unit) as f32
}

/// 64-bit FNV-1a. Stable across platforms and toolchains, unlike std's hasher.
fn seed_hash(seed: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    seed.bytes().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(PRIME)
    })
}
