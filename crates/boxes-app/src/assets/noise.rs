//! Gradient noise for the 3D noise texture.
//!
//! Classic Perlin noise on a 32-cell lattice that wraps, so the volume
//! tiles. Each voxel packs four samples taken at offset positions, one
//! per channel.

use boxes_renderer::NoiseVolume;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Lattice period.
const PERIOD: usize = 0x20;
const MASK: i32 = PERIOD as i32 - 1;

/// Seeded Perlin gradient noise.
pub struct PerlinNoise {
    perm: [usize; 2 * PERIOD + 2],
    gradients: [[f32; 3]; 2 * PERIOD + 2],
}

impl PerlinNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut order: Vec<usize> = (0..PERIOD).collect();
        order.shuffle(&mut rng);

        let mut perm = [0usize; 2 * PERIOD + 2];
        let mut gradients = [[0.0f32; 3]; 2 * PERIOD + 2];
        for i in 0..PERIOD {
            perm[i] = order[i];
            gradients[i] = random_unit(&mut rng);
        }
        for i in 0..PERIOD + 2 {
            perm[PERIOD + i] = perm[i % PERIOD];
            gradients[PERIOD + i] = gradients[i % PERIOD];
        }

        Self { perm, gradients }
    }

    /// Noise at `p`, roughly in [-1, 1] and zero on lattice points.
    pub fn sample(&self, p: [f32; 3]) -> f32 {
        let cell = p.map(|v| v.floor());
        let b0 = cell.map(|c| (c as i32 & MASK) as usize);
        let b1 = b0.map(|b| (b + 1) & MASK as usize);
        let r0 = [p[0] - cell[0], p[1] - cell[1], p[2] - cell[2]];
        let r1 = r0.map(|r| r - 1.0);

        let i = self.perm[b0[0]];
        let j = self.perm[b1[0]];
        let b00 = self.perm[i + b0[1]];
        let b10 = self.perm[j + b0[1]];
        let b01 = self.perm[i + b1[1]];
        let b11 = self.perm[j + b1[1]];

        let s = r0.map(s_curve);
        let dot = |index: usize, x: f32, y: f32, z: f32| {
            let g = self.gradients[index];
            g[0] * x + g[1] * y + g[2] * z
        };

        let corner = |bz: usize, z: f32| {
            let u = dot(b00 + bz, r0[0], r0[1], z);
            let v = dot(b10 + bz, r1[0], r0[1], z);
            let a = lerp(s[0], u, v);
            let u = dot(b01 + bz, r0[0], r1[1], z);
            let v = dot(b11 + bz, r1[0], r1[1], z);
            let b = lerp(s[0], u, v);
            lerp(s[1], a, b)
        };

        lerp(s[2], corner(b0[2], r0[2]), corner(b1[2], r1[2]))
    }
}

fn random_unit(rng: &mut StdRng) -> [f32; 3] {
    loop {
        let v: [f32; 3] = [rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)];
        let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        if length > 1e-3 {
            return v.map(|c| c / length);
        }
    }
}

fn s_curve(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Fill a `size`^3 RGBA8 volume. Byte `b` of each voxel samples the noise
/// shifted by 16 cells along x when `b & 1` and along y when `b & 2`.
pub fn generate_noise(size: u32, seed: u64) -> NoiseVolume {
    let noise = PerlinNoise::new(seed);
    let size = size.max(1);
    let scale = PERIOD as f32 / size as f32;
    let mut rgba = Vec::with_capacity((size as usize).pow(3) * 4);

    for k in 0..size {
        let z = k as f32 * scale;
        for j in 0..size {
            for i in 0..size {
                for byte in 0..4u32 {
                    let x = (i + (byte & 1) * 16) as f32 * scale;
                    let y = (j + (byte & 2) * 8) as f32 * scale;
                    let value = 128.0 * (noise.sample([x, y, z]) + 1.0);
                    rgba.push(value.clamp(0.0, 255.0) as u8);
                }
            }
        }
    }

    tracing::debug!(size, seed, "noise volume generated");
    NoiseVolume { size, rgba }
}
