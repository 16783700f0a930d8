//! Deterministic "organic" noise
//!
//! A layered sine/cosine sum, not a random source: the same `(t, seed)`
//! always produces the same value. It drives the enemies' signature weaving
//! motion, so the octave count and the frequency/amplitude ratios are part
//! of the behavior rather than tunable detail.

use std::f32::consts::TAU;

/// Octaves summed per sample.
const OCTAVES: u32 = 4;
/// Frequency of the first octave (cycles per second of enemy age).
const BASE_FREQUENCY: f32 = 0.35;
/// Frequency ratio between consecutive octaves.
const LACUNARITY: f32 = 1.8;
/// Amplitude ratio between consecutive octaves.
const GAIN: f32 = 0.5;

/// Sample the noise field at time `t` with a per-entity phase `seed`.
///
/// Output is always within `[-1, 1]`.
pub fn organic_noise(t: f32, seed: f32) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = BASE_FREQUENCY;
    for octave in 0..OCTAVES {
        let phase = t * frequency + seed * 0.0001 * (octave + 1) as f32;
        total += amplitude * (phase * TAU).sin();
        total += amplitude * ((phase + 0.5) * TAU).cos();
        amplitude *= GAIN;
        frequency *= LACUNARITY;
    }
    (total / 8.0).clamp(-1.0, 1.0)
}
