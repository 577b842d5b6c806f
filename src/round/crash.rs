//! Crash point draw
//!
//! `crash = 1.00 + u1 * u2 * K` for two independent uniforms in [0, 1).
//! The product skews rounds toward early crashes while keeping a long tail
//! of rare high multipliers.

use rand::Rng;

use super::multiplier::Multiplier;

/// Draw a crash point with scale `k`, rounded to the nearest hundredth
pub fn draw_crash_point<R: Rng + ?Sized>(rng: &mut R, k: f64) -> Multiplier {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    crash_point_from_uniforms(u1, u2, k)
}

/// Map a pair of uniforms onto the crash curve
pub fn crash_point_from_uniforms(u1: f64, u2: f64, k: f64) -> Multiplier {
    Multiplier::from_f64(1.0 + u1 * u2 * k)
}
