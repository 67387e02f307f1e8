//! Randomised style parameters for the background particles.

use crate::config::PARTICLE_PALETTE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    /// Horizontal position, percent of the container width.
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub color: &'static str,
}

impl ParticleStyle {
    /// Draws one particle from `rng`, which must yield uniform values in `[0, 1)`.
    pub fn sample<R: FnMut() -> f64>(rng: &mut R) -> Self {
        let left_pct = rng() * 100.0;
        let delay_s = rng() * 20.0;
        let duration_s = rng() * 10.0 + 15.0;
        let slot = (rng() * PARTICLE_PALETTE.len() as f64) as usize;
        Self {
            left_pct,
            delay_s,
            duration_s,
            color: PARTICLE_PALETTE[slot.min(PARTICLE_PALETTE.len() - 1)],
        }
    }

    pub fn left(&self) -> String {
        format!("{}%", self.left_pct)
    }

    pub fn delay(&self) -> String {
        format!("{}s", self.delay_s)
    }

    pub fn duration(&self) -> String {
        format!("{}s", self.duration_s)
    }
}
