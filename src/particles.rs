//! Drifting point field layered over the backdrop shader.

use crate::config::Config;

const SPREAD: f32 = 5.0;
const DEPTH: f32 = 2.0;

/// Particle positions packed as `x, y, z` triples, ready for a vertex buffer.
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<f32>,
    rotation: f32,
}

impl ParticleField {
    /// `random` yields values in `[0, 1)`.
    pub fn new(count: usize, mut random: impl FnMut() -> f32) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        for _ in 0..count {
            positions.push((random() - 0.5) * SPREAD);
            positions.push((random() - 0.5) * SPREAD);
            positions.push(random() * DEPTH);
        }
        Self {
            positions,
            rotation: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Spin about Z, in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Moves every particle toward `z = 0`; any that cross it respawn at the
    /// back of the field.
    pub fn step(&mut self, config: &Config, mut random: impl FnMut() -> f32) {
        for p in self.positions.chunks_exact_mut(3) {
            p[2] -= config.particle_drift;
            if p[2] < 0.0 {
                p[0] = (random() - 0.5) * SPREAD;
                p[1] = (random() - 0.5) * SPREAD;
                p[2] = DEPTH;
            }
        }
        self.rotation += config.particle_spin;
    }
}
