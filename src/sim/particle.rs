//! Shine particles: short-lived visual feedback for a successful slice

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::fruit::FruitColor;
use crate::consts::{PARTICLE_DECAY, PARTICLE_SHRINK};

/// A decorative burst particle. Not gameplay-affecting.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Inherited from the fruit that shattered
    pub color: FruitColor,
    /// Remaining life; starts at 1.0, dead at <= 0. Doubles as render opacity.
    pub life: f32,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, color: FruitColor, rng: &mut Pcg32) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0)),
            color,
            life: 1.0,
            size: rng.random_range(1.0..4.0),
        }
    }

    /// Advance one tick: drift, fade, shrink.
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.life -= PARTICLE_DECAY;
        self.size = (self.size - PARTICLE_SHRINK).max(0.0);
    }

    pub fn alive(&self) -> bool {
        self.life > 0.0
    }
}
