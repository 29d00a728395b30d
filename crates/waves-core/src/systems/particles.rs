//! Ambient particle field.
//!
//! Each emotional state drapes the scene in its own particle weather:
//! color, a directional drift, and a speed. Particles wander with a small
//! random velocity plus the state's drift bias and respawn at a random
//! point when they wander out of the particle volume.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::rng::Rng;
use crate::core::world::Aabb;

/// Directional bias applied on top of a particle's random wander.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftMode {
    /// Rising, like sparks.
    Up,
    /// Sideways sweep.
    Horizontal,
    /// Falling, like slow rain.
    Down,
    /// Circling the world's vertical axis.
    Orbit,
}

/// Visual styling for one state's particle weather.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    /// Linear RGB, 0.0 to 1.0.
    pub color: [f32; 3],
    pub drift: DriftMode,
    /// Drift strength multiplier.
    pub speed: f32,
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            drift: DriftMode::Horizontal,
            speed: 1.0,
        }
    }
}

/// Base drift bias in units/second before the style multiplier.
const DRIFT_BIAS: f32 = 0.4;
/// Random wander speed per axis in units/second.
/// Matches the shipped 0.02-units-per-tick scatter at 60 Hz.
const WANDER_SPEED: f32 = 1.2;

#[derive(Debug, Clone, Copy)]
pub struct DriftParticle {
    pub position: Vec3,
    wander: Vec3,
}

/// The live particle population for the current emotional state.
pub struct ParticleField {
    particles: Vec<DriftParticle>,
    style: ParticleStyle,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            style: ParticleStyle::default(),
        }
    }

    /// Throw away the current population and scatter a fresh one in the
    /// new state's style. Runs at init, every transition, and restart.
    pub fn restyle(&mut self, style: ParticleStyle, count: usize, volume: &Aabb, rng: &mut Rng) {
        self.style = style;
        self.particles.clear();
        for _ in 0..count {
            self.particles.push(DriftParticle {
                position: volume.random_point(rng),
                wander: Self::random_wander(rng),
            });
        }
    }

    /// Advance the drift. Escapees respawn inside the volume with a new
    /// wander velocity.
    pub fn tick(&mut self, dt: f32, volume: &Aabb, rng: &mut Rng) {
        let style = self.style;
        for p in &mut self.particles {
            let bias = Self::drift_bias(style, p.position);
            p.position += (p.wander + bias) * dt;
            if !volume.contains(p.position) {
                p.position = volume.random_point(rng);
                p.wander = Self::random_wander(rng);
            }
        }
    }

    pub fn style(&self) -> ParticleStyle {
        self.style
    }

    pub fn iter(&self) -> impl Iterator<Item = &DriftParticle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    fn random_wander(rng: &mut Rng) -> Vec3 {
        Vec3::new(
            rng.next_range(-WANDER_SPEED, WANDER_SPEED),
            rng.next_range(-WANDER_SPEED, WANDER_SPEED),
            rng.next_range(-WANDER_SPEED, WANDER_SPEED),
        )
    }

    fn drift_bias(style: ParticleStyle, position: Vec3) -> Vec3 {
        let strength = DRIFT_BIAS * style.speed;
        match style.drift {
            DriftMode::Up => Vec3::new(0.0, strength, 0.0),
            DriftMode::Down => Vec3::new(0.0, -strength, 0.0),
            DriftMode::Horizontal => Vec3::new(strength, 0.0, 0.0),
            DriftMode::Orbit => {
                // Tangent around the vertical axis through the origin
                let radial = Vec3::new(position.x, 0.0, position.z);
                if radial.length_squared() < 1e-6 {
                    Vec3::ZERO
                } else {
                    Vec3::new(-radial.z, 0.0, radial.x).normalize() * strength
                }
            }
        }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}
