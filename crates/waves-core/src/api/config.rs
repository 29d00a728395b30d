use glam::Vec3;

use crate::core::world::Aabb;
use crate::input::mapper::JoystickConfig;

/// Tuning and capacity configuration for the game core.
/// Defaults reproduce the shipped game: a 100x100 unit field, five stars
/// per emotional state, 60 Hz simulation.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Box the player is clamped into.
    pub bounds: Aabb,
    /// Volume stars spawn into.
    pub star_spawn: Aabb,
    /// Volume ambient particles drift through.
    pub particle_volume: Aabb,
    /// Horizontal movement speed in units/second.
    pub move_speed: f32,
    /// Upward speed while ascending, units/second.
    pub ascend_speed: f32,
    /// Downward bias applied when not ascending, units/second.
    pub gravity: f32,
    /// Distance at which a star counts as collected.
    pub pickup_radius: f32,
    /// Stars required to advance to the next emotional state.
    pub stars_needed: u32,
    /// Ambient particles kept alive at any time.
    pub particle_count: usize,
    /// Maximum sound cues per frame.
    pub max_sounds: usize,
    /// Maximum game events per frame.
    pub max_events: usize,
    /// Initial master volume, 0.0 to 1.0.
    pub master_volume: f32,
    /// Joystick deadzone and travel radius in screen pixels.
    pub joystick: JoystickConfig,
    /// Seed for star and particle placement.
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            bounds: Aabb::new(Vec3::new(-50.0, 0.0, -50.0), Vec3::new(50.0, 20.0, 50.0)),
            star_spawn: Aabb::new(Vec3::new(-20.0, -5.0, -20.0), Vec3::new(20.0, 15.0, 20.0)),
            particle_volume: Aabb::new(Vec3::new(-50.0, -25.0, -50.0), Vec3::new(50.0, 25.0, 50.0)),
            // 0.1 units per 60 Hz tick
            move_speed: 6.0,
            ascend_speed: 6.0,
            // 0.01 units per 60 Hz tick
            gravity: 0.6,
            pickup_radius: 1.5,
            stars_needed: 5,
            particle_count: 200,
            max_sounds: 32,
            max_events: 32,
            master_volume: 0.7,
            joystick: JoystickConfig::default(),
            rng_seed: 42,
        }
    }
}
