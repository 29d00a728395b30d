//! Flat snapshot buffer the JS renderer reads every frame.
//! Must stay in sync with the TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 20 floats]
//! [Pose: 9 floats  (player xyz, camera eye xyz, camera target xyz)]
//! [Stars: max_stars x 3 floats]
//! [Particles: max_particles x 3 floats]
//! [Sounds: max_sounds x 1 float]
//! [Events: max_events x 4 floats]
//! ```
//!
//! Capacities are written into the header every frame; TypeScript reads
//! them from the header to compute section offsets dynamically.

use crate::api::config::GameConfig;
use crate::api::types::GameEvent;
use crate::game::WavesGame;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 20;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_STARS: usize = 2;
pub const HEADER_STAR_COUNT: usize = 3;
pub const HEADER_MAX_PARTICLES: usize = 4;
pub const HEADER_PARTICLE_COUNT: usize = 5;
pub const HEADER_MAX_SOUNDS: usize = 6;
pub const HEADER_SOUND_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_STATE_INDEX: usize = 10;
pub const HEADER_STARS_COLLECTED: usize = 11;
pub const HEADER_STARS_NEEDED: usize = 12;
pub const HEADER_MASTER_VOLUME: usize = 13;
pub const HEADER_PAUSED: usize = 14;
pub const HEADER_KNOB_X: usize = 15;
pub const HEADER_KNOB_Y: usize = 16;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the pose section: player, camera eye, camera target.
pub const POSE_FLOATS: usize = 9;

/// Floats per star: x, y, z (wire format, never changes).
pub const STAR_FLOATS: usize = 3;

/// Floats per particle: x, y, z (wire format, never changes).
pub const PARTICLE_FLOATS: usize = 3;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotLayout {
    /// Star slots; one per star of the batch.
    pub max_stars: usize,
    /// Particle slots.
    pub max_particles: usize,
    /// Sound cue slots per frame.
    pub max_sounds: usize,
    /// Game event slots per frame.
    pub max_events: usize,

    /// Offset (in floats) where the pose section begins.
    pub pose_offset: usize,
    /// Offset (in floats) where star data begins.
    pub stars_offset: usize,
    /// Offset (in floats) where particle data begins.
    pub particles_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sounds_offset: usize,
    /// Offset (in floats) where event data begins.
    pub events_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl SnapshotLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_stars: usize,
        max_particles: usize,
        max_sounds: usize,
        max_events: usize,
    ) -> Self {
        let pose_offset = HEADER_FLOATS;
        let stars_offset = pose_offset + POSE_FLOATS;
        let particles_offset = stars_offset + max_stars * STAR_FLOATS;
        let sounds_offset = particles_offset + max_particles * PARTICLE_FLOATS;
        let events_offset = sounds_offset + max_sounds;
        let buffer_total_floats = events_offset + max_events * EVENT_FLOATS;

        Self {
            max_stars,
            max_particles,
            max_sounds,
            max_events,
            pose_offset,
            stars_offset,
            particles_offset,
            sounds_offset,
            events_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.stars_needed as usize,
            config.particle_count,
            config.max_sounds,
            config.max_events,
        )
    }
}

/// Owns the snapshot buffer and rewrites it after every tick.
pub struct FrameSnapshot {
    layout: SnapshotLayout,
    buffer: Vec<f32>,
    frame: u32,
}

impl FrameSnapshot {
    pub fn new(layout: SnapshotLayout) -> Self {
        let buffer = vec![0.0; layout.buffer_total_floats];
        Self {
            layout,
            buffer,
            frame: 0,
        }
    }

    /// Rewrite the whole buffer from current game state.
    pub fn write(&mut self, game: &WavesGame) {
        self.frame = self.frame.wrapping_add(1);
        let layout = self.layout.clone();
        let b = &mut self.buffer;

        let star_count = game.stars().len().min(layout.max_stars);
        let particle_count = game.particles().len().min(layout.max_particles);
        let sound_count = game.sounds().len().min(layout.max_sounds);
        let event_count = game.events().len().min(layout.max_events);
        let knob = game.knob_offset();

        b[HEADER_FRAME_COUNTER] = self.frame as f32;
        b[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        b[HEADER_MAX_STARS] = layout.max_stars as f32;
        b[HEADER_STAR_COUNT] = star_count as f32;
        b[HEADER_MAX_PARTICLES] = layout.max_particles as f32;
        b[HEADER_PARTICLE_COUNT] = particle_count as f32;
        b[HEADER_MAX_SOUNDS] = layout.max_sounds as f32;
        b[HEADER_SOUND_COUNT] = sound_count as f32;
        b[HEADER_MAX_EVENTS] = layout.max_events as f32;
        b[HEADER_EVENT_COUNT] = event_count as f32;
        b[HEADER_STATE_INDEX] = game.state().index() as f32;
        b[HEADER_STARS_COLLECTED] = game.progress().stars_collected() as f32;
        b[HEADER_STARS_NEEDED] = game.progress().stars_needed() as f32;
        b[HEADER_MASTER_VOLUME] = game.master_volume();
        b[HEADER_PAUSED] = if game.paused() { 1.0 } else { 0.0 };
        b[HEADER_KNOB_X] = knob.x;
        b[HEADER_KNOB_Y] = knob.y;

        let player = game.player().position;
        let camera = game.camera();
        let pose = [
            player.x,
            player.y,
            player.z,
            camera.eye.x,
            camera.eye.y,
            camera.eye.z,
            camera.target.x,
            camera.target.y,
            camera.target.z,
        ];
        b[layout.pose_offset..layout.pose_offset + POSE_FLOATS].copy_from_slice(&pose);

        for (i, star) in game.stars().iter().take(layout.max_stars).enumerate() {
            let off = layout.stars_offset + i * STAR_FLOATS;
            b[off] = star.position.x;
            b[off + 1] = star.position.y;
            b[off + 2] = star.position.z;
        }

        for (i, p) in game.particles().iter().take(layout.max_particles).enumerate() {
            let off = layout.particles_offset + i * PARTICLE_FLOATS;
            b[off] = p.position.x;
            b[off + 1] = p.position.y;
            b[off + 2] = p.position.z;
        }

        for (i, cue) in game.sounds().iter().take(layout.max_sounds).enumerate() {
            b[layout.sounds_offset + i] = cue.0 as f32;
        }

        for (i, event) in game.events().iter().take(layout.max_events).enumerate() {
            let off = layout.events_offset + i * EVENT_FLOATS;
            b[off] = event.kind;
            b[off + 1] = event.a;
            b[off + 2] = event.b;
            b[off + 3] = event.c;
        }
    }

    pub fn layout(&self) -> &SnapshotLayout {
        &self.layout
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Read one header field (tests and debugging).
    pub fn header(&self, index: usize) -> f32 {
        self.buffer[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_contiguous() {
        let layout = SnapshotLayout::new(5, 200, 32, 32);

        assert_eq!(layout.pose_offset, HEADER_FLOATS);
        assert_eq!(layout.stars_offset, layout.pose_offset + POSE_FLOATS);
        assert_eq!(layout.particles_offset, layout.stars_offset + 5 * STAR_FLOATS);
        assert_eq!(
            layout.sounds_offset,
            layout.particles_offset + 200 * PARTICLE_FLOATS
        );
        assert_eq!(layout.events_offset, layout.sounds_offset + 32);
        assert_eq!(
            layout.buffer_total_floats,
            layout.events_offset + 32 * EVENT_FLOATS
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn layout_follows_config() {
        let config = GameConfig::default();
        let layout = SnapshotLayout::from_config(&config);
        assert_eq!(layout.max_stars, 5);
        assert_eq!(layout.max_particles, 200);
        assert_eq!(layout.max_sounds, 32);
        assert_eq!(layout.max_events, 32);
    }

    #[test]
    fn write_fills_header_and_sections() {
        let config = GameConfig::default();
        let mut game = WavesGame::new(config.clone());
        game.init();

        let mut snapshot = FrameSnapshot::new(SnapshotLayout::from_config(&config));
        snapshot.write(&game);

        assert_eq!(snapshot.header(HEADER_FRAME_COUNTER), 1.0);
        assert_eq!(snapshot.header(HEADER_PROTOCOL_VERSION), PROTOCOL_VERSION);
        assert_eq!(snapshot.header(HEADER_STAR_COUNT), 5.0);
        assert_eq!(snapshot.header(HEADER_PARTICLE_COUNT), 200.0);
        assert_eq!(snapshot.header(HEADER_STATE_INDEX), 0.0);
        assert_eq!(snapshot.header(HEADER_STARS_COLLECTED), 0.0);
        assert_eq!(snapshot.header(HEADER_STARS_NEEDED), 5.0);
        assert_eq!(snapshot.header(HEADER_MASTER_VOLUME), 0.7);
        assert_eq!(snapshot.header(HEADER_PAUSED), 0.0);
        // init queues two sound cues
        assert_eq!(snapshot.header(HEADER_SOUND_COUNT), 2.0);

        // star slots hold the live star positions
        let layout = snapshot.layout().clone();
        let first = game.stars().iter().next().unwrap().position;
        assert_eq!(snapshot.buffer[layout.stars_offset], first.x);
        assert_eq!(snapshot.buffer[layout.stars_offset + 1], first.y);
        assert_eq!(snapshot.buffer[layout.stars_offset + 2], first.z);
    }

    #[test]
    fn frame_counter_increments_per_write() {
        let config = GameConfig::default();
        let mut game = WavesGame::new(config.clone());
        game.init();
        let mut snapshot = FrameSnapshot::new(SnapshotLayout::from_config(&config));
        snapshot.write(&game);
        snapshot.write(&game);
        assert_eq!(snapshot.header(HEADER_FRAME_COUNTER), 2.0);
    }

    #[test]
    fn counts_never_exceed_capacities() {
        let config = GameConfig::default();
        let mut game = WavesGame::new(config.clone());
        game.init();
        // pile up transitions without clearing the frame queues
        for _ in 0..50 {
            game.advance_state();
        }
        let mut snapshot = FrameSnapshot::new(SnapshotLayout::from_config(&config));
        snapshot.write(&game);
        assert!(snapshot.header(HEADER_SOUND_COUNT) <= snapshot.header(HEADER_MAX_SOUNDS));
        assert!(snapshot.header(HEADER_EVENT_COUNT) <= snapshot.header(HEADER_MAX_EVENTS));
    }

    #[test]
    fn paused_flag_round_trips() {
        let config = GameConfig::default();
        let mut game = WavesGame::new(config.clone());
        game.init();
        game.pause();
        let mut snapshot = FrameSnapshot::new(SnapshotLayout::from_config(&config));
        snapshot.write(&game);
        assert_eq!(snapshot.header(HEADER_PAUSED), 1.0);
    }
}
