//! The game state machine.
//!
//! Owns the emotional-state cycle, the star batch, and the player, and
//! advances them once per fixed step. Input arrives through
//! `handle_event`; the presentation layer reads results back through the
//! frame snapshot and the sound/event queues.

pub mod emotion;
pub mod player;
pub mod progress;
pub mod stars;

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::{
    GameEvent, SoundCue, EVENT_PAUSED, EVENT_RESTARTED, EVENT_RESUMED, EVENT_STAR_COLLECTED,
    EVENT_STATE_CHANGED,
};
use crate::assets::theme::ThemeManifest;
use crate::audio;
use crate::core::rng::Rng;
use crate::input::mapper::{ControlRegion, InputMapper, MovementIntent, KEY_ESCAPE};
use crate::input::queue::InputEvent;
use crate::systems::camera::FollowCamera;
use crate::systems::particles::ParticleField;

use emotion::EmotionalState;
use player::Player;
use progress::GameProgress;
use stars::StarField;

// UI command kinds (UI layer -> Rust).
pub const CUSTOM_PAUSE: u32 = 1;
pub const CUSTOM_RESUME: u32 = 2;
pub const CUSTOM_RESTART: u32 = 3;
pub const CUSTOM_SET_VOLUME: u32 = 4;

/// One full game: input mapping, movement, star collection, and the
/// emotional-state cycle. Constructed explicitly by the host entry point;
/// there is no ambient global instance.
pub struct WavesGame {
    config: GameConfig,
    theme: ThemeManifest,
    mapper: InputMapper,
    player: Player,
    stars: StarField,
    particles: ParticleField,
    progress: GameProgress,
    state: EmotionalState,
    camera: FollowCamera,
    rng: Rng,
    paused: bool,
    initialized: bool,
    sounds: Vec<SoundCue>,
    events: Vec<GameEvent>,
}

impl WavesGame {
    pub fn new(config: GameConfig) -> Self {
        let mapper = InputMapper::new(config.joystick);
        let progress = GameProgress::new(config.stars_needed);
        let rng = Rng::new(config.rng_seed);
        Self {
            config,
            theme: ThemeManifest::default(),
            mapper,
            player: Player::new(),
            stars: StarField::new(),
            particles: ParticleField::new(),
            progress,
            state: EmotionalState::default(),
            camera: FollowCamera::new(),
            rng,
            paused: false,
            initialized: false,
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Replace the theme manifest. Restyles the live particle field when
    /// called after init so a late-loaded theme takes effect immediately.
    pub fn set_theme(&mut self, theme: ThemeManifest) {
        self.theme = theme;
        if self.initialized {
            self.restyle_particles();
        }
    }

    /// Spawn the first star batch and particle field and queue the
    /// opening audio cues. Call once before stepping.
    pub fn init(&mut self) {
        self.initialized = true;
        self.respawn_stars();
        self.restyle_particles();
        self.camera.follow(self.player.position);
        for cue in audio::start_cues(self.state) {
            self.emit_sound(cue);
        }
        log::info!(
            "journey begins in the {} state, {} stars to find",
            self.state.name(),
            self.config.stars_needed
        );
    }

    /// Feed one input event into the game. Handlers are short and never
    /// fail; unknown touches and keys are absorbed silently.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key_code } => {
                if key_code == KEY_ESCAPE {
                    self.toggle_pause();
                }
                self.mapper.on_key_down(key_code);
            }
            InputEvent::KeyUp { key_code } => self.mapper.on_key_up(key_code),
            InputEvent::TouchStart { id, x, y } => {
                self.mapper.on_touch_start(id, Vec2::new(x, y))
            }
            InputEvent::TouchMove { id, x, y } => self.mapper.on_touch_move(id, Vec2::new(x, y)),
            InputEvent::TouchEnd { id } => self.mapper.on_touch_end(id),
            InputEvent::Custom { kind, a, .. } => self.handle_command(kind, a),
        }
    }

    fn handle_command(&mut self, kind: u32, a: f32) {
        match kind {
            CUSTOM_PAUSE => self.pause(),
            CUSTOM_RESUME => self.resume(),
            CUSTOM_RESTART => self.restart(),
            CUSTOM_SET_VOLUME => self.set_master_volume(a),
            _ => log::debug!("ignoring unknown UI command {}", kind),
        }
    }

    /// One fixed simulation step: movement, camera, particles, then star
    /// collection. Non-positive or non-finite `dt` is a no-op tick; the
    /// loop runs every animation frame and must never fail.
    pub fn step(&mut self, dt: f32) {
        if !self.initialized || self.paused || !(dt.is_finite() && dt > 0.0) {
            return;
        }
        let intent = self.mapper.intent();
        self.player.step(intent, &self.config, dt);
        self.camera.follow(self.player.position);
        let volume = self.config.particle_volume;
        self.particles.tick(dt, &volume, &mut self.rng);
        self.check_collisions();
    }

    /// Collect every star within the pickup radius, one at a time. If a
    /// collection completes the batch, the transition fires immediately
    /// and whatever remains in range is discarded with the rest.
    fn check_collisions(&mut self) {
        while let Some(star) = self
            .stars
            .collect_nearest_within(self.player.position, self.config.pickup_radius)
        {
            log::debug!("collected star {:?}", star.id);
            let threshold_reached = self.progress.record_star();
            self.emit_event(GameEvent {
                kind: EVENT_STAR_COLLECTED,
                a: self.progress.stars_collected() as f32,
                b: self.progress.stars_needed() as f32,
                c: 0.0,
            });
            if threshold_reached {
                self.advance_state();
                break;
            }
        }
    }

    /// Advance to the next emotional state: reset progress, replace the
    /// star batch and particle weather, and queue the audio cues. The
    /// collaborator-facing event is emitted before this returns.
    pub fn advance_state(&mut self) {
        self.state = self.state.next();
        self.progress.reset();
        self.respawn_stars();
        self.restyle_particles();
        for cue in audio::transition_cues(self.state) {
            self.emit_sound(cue);
        }
        self.emit_event(GameEvent {
            kind: EVENT_STATE_CHANGED,
            a: self.state.index() as f32,
            b: 0.0,
            c: 0.0,
        });
        log::info!("drifting into the {} state", self.state.name());
    }

    /// Reset to the first state with a fresh player, star batch, and
    /// particle field. Also resumes a paused game.
    pub fn restart(&mut self) {
        self.state = EmotionalState::default();
        self.progress.reset();
        self.player = Player::new();
        self.respawn_stars();
        self.restyle_particles();
        self.camera.follow(self.player.position);
        self.paused = false;
        for cue in audio::start_cues(self.state) {
            self.emit_sound(cue);
        }
        self.emit_event(GameEvent {
            kind: EVENT_RESTARTED,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        log::info!("journey restarted");
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.emit_event(GameEvent {
                kind: EVENT_PAUSED,
                a: 0.0,
                b: 0.0,
                c: 0.0,
            });
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.emit_event(GameEvent {
                kind: EVENT_RESUMED,
                a: 0.0,
                b: 0.0,
                c: 0.0,
            });
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn set_master_volume(&mut self, volume: f32) {
        if volume.is_finite() {
            self.config.master_volume = volume.clamp(0.0, 1.0);
        }
    }

    /// Clear the per-frame sound and event queues. The runner calls this
    /// at the start of every frame, after the UI has had a frame to read
    /// them.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    // -- Control region plumbing --

    pub fn set_joystick_region(&mut self, region: ControlRegion) {
        self.mapper.set_joystick_region(region);
    }

    pub fn set_fly_region(&mut self, region: ControlRegion) {
        self.mapper.set_fly_region(region);
    }

    // -- Read access for the snapshot builder and the UI --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn theme(&self) -> &ThemeManifest {
        &self.theme
    }

    pub fn state(&self) -> EmotionalState {
        self.state
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn intent(&self) -> MovementIntent {
        self.mapper.intent()
    }

    pub fn knob_offset(&self) -> Vec2 {
        self.mapper.knob_offset()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn master_volume(&self) -> f32 {
        self.config.master_volume
    }

    pub fn sounds(&self) -> &[SoundCue] {
        &self.sounds
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    fn respawn_stars(&mut self) {
        let volume = self.config.star_spawn;
        self.stars
            .respawn(self.config.stars_needed, &volume, &mut self.rng);
    }

    fn restyle_particles(&mut self) {
        let style = self.theme.style_for(self.state);
        let volume = self.config.particle_volume;
        self.particles
            .restyle(style, self.config.particle_count, &volume, &mut self.rng);
    }

    fn emit_sound(&mut self, cue: SoundCue) {
        if self.sounds.len() < self.config.max_sounds {
            self.sounds.push(cue);
        }
    }

    fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.config.max_events {
            self.events.push(event);
        }
    }
}
