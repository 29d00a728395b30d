use glam::Vec2;
use waves_core::{
    ControlRegion, FixedTimestep, FrameSnapshot, GameConfig, InputEvent, InputQueue,
    SnapshotLayout, ThemeManifest, WavesGame,
};

/// Wires the game core to the browser's frame loop.
///
/// The JS layer pushes input events between frames and calls `tick(dt)`
/// from `requestAnimationFrame`; the runner drains the queue into the
/// game, runs the fixed steps, and rewrites the snapshot buffer the
/// renderer reads.
pub struct GameRunner {
    game: WavesGame,
    input: InputQueue,
    timestep: FixedTimestep,
    snapshot: FrameSnapshot,
    initialized: bool,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        let snapshot = FrameSnapshot::new(SnapshotLayout::from_config(&config));
        Self {
            game: WavesGame::new(config),
            input: InputQueue::new(),
            timestep,
            snapshot,
            initialized: false,
        }
    }

    /// Initialize the game and publish the first snapshot, so the opening
    /// sound cues are readable before the first tick. Call once.
    pub fn init(&mut self) {
        self.game.init();
        self.snapshot.write(&self.game);
        self.initialized = true;
    }

    /// Push an input event into the queue (called from JS via
    /// wasm-bindgen).
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Swap in a theme manifest parsed from JSON. Returns false (and keeps
    /// the current theme) when the JSON is rejected.
    pub fn load_theme(&mut self, json: &str) -> bool {
        match ThemeManifest::from_json(json) {
            Ok(theme) => {
                self.game.set_theme(theme);
                true
            }
            Err(err) => {
                log::error!("theme manifest rejected: {}", err);
                false
            }
        }
    }

    /// Report the joystick container's screen geometry. The host calls
    /// this at startup and again on resize or orientation change.
    pub fn set_joystick_region(&mut self, cx: f32, cy: f32, radius: f32) {
        self.game
            .set_joystick_region(ControlRegion::new(Vec2::new(cx, cy), radius));
    }

    /// Report the fly button's screen geometry.
    pub fn set_fly_region(&mut self, cx: f32, cy: f32, radius: f32) {
        self.game
            .set_fly_region(ControlRegion::new(Vec2::new(cx, cy), radius));
    }

    /// Run one frame: drain input, run the due fixed steps, rebuild the
    /// snapshot.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data (sound cues, game events)
        self.game.clear_frame_data();

        for event in self.input.drain() {
            self.game.handle_event(event);
        }

        let steps = self.timestep.advance(dt);
        for _ in 0..steps {
            self.game.step(self.timestep.step());
        }

        self.snapshot.write(&self.game);
    }

    // ---- Snapshot accessors for SharedArrayBuffer reads ----

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.snapshot.as_ptr()
    }

    pub fn snapshot_len(&self) -> u32 {
        self.snapshot.len() as u32
    }

    pub fn pose_offset(&self) -> u32 {
        self.snapshot.layout().pose_offset as u32
    }

    pub fn stars_offset(&self) -> u32 {
        self.snapshot.layout().stars_offset as u32
    }

    pub fn particles_offset(&self) -> u32 {
        self.snapshot.layout().particles_offset as u32
    }

    pub fn sounds_offset(&self) -> u32 {
        self.snapshot.layout().sounds_offset as u32
    }

    pub fn events_offset(&self) -> u32 {
        self.snapshot.layout().events_offset as u32
    }

    // ---- Capacity accessors (read by TypeScript at startup) ----

    pub fn max_stars(&self) -> u32 {
        self.snapshot.layout().max_stars as u32
    }

    pub fn max_particles(&self) -> u32 {
        self.snapshot.layout().max_particles as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.snapshot.layout().max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.snapshot.layout().max_events as u32
    }

    // ---- Direct state reads for the DOM layer ----

    pub fn state_index(&self) -> u32 {
        self.game.state().index() as u32
    }

    pub fn state_name(&self) -> String {
        self.game.state().name().to_string()
    }

    pub fn stars_collected(&self) -> u32 {
        self.game.progress().stars_collected()
    }

    pub fn stars_needed(&self) -> u32 {
        self.game.progress().stars_needed()
    }

    pub fn master_volume(&self) -> f32 {
        self.game.master_volume()
    }

    pub fn is_paused(&self) -> bool {
        self.game.paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waves_core::input::mapper::KEY_W;
    use waves_core::bridge::protocol::{HEADER_FRAME_COUNTER, HEADER_SOUND_COUNT};

    #[test]
    fn init_publishes_opening_snapshot() {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.init();
        // opening cues (state track + ambient) are visible pre-tick
        assert_eq!(runner.snapshot.header(HEADER_SOUND_COUNT), 2.0);
    }

    #[test]
    fn tick_before_init_is_a_noop() {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.snapshot.header(HEADER_FRAME_COUNTER), 0.0);
    }

    #[test]
    fn queued_input_moves_the_player() {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.init();
        runner.push_input(InputEvent::KeyDown { key_code: KEY_W });
        runner.tick(1.0 / 60.0);
        assert!(runner.game.player().position.z < 0.0);
    }

    #[test]
    fn small_frame_deltas_accumulate() {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.init();
        runner.push_input(InputEvent::KeyDown { key_code: KEY_W });
        // half a step: no movement yet
        runner.tick(0.008);
        assert_eq!(runner.game.player().position.z, 0.0);
        // the carry tips over into one step
        runner.tick(0.010);
        assert!(runner.game.player().position.z < 0.0);
    }

    const CUSTOM_THEME: &str = r##"{
        "states": [
            { "name": "joy", "track": "Sunrise", "color": "#ff0000", "drift": "up" },
            { "name": "nostalgia", "track": "Tape", "color": "#00ff00", "drift": "horizontal" },
            { "name": "sorrow", "track": "Rain", "color": "#0000ff", "drift": "down" },
            { "name": "routine", "track": "Clock", "color": "#808080", "drift": "orbit" }
        ],
        "ambient_track": "Hum",
        "transition_track": "Chime"
    }"##;

    #[test]
    fn bad_theme_json_is_rejected() {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.init();
        assert!(!runner.load_theme("not a manifest"));
        assert!(runner.load_theme(CUSTOM_THEME));
        let joy = runner.game.theme().track_for(waves_core::EmotionalState::Joy);
        assert_eq!(joy, "Sunrise");
    }

    #[test]
    fn touch_regions_route_through_to_the_mapper() {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.init();
        runner.set_joystick_region(100.0, 100.0, 60.0);
        runner.push_input(InputEvent::TouchStart { id: 1, x: 100.0, y: 100.0 });
        runner.push_input(InputEvent::TouchMove { id: 1, x: 100.0, y: 60.0 });
        runner.tick(1.0 / 60.0);
        assert!(runner.game.player().position.z < 0.0);
    }
}
