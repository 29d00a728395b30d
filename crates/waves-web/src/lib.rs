//! `#[wasm_bindgen]` exports for the browser host.
//!
//! The runner lives in `thread_local!` storage and every export goes
//! through `with_runner`, keeping the shared mutable state explicit even
//! though the wasm runtime is single-threaded. The JS side registers DOM
//! listeners that forward into the `game_*` input functions and reads the
//! snapshot buffer each frame.

pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use waves_core::{GameConfig, InputEvent};

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = GameRunner::new(GameConfig::default());
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("waves-of-reflection: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Parse and install a theme manifest. Returns false when the JSON is
/// rejected (the current theme stays active).
#[wasm_bindgen]
pub fn game_load_theme(json: &str) -> bool {
    with_runner(|r| r.load_theme(json))
}

// ---- Input forwarding ----

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn game_touch_start(id: u32, x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::TouchStart { id, x, y }));
}

#[wasm_bindgen]
pub fn game_touch_move(id: u32, x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::TouchMove { id, x, y }));
}

/// Touch-end and touch-cancel both land here.
#[wasm_bindgen]
pub fn game_touch_end(id: u32) {
    with_runner(|r| r.push_input(InputEvent::TouchEnd { id }));
}

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// ---- Control region geometry (reported on startup and resize) ----

#[wasm_bindgen]
pub fn game_set_joystick_region(cx: f32, cy: f32, radius: f32) {
    with_runner(|r| r.set_joystick_region(cx, cy, radius));
}

#[wasm_bindgen]
pub fn game_set_fly_region(cx: f32, cy: f32, radius: f32) {
    with_runner(|r| r.set_fly_region(cx, cy, radius));
}

// ---- Snapshot accessors ----

#[wasm_bindgen]
pub fn get_snapshot_ptr() -> *const f32 {
    with_runner(|r| r.snapshot_ptr())
}

#[wasm_bindgen]
pub fn get_snapshot_len() -> u32 {
    with_runner(|r| r.snapshot_len())
}

#[wasm_bindgen]
pub fn get_pose_offset() -> u32 {
    with_runner(|r| r.pose_offset())
}

#[wasm_bindgen]
pub fn get_stars_offset() -> u32 {
    with_runner(|r| r.stars_offset())
}

#[wasm_bindgen]
pub fn get_particles_offset() -> u32 {
    with_runner(|r| r.particles_offset())
}

#[wasm_bindgen]
pub fn get_sounds_offset() -> u32 {
    with_runner(|r| r.sounds_offset())
}

#[wasm_bindgen]
pub fn get_events_offset() -> u32 {
    with_runner(|r| r.events_offset())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_stars() -> u32 {
    with_runner(|r| r.max_stars())
}

#[wasm_bindgen]
pub fn get_max_particles() -> u32 {
    with_runner(|r| r.max_particles())
}

#[wasm_bindgen]
pub fn get_max_sounds() -> u32 {
    with_runner(|r| r.max_sounds())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

// ---- Direct state reads for the DOM layer ----

#[wasm_bindgen]
pub fn get_state_index() -> u32 {
    with_runner(|r| r.state_index())
}

/// Lowercase state name, used for the body CSS class.
#[wasm_bindgen]
pub fn get_state_name() -> String {
    with_runner(|r| r.state_name())
}

#[wasm_bindgen]
pub fn get_stars_collected() -> u32 {
    with_runner(|r| r.stars_collected())
}

#[wasm_bindgen]
pub fn get_stars_needed() -> u32 {
    with_runner(|r| r.stars_needed())
}

#[wasm_bindgen]
pub fn get_master_volume() -> f32 {
    with_runner(|r| r.master_volume())
}

#[wasm_bindgen]
pub fn get_paused() -> bool {
    with_runner(|r| r.is_paused())
}
