//! Translates raw input events into movement intent.
//!
//! Keyboard and touch both land in the same `MovementIntent`, so the
//! state machine never knows which device produced it. Touch controls
//! mirror the shipped mobile layout: a virtual joystick and a dedicated
//! fly button, each bound to at most one touch at a time.

use std::collections::HashSet;

use glam::Vec2;

// DOM keyCodes for the recognized movement keys.
pub const KEY_W: u32 = 87;
pub const KEY_A: u32 = 65;
pub const KEY_S: u32 = 83;
pub const KEY_D: u32 = 68;
pub const KEY_SPACE: u32 = 32;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_ARROW_LEFT: u32 = 37;
pub const KEY_ARROW_UP: u32 = 38;
pub const KEY_ARROW_RIGHT: u32 = 39;
pub const KEY_ARROW_DOWN: u32 = 40;

/// Per-tick movement wishes, device-agnostic.
/// Pairs on the same axis are not mutually exclusive by type; velocity
/// resolution gives forward and left priority when both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub ascend: bool,
}

impl MovementIntent {
    /// True when no directional flag is set.
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right || self.ascend)
    }
}

/// Circular hit-region in screen coordinates for one on-screen control.
/// The host reports region geometry (and re-reports it on resize or
/// orientation change); the mapper never touches the DOM.
#[derive(Debug, Clone, Copy)]
pub struct ControlRegion {
    pub center: Vec2,
    pub radius: f32,
}

impl ControlRegion {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.distance_squared(self.center) <= self.radius * self.radius
    }
}

/// Joystick thresholds in screen pixels.
#[derive(Debug, Clone, Copy)]
pub struct JoystickConfig {
    /// Displacement below which the joystick reads as neutral.
    pub deadzone: f32,
    /// Knob travel limit, visual feedback only.
    pub max_radius: f32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            deadzone: 10.0,
            max_radius: 40.0,
        }
    }
}

/// One bound joystick touch.
#[derive(Debug, Clone, Copy)]
struct JoystickTouch {
    /// Browser touch identifier this state is bound to.
    id: u32,
    /// Region center at touch start.
    origin: Vec2,
    /// Latest touch point.
    current: Vec2,
}

/// Maps keyboard and multi-touch input onto `MovementIntent`.
///
/// Each control tracks its own bound touch identifier; a second touch on
/// an already-active control is ignored until the bound touch ends, and
/// move/end events for unknown identifiers are silently absorbed.
pub struct InputMapper {
    config: JoystickConfig,
    joystick_region: ControlRegion,
    fly_region: ControlRegion,
    held: HashSet<u32>,
    joystick: Option<JoystickTouch>,
    fly_touch: Option<u32>,
    intent: MovementIntent,
}

impl InputMapper {
    pub fn new(config: JoystickConfig) -> Self {
        // Region placeholders; the host positions them before the first
        // touch arrives (desktop hosts may never bother).
        Self {
            config,
            joystick_region: ControlRegion::new(Vec2::ZERO, 0.0),
            fly_region: ControlRegion::new(Vec2::ZERO, 0.0),
            held: HashSet::new(),
            joystick: None,
            fly_touch: None,
            intent: MovementIntent::default(),
        }
    }

    /// Current movement intent, recomputed after every event.
    pub fn intent(&self) -> MovementIntent {
        self.intent
    }

    /// Joystick knob displacement clamped to `max_radius`, for the UI to
    /// position the inner circle. Zero when no joystick touch is bound.
    /// The clamp is presentational; intent thresholds use the raw delta.
    pub fn knob_offset(&self) -> Vec2 {
        match &self.joystick {
            Some(j) => (j.current - j.origin).clamp_length_max(self.config.max_radius),
            None => Vec2::ZERO,
        }
    }

    pub fn joystick_active(&self) -> bool {
        self.joystick.is_some()
    }

    pub fn fly_active(&self) -> bool {
        self.fly_touch.is_some()
    }

    pub fn set_joystick_region(&mut self, region: ControlRegion) {
        self.joystick_region = region;
    }

    pub fn set_fly_region(&mut self, region: ControlRegion) {
        self.fly_region = region;
    }

    // -- Keyboard path --

    pub fn on_key_down(&mut self, key_code: u32) {
        self.held.insert(key_code);
        self.recompute();
    }

    pub fn on_key_up(&mut self, key_code: u32) {
        self.held.remove(&key_code);
        self.recompute();
    }

    // -- Touch path --

    /// Bind a new touch to whichever control region it lands in.
    /// Touches outside both regions are not this mapper's business.
    pub fn on_touch_start(&mut self, id: u32, pos: Vec2) {
        if self.joystick.is_none() && self.joystick_region.contains(pos) {
            self.joystick = Some(JoystickTouch {
                id,
                origin: self.joystick_region.center,
                current: pos,
            });
        } else if self.fly_touch.is_none() && self.fly_region.contains(pos) {
            self.fly_touch = Some(id);
        }
        self.recompute();
    }

    pub fn on_touch_move(&mut self, id: u32, pos: Vec2) {
        if let Some(j) = &mut self.joystick {
            if j.id == id {
                j.current = pos;
                self.recompute();
            }
        }
    }

    /// Handles both touch-end and touch-cancel.
    pub fn on_touch_end(&mut self, id: u32) {
        if self.joystick.as_ref().is_some_and(|j| j.id == id) {
            self.joystick = None;
        }
        if self.fly_touch == Some(id) {
            self.fly_touch = None;
        }
        self.recompute();
    }

    /// Drop all held keys and bound touches (e.g. on window blur).
    pub fn reset(&mut self) {
        self.held.clear();
        self.joystick = None;
        self.fly_touch = None;
        self.recompute();
    }

    fn key_held(&self, code: u32) -> bool {
        self.held.contains(&code)
    }

    /// Rebuild all flags from held keys and touch bindings. Starting from
    /// zero every time keeps stale flags from surviving a device handoff.
    fn recompute(&mut self) {
        let mut intent = MovementIntent {
            forward: self.key_held(KEY_W) || self.key_held(KEY_ARROW_UP),
            backward: self.key_held(KEY_S) || self.key_held(KEY_ARROW_DOWN),
            left: self.key_held(KEY_A) || self.key_held(KEY_ARROW_LEFT),
            right: self.key_held(KEY_D) || self.key_held(KEY_ARROW_RIGHT),
            ascend: self.key_held(KEY_SPACE),
        };

        if let Some(j) = &self.joystick {
            let delta = j.current - j.origin;
            let deadzone = self.config.deadzone;
            if delta.length() > deadzone {
                // Axes are independent; diagonals set two flags.
                if delta.y < -deadzone {
                    intent.forward = true;
                }
                if delta.y > deadzone {
                    intent.backward = true;
                }
                if delta.x < -deadzone {
                    intent.left = true;
                }
                if delta.x > deadzone {
                    intent.right = true;
                }
            }
        }

        if self.fly_touch.is_some() {
            intent.ascend = true;
        }

        self.intent = intent;
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(JoystickConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> InputMapper {
        let mut m = InputMapper::default();
        m.set_joystick_region(ControlRegion::new(Vec2::new(100.0, 100.0), 60.0));
        m.set_fly_region(ControlRegion::new(Vec2::new(300.0, 100.0), 60.0));
        m
    }

    #[test]
    fn keyboard_sets_and_clears_flags() {
        let mut m = mapper();
        m.on_key_down(KEY_W);
        assert!(m.intent().forward);
        m.on_key_up(KEY_W);
        assert!(m.intent().is_idle());
    }

    #[test]
    fn arrow_keys_alias_wasd() {
        let mut m = mapper();
        m.on_key_down(KEY_ARROW_LEFT);
        assert!(m.intent().left);
        m.on_key_down(KEY_ARROW_DOWN);
        assert!(m.intent().backward);
    }

    #[test]
    fn space_sets_ascend() {
        let mut m = mapper();
        m.on_key_down(KEY_SPACE);
        assert!(m.intent().ascend);
        m.on_key_up(KEY_SPACE);
        assert!(!m.intent().ascend);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let mut m = mapper();
        m.on_key_down(13);
        assert!(m.intent().is_idle());
    }

    #[test]
    fn joystick_forward_within_deadzone_math() {
        // origin (100,100), current (100,80), deadzone 10: forward only
        let mut m = mapper();
        m.on_touch_start(7, Vec2::new(100.0, 100.0));
        m.on_touch_move(7, Vec2::new(100.0, 80.0));
        let i = m.intent();
        assert!(i.forward);
        assert!(!i.backward && !i.left && !i.right);
    }

    #[test]
    fn joystick_neutral_at_origin() {
        let mut m = mapper();
        m.on_touch_start(7, Vec2::new(100.0, 100.0));
        // no displacement: all directional flags false
        let i = m.intent();
        assert!(!i.forward && !i.backward && !i.left && !i.right);
    }

    #[test]
    fn joystick_diagonal_sets_both_axes() {
        let mut m = mapper();
        m.on_touch_start(7, Vec2::new(100.0, 100.0));
        m.on_touch_move(7, Vec2::new(130.0, 130.0));
        let i = m.intent();
        assert!(i.backward && i.right);
        assert!(!i.forward && !i.left);
    }

    #[test]
    fn joystick_origin_is_region_center() {
        // Touch lands off-center; displacement measures from the center,
        // so a touch 20px right of center already reads as "right".
        let mut m = mapper();
        m.on_touch_start(7, Vec2::new(120.0, 100.0));
        assert!(m.intent().right);
    }

    #[test]
    fn second_touch_does_not_steal_joystick() {
        let mut m = mapper();
        m.on_touch_start(7, Vec2::new(100.0, 100.0));
        m.on_touch_start(8, Vec2::new(100.0, 100.0));
        // The second touch is ignored: moving it changes nothing,
        // moving the first still works.
        m.on_touch_move(8, Vec2::new(100.0, 20.0));
        assert!(!m.intent().forward);
        m.on_touch_move(7, Vec2::new(100.0, 80.0));
        assert!(m.intent().forward);
    }

    #[test]
    fn release_forces_directional_flags_false() {
        let mut m = mapper();
        m.on_touch_start(7, Vec2::new(100.0, 100.0));
        m.on_touch_move(7, Vec2::new(100.0, 40.0));
        // an unrelated fly-button touch is still down
        m.on_touch_start(9, Vec2::new(300.0, 100.0));
        assert!(m.intent().forward);
        m.on_touch_end(7);
        let i = m.intent();
        assert!(!i.forward && !i.backward && !i.left && !i.right);
        assert!(i.ascend, "fly touch must survive the joystick release");
    }

    #[test]
    fn unknown_touch_ids_are_noops() {
        let mut m = mapper();
        m.on_touch_start(7, Vec2::new(100.0, 100.0));
        m.on_touch_move(99, Vec2::new(100.0, 0.0));
        m.on_touch_end(99);
        assert!(m.joystick_active());
    }

    #[test]
    fn fly_button_binds_and_releases() {
        let mut m = mapper();
        m.on_touch_start(3, Vec2::new(300.0, 100.0));
        assert!(m.intent().ascend);
        // second touch on the active button is ignored
        m.on_touch_start(4, Vec2::new(300.0, 100.0));
        m.on_touch_end(4);
        assert!(m.intent().ascend);
        m.on_touch_end(3);
        assert!(!m.intent().ascend);
    }

    #[test]
    fn touches_outside_regions_are_ignored() {
        let mut m = mapper();
        m.on_touch_start(5, Vec2::new(500.0, 500.0));
        assert!(!m.joystick_active());
        assert!(!m.fly_active());
    }

    #[test]
    fn knob_offset_clamped_but_intent_uses_raw_delta() {
        let mut m = mapper();
        m.on_touch_start(7, Vec2::new(100.0, 100.0));
        m.on_touch_move(7, Vec2::new(100.0, 300.0));
        assert!((m.knob_offset().length() - 40.0).abs() < 1e-4);
        assert!(m.intent().backward);
    }

    #[test]
    fn keyboard_and_touch_combine() {
        let mut m = mapper();
        m.on_key_down(KEY_W);
        m.on_touch_start(3, Vec2::new(300.0, 100.0));
        let i = m.intent();
        assert!(i.forward && i.ascend);
        m.on_touch_end(3);
        assert!(m.intent().forward);
        assert!(!m.intent().ascend);
    }

    #[test]
    fn reset_clears_everything() {
        let mut m = mapper();
        m.on_key_down(KEY_W);
        m.on_touch_start(7, Vec2::new(100.0, 100.0));
        m.reset();
        assert!(m.intent().is_idle());
        assert!(!m.joystick_active());
    }
}
