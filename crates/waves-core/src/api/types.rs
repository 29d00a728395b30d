use bytemuck::{Pod, Zeroable};

/// Unique identifier for a live star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarId(pub u32);

/// A sound cue emitted by the game logic.
/// The numeric value maps to a track in the JS sound manager; see the
/// `audio` module for the id assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundCue(pub u32);

/// A game event communicated from Rust to the UI layer via the frame
/// snapshot. Generic container: `kind` identifies the event, `a/b/c`
/// carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}

/// A star was collected. `a` = stars collected, `b` = stars needed.
pub const EVENT_STAR_COLLECTED: f32 = 1.0;
/// The emotional state advanced. `a` = new state index.
pub const EVENT_STATE_CHANGED: f32 = 2.0;
/// The game was paused.
pub const EVENT_PAUSED: f32 = 3.0;
/// The game was resumed.
pub const EVENT_RESUMED: f32 = 4.0;
/// The game was restarted from the first state.
pub const EVENT_RESTARTED: f32 = 5.0;
