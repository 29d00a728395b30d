//! Audio cue selection.
//!
//! The core never touches audio elements; it only decides which track
//! should play and emits numeric cues the JS sound manager resolves
//! through the theme manifest. Cues 0 through 3 are the four state
//! tracks in transition order, then the ambient bed and the transition
//! sting.

use crate::api::types::SoundCue;
use crate::game::emotion::EmotionalState;

/// Ambient bed track, played under every state track.
pub const CUE_AMBIENT: SoundCue = SoundCue(4);
/// One-shot sting played when the emotional state advances.
pub const CUE_TRANSITION: SoundCue = SoundCue(5);

/// The ambient bed plays at this fraction of the master volume.
pub const AMBIENT_VOLUME_RATIO: f32 = 0.3;

/// Cue id for a state's own track.
pub fn state_track_cue(state: EmotionalState) -> SoundCue {
    SoundCue(state.index() as u32)
}

/// Cues emitted when the game starts (or restarts): the current state's
/// track plus the ambient bed.
pub fn start_cues(state: EmotionalState) -> [SoundCue; 2] {
    [state_track_cue(state), CUE_AMBIENT]
}

/// Cues emitted at a state transition: the sting first, then the new
/// state's track.
pub fn transition_cues(next: EmotionalState) -> [SoundCue; 2] {
    [CUE_TRANSITION, state_track_cue(next)]
}
