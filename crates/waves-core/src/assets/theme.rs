//! Theme manifest: which track, color, and particle weather each
//! emotional state gets. Loaded from JSON at runtime so the soundtrack
//! can be re-skinned without rebuilding the wasm module; the built-in
//! default matches the shipped game.

use serde::{Deserialize, Serialize};

use crate::api::types::SoundCue;
use crate::audio::{CUE_AMBIENT, CUE_TRANSITION};
use crate::game::emotion::EmotionalState;
use crate::systems::particles::{DriftMode, ParticleStyle};

/// Styling and track assignment for one emotional state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTheme {
    /// State name; must match `EmotionalState::name`.
    pub name: String,
    /// Track name the JS sound manager maps to an audio element.
    pub track: String,
    /// Star/particle color as a `#rrggbb` hex string.
    pub color: String,
    /// Particle drift direction.
    pub drift: DriftMode,
    /// Particle drift speed multiplier (default: 1.0).
    #[serde(default = "default_speed")]
    pub speed: f32,
}

/// Full theme: four state entries in transition order plus the shared
/// tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeManifest {
    pub states: Vec<StateTheme>,
    pub ambient_track: String,
    pub transition_track: String,
}

fn default_speed() -> f32 {
    1.0
}

impl ThemeManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The entry for a state. Falls back to the built-in default when the
    /// manifest is missing an entry; a short manifest is absorbed, not an
    /// error.
    pub fn state_theme(&self, state: EmotionalState) -> StateTheme {
        self.states
            .get(state.index())
            .cloned()
            .unwrap_or_else(|| default_state_theme(state))
    }

    /// Particle styling for a state. Unparseable colors fall back to
    /// white rather than failing the frame.
    pub fn style_for(&self, state: EmotionalState) -> ParticleStyle {
        let theme = self.state_theme(state);
        ParticleStyle {
            color: parse_hex_color(&theme.color).unwrap_or([1.0, 1.0, 1.0]),
            drift: theme.drift,
            speed: theme.speed,
        }
    }

    /// Track name for a state's own cue.
    pub fn track_for(&self, state: EmotionalState) -> String {
        self.state_theme(state).track
    }

    /// Resolve any sound cue to its track name. The JS sound manager uses
    /// this mapping to wire cues onto audio elements.
    pub fn track_for_cue(&self, cue: SoundCue) -> Option<String> {
        if cue == CUE_AMBIENT {
            return Some(self.ambient_track.clone());
        }
        if cue == CUE_TRANSITION {
            return Some(self.transition_track.clone());
        }
        if (cue.0 as usize) < EmotionalState::COUNT {
            return Some(self.track_for(EmotionalState::from_index(cue.0 as usize)));
        }
        None
    }
}

impl Default for ThemeManifest {
    fn default() -> Self {
        Self {
            states: EmotionalState::ALL.iter().map(|s| default_state_theme(*s)).collect(),
            ambient_track: "Nightfade".to_string(),
            transition_track: "Ready For It".to_string(),
        }
    }
}

fn default_state_theme(state: EmotionalState) -> StateTheme {
    let (track, color, drift, speed) = match state {
        EmotionalState::Joy => ("Saturday", "#ffcc00", DriftMode::Up, 2.0),
        EmotionalState::Nostalgia => ("Waves", "#66aaff", DriftMode::Horizontal, 1.0),
        EmotionalState::Sorrow => ("New Moon", "#3344aa", DriftMode::Down, 1.5),
        EmotionalState::Routine => ("Windows", "#aaaaaa", DriftMode::Orbit, 1.0),
    };
    StateTheme {
        name: state.name().to_string(),
        track: track.to_string(),
        color: color.to_string(),
        drift,
        speed,
    }
}

/// Parse a `#rrggbb` hex string into linear RGB components.
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
