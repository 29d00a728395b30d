pub mod api;
pub mod assets;
pub mod audio;
pub mod bridge;
pub mod core;
pub mod game;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::types::{GameEvent, SoundCue, StarId};
pub use api::types::{
    EVENT_PAUSED, EVENT_RESTARTED, EVENT_RESUMED, EVENT_STAR_COLLECTED, EVENT_STATE_CHANGED,
};
pub use assets::theme::{StateTheme, ThemeManifest};
pub use audio::{AMBIENT_VOLUME_RATIO, CUE_AMBIENT, CUE_TRANSITION};
pub use bridge::protocol::{FrameSnapshot, SnapshotLayout, PROTOCOL_VERSION};
pub use crate::core::rng::Rng;
pub use crate::core::time::FixedTimestep;
pub use crate::core::world::Aabb;
pub use game::emotion::EmotionalState;
pub use game::player::Player;
pub use game::progress::GameProgress;
pub use game::stars::{Star, StarField};
pub use game::{WavesGame, CUSTOM_PAUSE, CUSTOM_RESTART, CUSTOM_RESUME, CUSTOM_SET_VOLUME};
pub use input::mapper::{ControlRegion, InputMapper, JoystickConfig, MovementIntent};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::camera::FollowCamera;
pub use systems::particles::{DriftMode, ParticleField, ParticleStyle};
