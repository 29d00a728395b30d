use glam::Vec3;

/// Third-person follow camera: hovers behind and above the player and
/// looks straight at it. The JS renderer applies eye/target verbatim.
#[derive(Debug, Clone, Copy)]
pub struct FollowCamera {
    /// Eye offset from the player.
    pub offset: Vec3,
    pub eye: Vec3,
    pub target: Vec3,
}

impl FollowCamera {
    pub fn new() -> Self {
        Self {
            offset: Vec3::new(0.0, 2.0, 5.0),
            eye: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::ZERO,
        }
    }

    /// Recompute eye and target for the player's current position.
    pub fn follow(&mut self, player_position: Vec3) {
        self.eye = player_position + self.offset;
        self.target = player_position;
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new()
    }
}
