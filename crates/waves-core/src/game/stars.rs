use glam::Vec3;

use crate::api::types::StarId;
use crate::core::rng::Rng;
use crate::core::world::Aabb;

/// A collectible star. Lives from batch spawn until collected, or until
/// the batch is discarded wholesale at a state transition.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub id: StarId,
    pub position: Vec3,
}

/// Flat storage for the live star batch.
/// Small fixed batch sizes; linear scans are fine.
pub struct StarField {
    stars: Vec<Star>,
    next_id: u32,
}

impl StarField {
    pub fn new() -> Self {
        Self {
            stars: Vec::new(),
            next_id: 1,
        }
    }

    /// Discard all live stars and spawn a fresh batch at random positions
    /// inside the spawn volume.
    pub fn respawn(&mut self, count: u32, volume: &Aabb, rng: &mut Rng) {
        self.stars.clear();
        for _ in 0..count {
            let id = StarId(self.next_id);
            self.next_id += 1;
            self.stars.push(Star {
                id,
                position: volume.random_point(rng),
            });
        }
    }

    /// Remove and return the star closest to `center` among those within
    /// `radius`. Callers collect one star at a time so that a state
    /// transition can atomically discard whatever remains.
    pub fn collect_nearest_within(&mut self, center: Vec3, radius: f32) -> Option<Star> {
        let mut best: Option<(usize, f32)> = None;
        for (i, star) in self.stars.iter().enumerate() {
            let d = star.position.distance(center);
            if d < radius && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| self.stars.swap_remove(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn clear(&mut self) {
        self.stars.clear();
    }
}

impl Default for StarField {
    fn default() -> Self {
        Self::new()
    }
}
