use glam::Vec3;

use crate::core::rng::Rng;

/// Axis-aligned box in world space.
/// Used for the player's movement bounds, the star spawn volume, and the
/// ambient particle volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Clamp a point component-wise into the box. Hard clamp, not a bounce.
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// Whether a point lies inside the box (inclusive).
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Uniform random point inside the box.
    pub fn random_point(&self, rng: &mut Rng) -> Vec3 {
        Vec3::new(
            rng.next_range(self.min.x, self.max.x),
            rng.next_range(self.min.y, self.max.y),
            rng.next_range(self.min.z, self.max.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn clamp_pulls_point_inside() {
        let b = unit_box();
        assert_eq!(b.clamp(Vec3::new(5.0, 0.5, -9.0)), Vec3::new(1.0, 0.5, -1.0));
    }

    #[test]
    fn clamp_leaves_interior_untouched() {
        let b = unit_box();
        let p = Vec3::new(0.2, -0.3, 0.9);
        assert_eq!(b.clamp(p), p);
    }

    #[test]
    fn contains_is_inclusive() {
        let b = unit_box();
        assert!(b.contains(Vec3::splat(1.0)));
        assert!(b.contains(Vec3::ZERO));
        assert!(!b.contains(Vec3::new(1.01, 0.0, 0.0)));
    }

    #[test]
    fn random_point_stays_inside() {
        let b = Aabb::new(Vec3::new(-20.0, -5.0, -20.0), Vec3::new(20.0, 15.0, 20.0));
        let mut rng = Rng::new(42);
        for _ in 0..200 {
            assert!(b.contains(b.random_point(&mut rng)));
        }
    }
}
