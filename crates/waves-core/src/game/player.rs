use glam::Vec3;

use crate::api::config::GameConfig;
use crate::input::mapper::MovementIntent;

/// The player-controlled sphere. Position is owned here exclusively and
/// mutated once per step; the camera and renderer only read it.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }

    /// Apply one simulation step: derive velocity from intent, integrate,
    /// and hard-clamp into the movement box.
    ///
    /// On conflicting axis flags, forward wins over backward and left over
    /// right. With `ascend` unset a constant downward bias applies, so the
    /// player sinks until resting on the floor of the box.
    pub fn step(&mut self, intent: MovementIntent, config: &GameConfig, dt: f32) {
        let mut v = Vec3::ZERO;

        if intent.forward {
            v.z = -config.move_speed;
        } else if intent.backward {
            v.z = config.move_speed;
        }

        if intent.left {
            v.x = -config.move_speed;
        } else if intent.right {
            v.x = config.move_speed;
        }

        v.y = if intent.ascend {
            config.ascend_speed
        } else {
            -config.gravity
        };

        self.velocity = v;
        self.position = config.bounds.clamp(self.position + v * dt);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn forward() -> MovementIntent {
        MovementIntent {
            forward: true,
            ..MovementIntent::default()
        }
    }

    #[test]
    fn forward_moves_negative_z() {
        let cfg = GameConfig::default();
        let mut p = Player::new();
        p.position.y = 10.0;
        p.step(forward(), &cfg, DT);
        assert!(p.position.z < 0.0);
        assert_eq!(p.position.x, 0.0);
    }

    #[test]
    fn idle_player_sinks_until_floor() {
        let cfg = GameConfig::default();
        let mut p = Player::new();
        p.position.y = 0.05;
        let mut last_y = p.position.y;
        let mut reached_floor = false;
        for _ in 0..600 {
            p.step(MovementIntent::default(), &cfg, DT);
            if p.position.y == cfg.bounds.min.y {
                reached_floor = true;
                break;
            }
            // strictly decreasing until clamped
            assert!(p.position.y < last_y);
            last_y = p.position.y;
        }
        assert!(reached_floor);
        // never below the floor
        p.step(MovementIntent::default(), &cfg, DT);
        assert_eq!(p.position.y, cfg.bounds.min.y);
    }

    #[test]
    fn ascend_overrides_gravity() {
        let cfg = GameConfig::default();
        let mut p = Player::new();
        let intent = MovementIntent {
            ascend: true,
            ..MovementIntent::default()
        };
        p.step(intent, &cfg, DT);
        assert!(p.position.y > 0.0);
    }

    #[test]
    fn position_stays_inside_bounds() {
        let cfg = GameConfig::default();
        let mut p = Player::new();
        p.position = Vec3::new(49.9, 19.9, -49.9);
        let intent = MovementIntent {
            forward: true,
            right: true,
            ascend: true,
            ..MovementIntent::default()
        };
        for _ in 0..300 {
            p.step(intent, &cfg, DT);
            assert!(cfg.bounds.contains(p.position));
        }
        assert_eq!(p.position.x, cfg.bounds.max.x);
        assert_eq!(p.position.y, cfg.bounds.max.y);
        assert_eq!(p.position.z, cfg.bounds.min.z);
    }

    #[test]
    fn forward_wins_axis_conflict() {
        let cfg = GameConfig::default();
        let mut p = Player::new();
        p.position.y = 10.0;
        let intent = MovementIntent {
            forward: true,
            backward: true,
            left: true,
            right: true,
            ..MovementIntent::default()
        };
        p.step(intent, &cfg, DT);
        assert!(p.position.z < 0.0);
        assert!(p.position.x < 0.0);
    }

    #[test]
    fn speed_matches_per_tick_tuning() {
        let cfg = GameConfig::default();
        let mut p = Player::new();
        p.position.y = 10.0;
        p.step(forward(), &cfg, DT);
        // 0.1 units per 60 Hz tick
        assert!((p.position.z + 0.1).abs() < 1e-5);
    }
}
