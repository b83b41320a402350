//! Gravity integration and ground contact
//!
//! Platforms are one-way: the body passes through them on the way up and
//! only lands when its feet cross a platform top while descending.

use super::state::{Body, Platform};

/// Slack allowed between the previous foot position and a platform top
/// (absorbs float drift while standing)
const GROUND_EPSILON: f32 = 0.5;

impl Body {
    /// Integrate one step: `v_y += G*dt`, then move by the average of the
    /// old and new velocity. Jump apexes match `F²/2G` at every step boundary.
    pub fn apply_gravity_step(&mut self, gravity: f32, dt: f32) {
        self.prev_pos = self.pos;
        let old_vel = self.vel;
        self.vel.y += gravity * dt;
        self.pos += (old_vel + self.vel) * 0.5 * dt;
    }

    /// Snap onto the platform whose top the feet crossed this step.
    ///
    /// Returns true only when the body goes from airborne to grounded
    /// (the "landed" transition).
    pub fn resolve_ground_collision(&mut self, platforms: &[Platform]) -> bool {
        let was_grounded = self.grounded;
        let half_height = self.size.y * 0.5;

        let mut support: Option<f32> = None;
        if self.vel.y >= 0.0 {
            let prev_bottom = self.prev_pos.y + half_height;
            let bottom = self.bottom();
            let bounds = self.bounds();

            for platform in platforms {
                let top = platform.top();
                if prev_bottom <= top + GROUND_EPSILON
                    && bottom >= top
                    && bounds.overlaps_x(&platform.bounds())
                {
                    // The first top crossed while falling is the highest one
                    support = Some(support.map_or(top, |best: f32| best.min(top)));
                }
            }
        }

        match support {
            Some(top) => {
                self.pos.y = top - half_height;
                self.vel.y = 0.0;
                self.grounded = true;
            }
            None => self.grounded = false,
        }

        !was_grounded && self.grounded
    }

    /// Launch upward with the given impulse
    pub fn jump(&mut self, force: f32) {
        self.vel.y = -force;
        self.grounded = false;
    }

    /// Direct horizontal displacement (arcade control, no acceleration)
    #[inline]
    pub fn move_x(&mut self, dx: f32) {
        self.pos.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn platform_at(x: f32, y: f32) -> Platform {
        Platform {
            id: 1,
            pos: Vec2::new(x, y),
            width: 100.0,
            height: PLATFORM_HEIGHT,
        }
    }

    fn drop_onto(body: &mut Body, platforms: &[Platform]) -> usize {
        let mut landings = 0;
        for _ in 0..240 {
            body.apply_gravity_step(GRAVITY, SIM_DT);
            if body.resolve_ground_collision(platforms) {
                landings += 1;
            }
        }
        landings
    }

    #[test]
    fn test_gravity_integration() {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(16.0));
        body.apply_gravity_step(640.0, 0.5);
        assert_eq!(body.vel.y, 320.0);
        assert_eq!(body.pos.y, 80.0);
        assert_eq!(body.prev_pos, Vec2::ZERO);
    }

    #[test]
    fn test_lands_on_platform_once() {
        let platforms = [platform_at(0.0, 100.0)];
        let mut body = Body::new(Vec2::new(50.0, 50.0), Vec2::splat(16.0));

        let landings = drop_onto(&mut body, &platforms);
        assert_eq!(landings, 1, "landed event must fire once per contact");
        assert!(body.grounded);
        assert_eq!(body.vel.y, 0.0);
        assert!((body.bottom() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_fast_fall_does_not_tunnel() {
        let platforms = [platform_at(0.0, 100.0)];
        let mut body = Body::new(Vec2::new(50.0, 0.0), Vec2::splat(16.0));
        body.vel.y = 5000.0;
        body.apply_gravity_step(GRAVITY, 0.1);
        assert!(body.resolve_ground_collision(&platforms));
        assert!((body.bottom() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_misses_platform_horizontally() {
        let platforms = [platform_at(200.0, 100.0)];
        let mut body = Body::new(Vec2::new(50.0, 50.0), Vec2::splat(16.0));
        assert_eq!(drop_onto(&mut body, &platforms), 0);
        assert!(!body.grounded);
        assert!(body.pos.y > 100.0);
    }

    #[test]
    fn test_passes_through_from_below() {
        let platforms = [platform_at(0.0, 100.0)];
        let mut body = Body::new(Vec2::new(50.0, 130.0), Vec2::splat(16.0));
        body.jump(JUMP_FORCE);
        body.apply_gravity_step(GRAVITY, 0.1);
        assert!(!body.resolve_ground_collision(&platforms));
        assert!(body.pos.y < 110.0);
    }

    #[test]
    fn test_lands_on_highest_crossed_platform() {
        let platforms = [platform_at(0.0, 200.0), platform_at(0.0, 120.0)];
        let mut body = Body::new(Vec2::new(50.0, 100.0), Vec2::splat(16.0));
        body.vel.y = 3000.0;
        body.apply_gravity_step(GRAVITY, 0.1);
        assert!(body.resolve_ground_collision(&platforms));
        assert!((body.bottom() - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_walking_off_edge_clears_grounded() {
        let platforms = [platform_at(0.0, 100.0)];
        let mut body = Body::new(Vec2::new(50.0, 50.0), Vec2::splat(16.0));
        drop_onto(&mut body, &platforms);
        assert!(body.grounded);

        body.move_x(200.0);
        body.apply_gravity_step(GRAVITY, SIM_DT);
        assert!(!body.resolve_ground_collision(&platforms));
        assert!(!body.grounded);
    }

    #[test]
    fn test_stepped_apex_matches_closed_form() {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(16.0));
        body.jump(JUMP_FORCE);
        let mut highest = 0.0f32;
        for _ in 0..120 {
            body.apply_gravity_step(GRAVITY, SIM_DT);
            highest = highest.min(body.pos.y);
        }
        let expected = crate::stepped_jump_apex(JUMP_FORCE, GRAVITY, SIM_DT);
        assert!((-highest - expected).abs() < 1e-2, "rise {} vs {}", -highest, expected);
        assert!(-highest >= PLATFORM_SPACING);
    }

    #[test]
    fn test_jump_clears_grounded() {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(16.0));
        body.grounded = true;
        body.jump(300.0);
        assert_eq!(body.vel.y, -300.0);
        assert!(!body.grounded);
    }
}
