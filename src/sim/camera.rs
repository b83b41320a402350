//! Vertical follow camera

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SHAKE_DECAY;

/// Camera focus point plus a decaying shake intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World point drawn at the center of the screen
    pub focus: Vec2,
    /// Current shake amplitude (pixels), decays every tick
    pub shake: f32,
    screen: Vec2,
}

impl Camera {
    pub fn new(screen: Vec2) -> Self {
        Self {
            focus: screen * 0.5,
            shake: 0.0,
            screen,
        }
    }

    pub fn set_screen(&mut self, screen: Vec2) {
        self.screen = screen;
    }

    /// Back to the screen center with no shake
    pub fn reset(&mut self) {
        self.focus = self.screen * 0.5;
        self.shake = 0.0;
    }

    /// Track the actor once it climbs above the vertical midpoint.
    /// Horizontal focus never changes.
    pub fn follow(&mut self, actor_y: f32) {
        if actor_y < self.screen.y * 0.5 {
            self.focus.y = actor_y;
        }
    }

    pub fn add_shake(&mut self, intensity: f32) {
        self.shake = self.shake.max(intensity);
    }

    pub fn decay_shake(&mut self) {
        self.shake *= SHAKE_DECAY;
        if self.shake < 0.01 {
            self.shake = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_only_above_midpoint() {
        let mut camera = Camera::new(Vec2::new(400.0, 600.0));
        assert_eq!(camera.focus, Vec2::new(200.0, 300.0));

        camera.follow(450.0);
        assert_eq!(camera.focus, Vec2::new(200.0, 300.0));

        camera.follow(120.0);
        assert_eq!(camera.focus, Vec2::new(200.0, 120.0));

        // Stays put when the actor drops back below the midpoint
        camera.follow(500.0);
        assert_eq!(camera.focus.y, 120.0);
    }

    #[test]
    fn test_shake_decays_to_zero() {
        let mut camera = Camera::new(Vec2::new(400.0, 600.0));
        camera.add_shake(12.0);
        assert_eq!(camera.shake, 12.0);
        for _ in 0..200 {
            camera.decay_shake();
        }
        assert_eq!(camera.shake, 0.0);
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera::new(Vec2::new(400.0, 600.0));
        camera.follow(-200.0);
        camera.add_shake(5.0);
        camera.reset();
        assert_eq!(camera.focus, Vec2::new(200.0, 300.0));
        assert_eq!(camera.shake, 0.0);
    }
}
