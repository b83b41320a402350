//! Rising lava

use super::state::HazardFront;
use crate::tuning::RisePolicy;

impl HazardFront {
    /// Start fully below the visible playfield
    pub fn reset(&mut self, screen_height: f32) {
        self.y = screen_height;
    }

    /// Move the front up by `rate(survival_time) * dt`. Never moves down.
    pub fn advance(&mut self, policy: RisePolicy, rise_speed: f32, survival_time: f32, dt: f32) {
        let rate = policy.rate(rise_speed, survival_time);
        if rate.is_finite() && rate > 0.0 {
            self.y -= rate * dt;
        }
    }
}
