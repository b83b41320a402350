//! Lava Climb - a vertical platformer game core
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, level generation, game state)
//! - `platform`: Device input abstraction (keyboard/pointer/touch → logical commands)
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{RisePolicy, SpawnPlatform, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the driver will feed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 640.0;
    /// Horizontal run speed (pixels/s)
    pub const SPEED: f32 = 120.0;
    /// Primary jump impulse (pixels/s)
    pub const JUMP_FORCE: f32 = 300.0;
    /// Airborne jump impulse, weaker than the primary jump
    pub const DOUBLE_JUMP_FORCE: f32 = 260.0;

    /// Actor bounding box (centered on its position)
    pub const ACTOR_WIDTH: f32 = 16.0;
    pub const ACTOR_HEIGHT: f32 = 16.0;
    /// Spawn height above the chosen platform's top edge
    pub const SPAWN_HEIGHT: f32 = 50.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_WIDTH_JITTER: f32 = 50.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    pub const NUM_PLATFORMS: usize = 15;
    pub const PLATFORM_SPACING: f32 = 70.0;
    /// Distance from the bottom of the screen to the first platform
    pub const PLATFORM_BASE_OFFSET: f32 = 100.0;
    /// Horizontal margin kept clear at both screen edges
    pub const SCREEN_MARGIN: f32 = 50.0;

    /// Coin defaults
    pub const NUM_COINS: usize = 15;
    pub const COIN_SIZE: f32 = 8.0;
    pub const COIN_POINTS: u64 = 10;

    /// Lava rise speed (pixels/s)
    pub const LAVA_RISE_SPEED: f32 = 30.0;
    /// Exponential rise policy: rate = LAVA_RISE_SPEED * BASE^(t * SCALE)
    pub const LAVA_ACCEL_BASE: f32 = 2.0;
    pub const LAVA_ACCEL_SCALE: f32 = 1.0 / 60.0;

    /// Screen shake intensity on death
    pub const DEATH_SHAKE: f32 = 12.0;
    /// Per-tick multiplicative shake decay
    pub const SHAKE_DECAY: f32 = 0.9;
}

/// Wrap a horizontal coordinate to the opposite screen edge.
///
/// Only values strictly outside `[0, width]` are moved.
#[inline]
pub fn wrap_x(x: f32, width: f32) -> f32 {
    if x < 0.0 {
        width
    } else if x > width {
        0.0
    } else {
        x
    }
}

/// Maximum height reached by a jump with the given launch speed
#[inline]
pub fn jump_apex(force: f32, gravity: f32) -> f32 {
    if gravity <= 0.0 {
        return f32::INFINITY;
    }
    force * force / (2.0 * gravity)
}

/// Highest rise sampled by a fixed-`dt` integrator that moves by the average
/// of old and new velocity. Those samples lie exactly on the continuous
/// parabola, so the peak is the best step boundary next to `force / gravity`.
pub fn stepped_jump_apex(force: f32, gravity: f32, dt: f32) -> f32 {
    if gravity <= 0.0 {
        return f32::INFINITY;
    }
    if force <= 0.0 || !(dt.is_finite() && dt > 0.0) {
        return jump_apex(force.max(0.0), gravity);
    }
    let rise = |steps: f32| {
        let t = steps * dt;
        force * t - 0.5 * gravity * t * t
    };
    let steps = (force / gravity / dt).floor();
    rise(steps).max(rise(steps + 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_x() {
        assert_eq!(wrap_x(-1.0, 400.0), 400.0);
        assert_eq!(wrap_x(401.0, 400.0), 0.0);
        assert_eq!(wrap_x(0.0, 400.0), 0.0);
        assert_eq!(wrap_x(400.0, 400.0), 400.0);
        assert_eq!(wrap_x(123.5, 400.0), 123.5);
    }

    #[test]
    fn test_default_jump_reaches_next_platform() {
        let apex = jump_apex(consts::JUMP_FORCE, consts::GRAVITY);
        assert_eq!(apex, 70.3125);
        assert!(jump_apex(consts::DOUBLE_JUMP_FORCE, consts::GRAVITY) < apex);

        // Apex falls between steps 56 and 57 at 120 Hz
        let stepped = stepped_jump_apex(consts::JUMP_FORCE, consts::GRAVITY, consts::SIM_DT);
        assert!(stepped <= apex);
        assert!(apex - stepped < 0.01);
        assert!(stepped >= consts::PLATFORM_SPACING);
    }

    #[test]
    fn test_stepped_apex_degenerate_inputs() {
        assert_eq!(stepped_jump_apex(300.0, 0.0, consts::SIM_DT), f32::INFINITY);
        assert_eq!(stepped_jump_apex(0.0, 640.0, consts::SIM_DT), 0.0);
        assert_eq!(stepped_jump_apex(300.0, 640.0, 0.0), 70.3125);
    }
}
