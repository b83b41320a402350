//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON file. Missing fields
//! fall back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::stepped_jump_apex;

/// How fast the lava climbs as the run goes on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RisePolicy {
    /// Constant `rise_speed`
    #[default]
    Linear,
    /// `rise_speed * base^(survival_time * scale)`
    Exponential { base: f32, scale: f32 },
}

impl RisePolicy {
    /// Accelerating policy using the stock base/scale constants
    pub fn exponential() -> Self {
        RisePolicy::Exponential {
            base: LAVA_ACCEL_BASE,
            scale: LAVA_ACCEL_SCALE,
        }
    }

    /// Rise rate (pixels/s) after `survival_time` seconds
    pub fn rate(&self, rise_speed: f32, survival_time: f32) -> f32 {
        match *self {
            RisePolicy::Linear => rise_speed,
            RisePolicy::Exponential { base, scale } => {
                rise_speed * base.powf(survival_time * scale)
            }
        }
    }
}

/// Which generated platform the actor spawns above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPlatform {
    /// Highest platform (smallest y)
    #[default]
    Topmost,
    /// First platform, nearest the lava
    Bottom,
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    pub gravity: f32,
    pub speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub actor_size: Vec2,

    // === Level ===
    pub num_platforms: usize,
    pub platform_width: f32,
    pub platform_width_jitter: f32,
    pub platform_height: f32,
    pub platform_spacing: f32,
    /// Extra random vertical offset per platform (0 = evenly spaced)
    pub platform_spacing_jitter: f32,
    pub platform_base_offset: f32,
    pub screen_margin: f32,
    pub num_coins: usize,
    pub coin_size: f32,
    pub coin_points: u64,
    pub spawn_platform: SpawnPlatform,
    pub spawn_height: f32,

    // === Hazard ===
    pub rise_speed: f32,
    pub rise_policy: RisePolicy,

    // === Effects ===
    pub screen_shake: bool,
    pub death_shake: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            speed: SPEED,
            jump_force: JUMP_FORCE,
            double_jump_force: DOUBLE_JUMP_FORCE,
            actor_size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),

            num_platforms: NUM_PLATFORMS,
            platform_width: PLATFORM_WIDTH,
            platform_width_jitter: PLATFORM_WIDTH_JITTER,
            platform_height: PLATFORM_HEIGHT,
            platform_spacing: PLATFORM_SPACING,
            platform_spacing_jitter: 0.0,
            platform_base_offset: PLATFORM_BASE_OFFSET,
            screen_margin: SCREEN_MARGIN,
            num_coins: NUM_COINS,
            coin_size: COIN_SIZE,
            coin_points: COIN_POINTS,
            spawn_platform: SpawnPlatform::Topmost,
            spawn_height: SPAWN_HEIGHT,

            rise_speed: LAVA_RISE_SPEED,
            rise_policy: RisePolicy::Linear,

            screen_shake: true,
            death_shake: DEATH_SHAKE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate();
        Ok(tuning)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(e) => log::warn!("Invalid tuning file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read tuning file {}: {}", path.display(), e),
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Highest rise a primary jump can reach
    pub fn max_jump_rise(&self) -> f32 {
        stepped_jump_apex(self.jump_force, self.gravity, SIM_DT)
    }

    /// Effective death shake (zero when shake is disabled)
    pub fn effective_death_shake(&self) -> f32 {
        if self.screen_shake { self.death_shake } else { 0.0 }
    }

    /// Clamp values that would break gameplay invariants
    pub fn validate(&mut self) {
        let defaults = Tuning::default();

        if !positive(self.gravity) {
            log::warn!("gravity {} must be positive, using {}", self.gravity, defaults.gravity);
            self.gravity = defaults.gravity;
        }
        if !positive(self.jump_force) {
            log::warn!("jump_force {} must be positive, using {}", self.jump_force, defaults.jump_force);
            self.jump_force = defaults.jump_force;
        }
        if !positive(self.double_jump_force) || self.double_jump_force >= self.jump_force {
            let fixed = self.jump_force * (DOUBLE_JUMP_FORCE / JUMP_FORCE);
            log::warn!(
                "double_jump_force {} must be below jump_force {}, using {}",
                self.double_jump_force,
                self.jump_force,
                fixed
            );
            self.double_jump_force = fixed;
        }
        if self.speed < 0.0 {
            log::warn!("speed {} is negative, using {}", self.speed, -self.speed);
            self.speed = -self.speed;
        }
        if !(positive(self.actor_size.x) && positive(self.actor_size.y)) {
            log::warn!("actor_size {:?} must be positive, using {:?}", self.actor_size, defaults.actor_size);
            self.actor_size = defaults.actor_size;
        }

        let reach = self.max_jump_rise();
        if !positive(self.platform_spacing) {
            log::warn!("platform_spacing {} must be positive, using {}", self.platform_spacing, reach.min(defaults.platform_spacing));
            self.platform_spacing = reach.min(defaults.platform_spacing);
        }
        if self.platform_spacing > reach {
            log::warn!("platform_spacing {} exceeds jump reach {}, clamping", self.platform_spacing, reach);
            self.platform_spacing = reach;
        }
        if self.platform_spacing_jitter < 0.0 {
            self.platform_spacing_jitter = 0.0;
        }
        // Adjacent platforms may differ by up to spacing + jitter and must stay strictly ordered
        let max_jitter = (reach - self.platform_spacing).min(self.platform_spacing * 0.5);
        if self.platform_spacing_jitter > max_jitter {
            log::warn!(
                "platform_spacing_jitter {} too large, clamping to {}",
                self.platform_spacing_jitter,
                max_jitter
            );
            self.platform_spacing_jitter = max_jitter.max(0.0);
        }
        if self.platform_width_jitter < 0.0 || self.platform_width_jitter >= self.platform_width {
            let fixed = (self.platform_width * 0.5).max(0.0);
            log::warn!("platform_width_jitter {} out of range, using {}", self.platform_width_jitter, fixed);
            self.platform_width_jitter = fixed;
        }
        if !positive(self.platform_height) {
            self.platform_height = defaults.platform_height;
        }
        if self.rise_speed < 0.0 {
            log::warn!("rise_speed {} is negative, lava would sink; using 0", self.rise_speed);
            self.rise_speed = 0.0;
        }
        if let RisePolicy::Exponential { base, scale } = self.rise_policy {
            if base < 1.0 || scale < 0.0 {
                log::warn!("exponential rise base {} / scale {} would decelerate, using linear", base, scale);
                self.rise_policy = RisePolicy::Linear;
            }
        }
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
