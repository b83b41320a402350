//! Procedural level layout
//!
//! Platforms are stacked upward from near the bottom of the screen at a
//! fixed spacing the primary jump can always clear; coins are scattered in
//! the vertical band the platforms occupy.

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, Platform};
use crate::tuning::{SpawnPlatform, Tuning};

/// One session's worth of generated entities
#[derive(Debug, Clone, Default)]
pub struct Level {
    /// In generation order: y strictly decreases with index
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    /// Smallest platform y (the topmost platform); `None` without platforms
    pub lowest_platform_y: Option<f32>,
}

impl Level {
    /// Platform the actor should spawn above
    pub fn spawn_platform(&self, which: SpawnPlatform) -> Option<&Platform> {
        let by_y = |a: &&Platform, b: &&Platform| a.pos.y.total_cmp(&b.pos.y);
        match which {
            SpawnPlatform::Topmost => self.platforms.iter().min_by(by_y),
            SpawnPlatform::Bottom => self.platforms.iter().max_by(by_y),
        }
    }
}

/// Uniform sample in `[lo, hi]`, collapsing to `lo` for empty or non-finite ranges
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if lo.is_finite() && hi.is_finite() && hi > lo {
        rng.random_range(lo..=hi)
    } else {
        lo
    }
}

/// Generate platforms and coins for a `screen_width` x `screen_height` playfield
pub fn generate_level<R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
    screen_width: f32,
    screen_height: f32,
) -> Level {
    if !(screen_width.is_finite() && screen_height.is_finite())
        || screen_width <= 0.0
        || screen_height <= 0.0
    {
        log::warn!(
            "Cannot lay out a {}x{} screen, generating an empty level",
            screen_width,
            screen_height
        );
        return Level::default();
    }

    let margin = tuning.screen_margin;
    let base_y = screen_height - tuning.platform_base_offset;

    let mut platforms = Vec::with_capacity(tuning.num_platforms);
    let mut lowest_platform_y: Option<f32> = None;

    for i in 0..tuning.num_platforms {
        let x = uniform(rng, margin, screen_width - margin - tuning.platform_width);
        let jitter = uniform(rng, 0.0, tuning.platform_spacing_jitter);
        let y = base_y - i as f32 * tuning.platform_spacing - jitter;
        let width = uniform(
            rng,
            tuning.platform_width - tuning.platform_width_jitter,
            tuning.platform_width + tuning.platform_width_jitter,
        );

        platforms.push(Platform {
            id: i as u32,
            pos: Vec2::new(x, y),
            width,
            height: tuning.platform_height,
        });

        lowest_platform_y = Some(lowest_platform_y.map_or(y, |lowest| lowest.min(y)));
    }

    let Some(band_top) = lowest_platform_y else {
        log::warn!("No platforms generated, skipping coins");
        return Level::default();
    };

    let coins = (0..tuning.num_coins)
        .map(|i| Coin {
            id: i as u32,
            pos: Vec2::new(
                uniform(rng, margin, screen_width - margin),
                uniform(rng, band_top, base_y),
            ),
            size: tuning.coin_size,
            collected: false,
        })
        .collect();

    log::debug!(
        "Generated {} platforms, {} coins (top platform y = {})",
        platforms.len(),
        tuning.num_coins,
        band_top
    );

    Level {
        platforms,
        coins,
        lowest_platform_y,
    }
}
