//! Session lifecycle: start, scoring, game over
//!
//! Score is always derived as `coins * coin_points + floor(survival_time)`.
//! It is recomputed whenever one of its inputs changes and never incremented
//! on its own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::generate_level;
use super::state::{GameEvent, GamePhase, GameState, SessionState};

/// Final result shown by the game-over overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverInfo {
    pub final_score: u64,
}

/// Read-only values the HUD renders each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub coins: u32,
    /// Whole seconds survived
    pub time: u64,
    /// HUD labels are hidden once the run ends
    pub visible: bool,
    pub game_over: Option<GameOverInfo>,
}

impl GameState {
    /// Begin a fresh session.
    ///
    /// Resets scoring, replaces the level, puts the lava back below the
    /// screen and drops the actor just above the spawn platform.
    pub fn start_game(&mut self) {
        self.session = SessionState::default();

        let level = generate_level(&mut self.rng, &self.tuning, self.screen.x, self.screen.y);
        let spawn = level
            .spawn_platform(self.tuning.spawn_platform)
            .map(|p| Vec2::new(p.pos.x, p.pos.y - self.tuning.spawn_height));

        self.platforms = level.platforms;
        self.coins = level.coins;
        self.hazard.reset(self.screen.y);
        self.camera.reset();

        match spawn {
            Some(pos) => self.actor.respawn(pos),
            None => log::warn!(
                "No spawn platform, leaving actor at ({}, {})",
                self.actor.pos().x,
                self.actor.pos().y
            ),
        }

        log::info!(
            "Session started: {} platforms, {} coins, spawn {:?}",
            self.platforms.len(),
            self.coins.len(),
            spawn
        );
        self.emit(GameEvent::SessionStarted);
    }

    /// Coin pickup. Ignored once the run is over.
    pub fn handle_coin_collected(&mut self, coin_id: u32) {
        if !self.session.is_playing() {
            return;
        }
        self.session.coins_collected += 1;
        self.session.recompute_score(self.tuning.coin_points);
        self.emit(GameEvent::CoinCollected { coin_id });
    }

    /// Lava contact. Ends the run the first time; returns false (and does
    /// nothing) when the run has already ended.
    pub fn handle_fatal_contact(&mut self) -> bool {
        if !self.session.is_playing() {
            return false;
        }

        self.session.phase = GamePhase::GameOver;
        self.actor.body.vel = Vec2::ZERO;
        let shake = self.tuning.effective_death_shake();
        self.camera.add_shake(shake);

        let final_score = self.session.score;
        log::info!(
            "Game over: score {} ({} coins, {:.1}s)",
            final_score,
            self.session.coins_collected,
            self.session.survival_time
        );
        self.emit(GameEvent::Dead { final_score, shake });
        true
    }

    /// Advance survival time and rederive the score
    pub fn advance_clock(&mut self, dt: f32) {
        if !self.session.is_playing() {
            return;
        }
        self.session.survival_time += dt;
        self.session.recompute_score(self.tuning.coin_points);
    }

    pub fn game_over_info(&self) -> Option<GameOverInfo> {
        match self.session.phase {
            GamePhase::GameOver => Some(GameOverInfo {
                final_score: self.session.score,
            }),
            GamePhase::Playing => None,
        }
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.session.score,
            coins: self.session.coins_collected,
            time: self.session.survival_time.max(0.0).floor() as u64,
            visible: self.session.is_playing(),
            game_over: self.game_over_info(),
        }
    }
}
