//! Per-frame simulation tick
//!
//! Fixed order within a tick: input → wrap → physics → collisions → lava →
//! score/time → camera. After game over only wrap runs. Every reaction happens in-line; the event list only
//! records what collaborators should play or show.

use super::collision::check_collisions;
use super::state::{GameEvent, GamePhase, GameState};

/// Logical commands for a single tick, independent of input device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held
    pub move_left: bool,
    /// Held
    pub move_right: bool,
    /// Edge-triggered
    pub jump: bool,
    /// Edge-triggered; only honoured after game over
    pub restart: bool,
}

impl TickInput {
    /// -1 for left, 1 for right, 0 for neither or both
    pub fn axis(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.axis() != 0.0
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring tick with invalid dt {}", dt);
        return;
    }

    if input.restart && state.phase() == GamePhase::GameOver {
        state.start_game();
        return;
    }

    state.camera.decay_shake();
    let playing = state.session.is_playing();

    // Input
    if playing {
        state
            .actor
            .apply_horizontal(input.axis(), state.tuning.speed, dt);
        if input.jump {
            if let Some(event) = state.actor.try_jump(&state.tuning) {
                log::debug!("{:?} at {:?}", event, state.actor.pos());
                state.emit(event);
            }
        }
    }
    state.actor.wrap_horizontal(state.screen.x);

    // The body stays where the lava caught it until restart
    if !playing {
        return;
    }

    // Physics
    state.actor.body.apply_gravity_step(state.tuning.gravity, dt);
    if state.actor.body.resolve_ground_collision(&state.platforms) {
        state.actor.on_landed(input.is_moving());
        state.emit(GameEvent::Landed);
    }

    // Collisions
    let bounds = state.actor.body.bounds();
    let report = check_collisions(&bounds, &mut state.coins, &state.hazard);
    for coin_id in report.coins {
        state.handle_coin_collected(coin_id);
    }
    if report.hazard {
        state.handle_fatal_contact();
        return;
    }

    // Lava
    state.hazard.advance(
        state.tuning.rise_policy,
        state.tuning.rise_speed,
        state.session.survival_time,
        dt,
    );

    // Score/time
    state.advance_clock(dt);

    // Camera
    state.camera.follow(state.actor.pos().y);
}
