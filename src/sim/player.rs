//! Player controller: movement, jump/double-jump and animation selection
//!
//! Everything here works on logical commands only. Which device produced
//! them is resolved earlier, in `crate::platform`.

use super::state::{Actor, AnimState, Facing, GameEvent};
use crate::tuning::Tuning;
use crate::wrap_x;

impl Actor {
    /// Handle a jump press.
    ///
    /// Grounded: primary jump. Airborne with a charge left: weaker double
    /// jump that spends the charge. Otherwise nothing happens.
    pub fn try_jump(&mut self, tuning: &Tuning) -> Option<GameEvent> {
        if self.body.grounded {
            self.body.jump(tuning.jump_force);
            self.anim = AnimState::Jump;
            Some(GameEvent::Jump)
        } else if self.double_jumps > 0 {
            self.body.jump(tuning.double_jump_force);
            self.double_jumps = 0;
            self.anim = AnimState::Jump;
            Some(GameEvent::DoubleJump)
        } else {
            None
        }
    }

    /// Move by `axis * speed * dt` (axis is -1, 0 or 1) and update facing.
    /// While grounded the animation follows whether the actor is moving.
    pub fn apply_horizontal(&mut self, axis: f32, speed: f32, dt: f32) {
        if axis < 0.0 {
            self.facing = Facing::Left;
        } else if axis > 0.0 {
            self.facing = Facing::Right;
        }
        if axis != 0.0 {
            self.body.move_x(axis * speed * dt);
        }

        if self.body.grounded {
            self.anim = if axis != 0.0 { AnimState::Run } else { AnimState::Idle };
        }
    }

    /// Ground contact: restore the double jump and leave the jump animation
    pub fn on_landed(&mut self, moving: bool) {
        self.double_jumps = 1;
        self.anim = if moving { AnimState::Run } else { AnimState::Idle };
    }

    /// Wrap around the left/right screen edges
    pub fn wrap_horizontal(&mut self, screen_width: f32) {
        self.body.pos.x = wrap_x(self.body.pos.x, screen_width);
    }
}
