//! Game state and core simulation types
//!
//! One `GameState` owns every entity in a run: the actor, the generated
//! level, the lava front, the camera and the session bookkeeping.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::geom::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Direction the actor sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Animation selected by the player controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    Run,
    /// Airborne after a jump (either kind)
    Jump,
}

impl AnimState {
    /// Sprite animation name
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimState::Idle => "idle",
            AnimState::Run => "run",
            AnimState::Jump => "jump",
        }
    }
}

/// Kinematic state integrated by the physics step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
    /// Position before the last gravity step (for swept ground checks)
    pub prev_pos: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
            prev_pos: pos,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Bottom edge (feet)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    /// Place the body at rest at `pos`
    pub fn teleport(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev_pos = pos;
        self.vel = Vec2::ZERO;
        self.grounded = false;
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub body: Body,
    pub facing: Facing,
    /// Remaining airborne jumps (0 or 1)
    pub double_jumps: u8,
    pub anim: AnimState,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(pos, size),
            facing: Facing::Right,
            double_jumps: 0,
            anim: AnimState::Idle,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    /// Reposition for a new session. The double jump stays spent until the
    /// actor actually touches a platform.
    pub fn respawn(&mut self, pos: Vec2) {
        self.body.teleport(pos);
        self.facing = Facing::Right;
        self.double_jumps = 0;
        self.anim = AnimState::Idle;
    }
}

/// A static platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::new(self.width, self.height))
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub size: f32,
    pub collected: bool,
}

impl Coin {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.size))
    }
}

/// The rising lava. Everything at or below `y` is lava.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardFront {
    /// Top edge of the lava
    pub y: f32,
}

/// Per-run bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u64,
    pub coins_collected: u32,
    /// Seconds survived this run
    pub survival_time: f32,
    pub phase: GamePhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            score: 0,
            coins_collected: 0,
            survival_time: 0.0,
            phase: GamePhase::Playing,
        }
    }
}

impl SessionState {
    /// `coins * coin_points + whole seconds survived`
    pub fn compute_score(coins_collected: u32, survival_time: f32, coin_points: u64) -> u64 {
        (coins_collected as u64)
            .saturating_mul(coin_points)
            .saturating_add(survival_time.max(0.0).floor() as u64)
    }

    /// Derive `score` from coins and time; score is never accumulated directly
    pub fn recompute_score(&mut self, coin_points: u64) {
        self.score = Self::compute_score(self.coins_collected, self.survival_time, coin_points);
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

/// Things that happened during a tick, for audio/visual collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    /// Primary jump off a platform
    Jump,
    /// Airborne jump
    DoubleJump,
    Landed,
    CoinCollected { coin_id: u32 },
    Dead { final_score: u64, shake: f32 },
}

impl GameEvent {
    /// Named sound cue, if the event has one
    pub fn cue(&self) -> Option<&'static str> {
        match self {
            GameEvent::Jump | GameEvent::DoubleJump => Some("jump"),
            GameEvent::CoinCollected { .. } => Some("coin-collected"),
            GameEvent::Dead { .. } => Some("dead"),
            GameEvent::SessionStarted | GameEvent::Landed => None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the level RNG was created from
    pub seed: u64,
    /// Playfield size supplied by the driver
    pub screen: Vec2,
    pub tuning: Tuning,
    pub actor: Actor,
    /// Sorted by index: y strictly decreases
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub hazard: HazardFront,
    pub session: SessionState,
    pub camera: Camera,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a game and start the first session
    pub fn new(seed: u64, screen_width: f32, screen_height: f32, mut tuning: Tuning) -> Self {
        tuning.validate();
        let screen = Vec2::new(screen_width, screen_height);
        let spawn = Vec2::new(screen_width * 0.5, screen_height - tuning.platform_base_offset);
        let mut state = Self {
            seed,
            screen,
            actor: Actor::new(spawn, tuning.actor_size),
            tuning,
            platforms: Vec::new(),
            coins: Vec::new(),
            hazard: HazardFront { y: screen_height },
            session: SessionState::default(),
            camera: Camera::new(screen),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };

        state.start_game();

        state
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Update the playfield size; takes effect for wrap/camera immediately
    /// and for layout on the next session
    pub fn resize(&mut self, screen_width: f32, screen_height: f32) {
        self.screen = Vec2::new(screen_width, screen_height);
        self.camera.set_screen(self.screen);
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
