//! Simulation module
//!
//! All gameplay logic lives here:
//! - Driven one tick at a time by an external frame loop
//! - Level randomness comes from a seeded RNG owned by the game state
//! - No rendering, audio or device dependencies

pub mod camera;
pub mod collision;
pub mod geom;
pub mod hazard;
pub mod level;
pub mod physics;
pub mod player;
pub mod session;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{CollisionReport, check_collisions, collect_coins, hazard_contact};
pub use geom::Aabb;
pub use level::{Level, generate_level};
pub use session::{GameOverInfo, HudSnapshot};
pub use state::{
    Actor, AnimState, Body, Coin, Facing, GameEvent, GamePhase, GameState, HazardFront, Platform,
    SessionState,
};
pub use tick::{TickInput, tick};
