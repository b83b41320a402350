//! Overlap detection between the actor and collectibles/hazards
//!
//! Platform contact is resolved by the physics step; this module handles
//! what comes after it in the tick: coins first, then the lava.

use super::geom::Aabb;
use super::state::{Coin, HazardFront};

/// What the actor touched this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// IDs of coins picked up (already removed from the coin list)
    pub coins: Vec<u32>,
    /// Actor is touching the lava
    pub hazard: bool,
}

/// Remove every coin overlapping `actor` and return their IDs.
///
/// A coin is reported at most once: it is flagged and dropped from the list
/// in the same pass.
pub fn collect_coins(actor: &Aabb, coins: &mut Vec<Coin>) -> Vec<u32> {
    let mut collected = Vec::new();
    for coin in coins.iter_mut() {
        if !coin.collected && actor.overlaps(&coin.bounds()) {
            coin.collected = true;
            collected.push(coin.id);
        }
    }
    coins.retain(|c| !c.collected);
    collected
}

/// Lava is a half-plane: anything whose bottom edge dips below its top is in it
#[inline]
pub fn hazard_contact(actor: &Aabb, hazard: &HazardFront) -> bool {
    actor.bottom() > hazard.y
}

/// Run the post-physics checks in order: coins, then hazard
pub fn check_collisions(actor: &Aabb, coins: &mut Vec<Coin>, hazard: &HazardFront) -> CollisionReport {
    let coins = collect_coins(actor, coins);
    let hazard = hazard_contact(actor, hazard);
    CollisionReport { coins, hazard }
}
