//! Condition nodes for ally behavior trees.
//!
//! Condition nodes read the [`TacticContext`] and return Success or Failure.
//! They never record a decision.

use behavior_tree::{Behavior, Status};

use crate::context::TacticContext;

/// Succeeds when the ally stands on the tile the player is facing.
///
/// # Example
///
/// ```rust,ignore
/// // Step aside before anything else
/// guard(leaf(IsBlockingPlayer), leaf(YieldToPlayer))
/// ```
pub struct IsBlockingPlayer;

impl Behavior<TacticContext<'_>> for IsBlockingPlayer {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        Status::from_bool(ctx.is_blocking_player())
    }
}

/// Succeeds when the ally is farther from the player than its leash allows.
pub struct IsBeyondLeash;

impl Behavior<TacticContext<'_>> for IsBeyondLeash {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        Status::from_bool(ctx.distance_to_player() > ctx.slot.leash_distance())
    }
}

/// Succeeds when the ally is at least one tile inside its leash.
pub struct IsWithinLeashMargin;

impl Behavior<TacticContext<'_>> for IsWithinLeashMargin {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        let margin = ctx.slot.leash_distance().saturating_sub(1);
        Status::from_bool(ctx.distance_to_player() <= margin)
    }
}

/// Succeeds when the ally is already close enough to the player to idle.
pub struct IsWithinFollowDistance;

impl Behavior<TacticContext<'_>> for IsWithinFollowDistance {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        Status::from_bool(ctx.distance_to_player() <= ctx.slot.follow_distance())
    }
}

/// Succeeds when a living enemy is within `radius` tiles (Chebyshev).
pub struct HasEnemyWithin {
    pub radius: u32,
}

impl Behavior<TacticContext<'_>> for HasEnemyWithin {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        Status::from_bool(ctx.nearest_enemy_within(self.radius).is_some())
    }
}
