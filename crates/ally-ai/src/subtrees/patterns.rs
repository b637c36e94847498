//! Layer 1: guarded if-then patterns.
//!
//! # Naming Convention
//!
//! Patterns follow the `action_when_condition()` convention to clearly
//! express the if-then relationship.

use behavior_tree::builder::{guard, leaf, selector, sequence};

use crate::nodes::{
    HasEnemyWithin, Idle, IsBeyondLeash, IsBlockingPlayer, IsWithinFollowDistance,
    IsWithinLeashMargin, PathTowardNearestEnemy, PathTowardPlayer, YieldToPlayer,
};

use super::BehaviorTree;

// ============================================================================
// Player Awareness
// ============================================================================

/// Step aside when standing where the player is about to walk.
///
/// Once the ally is found blocking, this pattern always succeeds: either a
/// sidestep or holding position ends the tick.
pub fn yield_when_blocking<'a>() -> BehaviorTree<'a> {
    guard(leaf(IsBlockingPlayer), leaf(YieldToPlayer))
}

/// Drop everything and head back when the leash is exceeded.
///
/// Idles if no route to the player exists.
pub fn rejoin_when_leashed<'a>() -> BehaviorTree<'a> {
    guard(
        leaf(IsBeyondLeash),
        selector(vec![leaf(PathTowardPlayer), leaf(Idle)]),
    )
}

/// Head back only when the leash is exceeded; fails otherwise.
pub fn return_when_leashed<'a>() -> BehaviorTree<'a> {
    guard(leaf(IsBeyondLeash), leaf(PathTowardPlayer))
}

/// Idle while inside follow distance.
pub fn idle_when_close<'a>() -> BehaviorTree<'a> {
    guard(leaf(IsWithinFollowDistance), leaf(Idle))
}

// ============================================================================
// Combat Patterns
// ============================================================================

/// Close on a nearby enemy while the leash has slack.
///
/// Falls back to heading for the player when the enemy is unreachable.
pub fn engage_nearby_enemy<'a>(radius: u32) -> BehaviorTree<'a> {
    sequence(vec![
        leaf(IsWithinLeashMargin),
        leaf(HasEnemyWithin { radius }),
        selector(vec![
            leaf(PathTowardNearestEnemy { radius }),
            leaf(PathTowardPlayer),
        ]),
    ])
}

/// Chase any enemy within `radius`, regardless of the leash.
///
/// Falls back to heading for the player, then idling, so a hunt never falls
/// through to lower priorities.
pub fn hunt_enemy<'a>(radius: u32) -> BehaviorTree<'a> {
    guard(
        leaf(HasEnemyWithin { radius }),
        selector(vec![
            leaf(PathTowardNearestEnemy { radius }),
            leaf(PathTowardPlayer),
            leaf(Idle),
        ]),
    )
}
