//! Layer 2: one priority chain per tactic.
//!
//! Each function returns a `Selector` whose children are tried top to bottom;
//! the first branch that succeeds has recorded the tick's decision. Every
//! chain ends in [`Idle`], so evaluation always produces a decision.

use behavior_tree::builder::{leaf, selector};
use game_core::AiConfig;

use crate::nodes::{AttackAdjacentEnemy, Idle, PathTowardPlayer, Wander};

use super::{BehaviorTree, patterns};

/// FollowMe: stay near the player, fighting only what comes close.
///
/// 1. Yield if blocking the player
/// 2. Beyond leash → head back (or idle)
/// 3. Enemy adjacent → attack
/// 4. Enemy within engage radius and leash slack → close in
/// 5. Within follow distance → idle
/// 6. Otherwise → head back
pub fn follow_me<'a>(config: &AiConfig) -> BehaviorTree<'a> {
    selector(vec![
        patterns::yield_when_blocking(),
        patterns::rejoin_when_leashed(),
        leaf(AttackAdjacentEnemy),
        patterns::engage_nearby_enemy(config.engage_radius),
        patterns::idle_when_close(),
        leaf(PathTowardPlayer),
        leaf(Idle),
    ])
}

/// GoAfterFoes: hunt enemies over a wide radius, minding the leash only when
/// none are around.
pub fn go_after_foes<'a>(config: &AiConfig) -> BehaviorTree<'a> {
    selector(vec![
        patterns::yield_when_blocking(),
        leaf(AttackAdjacentEnemy),
        patterns::hunt_enemy(config.hunt_radius),
        patterns::return_when_leashed(),
        leaf(Idle),
    ])
}

/// StayHere: never move; fight only adjacent enemies.
pub fn stay_here<'a>() -> BehaviorTree<'a> {
    selector(vec![leaf(AttackAdjacentEnemy), leaf(Idle)])
}

/// Scatter: fight adjacent enemies, otherwise wander at random.
pub fn scatter<'a>() -> BehaviorTree<'a> {
    selector(vec![leaf(AttackAdjacentEnemy), leaf(Wander), leaf(Idle)])
}
