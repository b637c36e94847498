//! Action nodes for ally behavior trees.
//!
//! Action nodes record a [`Decision`] in the context when they succeed. A node
//! that fails leaves the context untouched so the next branch can run.

use behavior_tree::{Behavior, Status};
use game_core::Direction;
use rand::seq::SliceRandom;

use crate::context::{Decision, TacticContext};

/// Steps off the tile the player is facing.
///
/// Candidates are tried in two passes over [`Direction::ALL`]: first the
/// directions perpendicular to the player's facing, then every other
/// direction except the facing itself. When no candidate is open the ally
/// holds position, so this node always succeeds.
pub struct YieldToPlayer;

impl Behavior<TacticContext<'_>> for YieldToPlayer {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        let facing = ctx.world.player.facing;
        let perpendicular = Direction::ALL.into_iter().filter(|d| d.dot(facing) == 0);
        let remaining = Direction::ALL
            .into_iter()
            .filter(|d| d.dot(facing) != 0 && *d != facing);

        let open = perpendicular.chain(remaining).find(|d| ctx.can_step(*d));
        match open {
            Some(direction) => {
                tracing::debug!("Ally {} yields to player: {:?}", ctx.ally.id, direction);
                ctx.set_decision(Decision::step(direction));
            }
            None => {
                tracing::debug!("Ally {} cannot yield, holding position", ctx.ally.id);
                ctx.set_decision(Decision::idle());
            }
        }
        Status::Success
    }
}

/// Attacks the first living enemy adjacent to the ally.
///
/// Fails when no enemy is adjacent.
pub struct AttackAdjacentEnemy;

impl Behavior<TacticContext<'_>> for AttackAdjacentEnemy {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        let Some(enemy) = ctx.adjacent_enemy() else {
            return Status::Failure;
        };

        tracing::debug!("Ally {} attacks adjacent enemy {}", ctx.ally.id, enemy.id);
        ctx.set_decision(Decision::attack(enemy.id));
        Status::Success
    }
}

/// Takes one step of a search toward the player.
///
/// The player is not an obstacle for this search. Fails when the ally is
/// already next to the player or no route exists.
pub struct PathTowardPlayer;

impl Behavior<TacticContext<'_>> for PathTowardPlayer {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        if ctx.distance_to_player() <= 1 {
            return Status::Failure;
        }

        let player = ctx.world.player;
        match ctx.path_toward(player.position, &[player.id]) {
            Some(direction) => {
                tracing::debug!(
                    "Ally {} heads to player (distance {}): {:?}",
                    ctx.ally.id,
                    ctx.distance_to_player(),
                    direction
                );
                ctx.set_decision(Decision::step(direction));
                Status::Success
            }
            None => {
                tracing::debug!("Ally {} has no route to player", ctx.ally.id);
                Status::Failure
            }
        }
    }
}

/// Takes one step of a search toward the nearest enemy within `radius`.
pub struct PathTowardNearestEnemy {
    pub radius: u32,
}

impl Behavior<TacticContext<'_>> for PathTowardNearestEnemy {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        let Some(enemy) = ctx.nearest_enemy_within(self.radius) else {
            return Status::Failure;
        };

        match ctx.path_toward(enemy.position, &[]) {
            Some(direction) => {
                tracing::debug!(
                    "Ally {} closes on enemy {}: {:?}",
                    ctx.ally.id,
                    enemy.id,
                    direction
                );
                ctx.set_decision(Decision::step(direction));
                Status::Success
            }
            None => {
                tracing::debug!("Ally {} has no route to enemy {}", ctx.ally.id, enemy.id);
                Status::Failure
            }
        }
    }
}

/// Steps into the first open tile of a shuffled direction list.
///
/// Fails when every neighbor is blocked.
pub struct Wander;

impl Behavior<TacticContext<'_>> for Wander {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut *ctx.rng);

        let open = directions.into_iter().find(|d| ctx.can_step(*d));
        match open {
            Some(direction) => {
                tracing::debug!("Ally {} wanders: {:?}", ctx.ally.id, direction);
                ctx.set_decision(Decision::step(direction));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Idles (no move, no attack). Always succeeds.
///
/// Use this as the final fallback in a Selector.
pub struct Idle;

impl Behavior<TacticContext<'_>> for Idle {
    fn tick(&self, ctx: &mut TacticContext<'_>) -> Status {
        tracing::debug!("Ally {} idles", ctx.ally.id);
        ctx.set_decision(Decision::idle());
        Status::Success
    }
}
