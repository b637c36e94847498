//! Tactic context for behavior-tree evaluation.
//!
//! The [`TacticContext`] is the blackboard for one ally's decision on one
//! tick. It provides:
//!
//! - Read access to the ally and a [`World`] snapshot
//! - Helper queries shared by condition and action nodes
//! - The RNG handle for randomized behavior
//! - Storage for the resulting [`Decision`]

use game_core::spatial::{can_cut_corner, can_enter, chebyshev_distance, is_adjacent};
use game_core::{AiConfig, Direction, Entity, EntityId, MapOracle, PartySlot, Position};
use rand::RngCore;

use crate::pathfinder::Pathfinder;

/// Outcome of one ally's tick.
///
/// Both fields empty means the ally idles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decision {
    pub move_direction: Option<Direction>,
    pub attack_target: Option<EntityId>,
}

impl Decision {
    pub const fn idle() -> Self {
        Self {
            move_direction: None,
            attack_target: None,
        }
    }

    pub const fn step(direction: Direction) -> Self {
        Self {
            move_direction: Some(direction),
            attack_target: None,
        }
    }

    pub const fn attack(target: EntityId) -> Self {
        Self {
            move_direction: None,
            attack_target: Some(target),
        }
    }

    pub const fn is_idle(&self) -> bool {
        self.move_direction.is_none() && self.attack_target.is_none()
    }
}

/// Read-only snapshot of everything an ally can see.
#[derive(Clone, Copy)]
pub struct World<'a> {
    pub map: &'a dyn MapOracle,
    pub player: &'a Entity,
    /// Party members; may include the deciding ally.
    pub allies: &'a [Entity],
    pub enemies: &'a [Entity],
}

impl<'a> World<'a> {
    pub fn new(
        map: &'a dyn MapOracle,
        player: &'a Entity,
        allies: &'a [Entity],
        enemies: &'a [Entity],
    ) -> Self {
        Self {
            map,
            player,
            allies,
            enemies,
        }
    }

    /// Player, allies and enemies, in that order.
    pub fn entities(self) -> impl Iterator<Item = &'a Entity> + Clone {
        std::iter::once(self.player)
            .chain(self.allies.iter())
            .chain(self.enemies.iter())
    }

    /// Living, hostile entities in roster order.
    pub fn hostiles(self) -> impl Iterator<Item = &'a Entity> + Clone {
        self.enemies.iter().filter(|e| e.alive && !e.is_ally)
    }
}

/// Blackboard for one ally's behavior-tree evaluation.
pub struct TacticContext<'a> {
    /// The ally making the decision.
    pub ally: &'a Entity,

    /// Read-only view of the floor.
    pub world: World<'a>,

    /// Roster slot that sets follow and leash distances.
    pub slot: PartySlot,

    pub config: &'a AiConfig,

    /// Source of randomness for Scatter's wandering.
    pub rng: &'a mut dyn RngCore,

    decision: Option<Decision>,
}

impl<'a> TacticContext<'a> {
    pub fn new(
        ally: &'a Entity,
        world: World<'a>,
        slot: PartySlot,
        config: &'a AiConfig,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self {
            ally,
            world,
            slot,
            config,
            rng,
            decision: None,
        }
    }

    // ========================================================================
    // Decision Storage
    // ========================================================================

    /// Records the decision for this tick.
    ///
    /// A well-formed tree sets exactly one decision per evaluation.
    pub fn set_decision(&mut self, decision: Decision) {
        debug_assert!(
            self.decision.is_none(),
            "decision already set for ally {}",
            self.ally.id
        );
        self.decision = Some(decision);
    }

    pub fn has_decision(&self) -> bool {
        self.decision.is_some()
    }

    /// Extracts the decision, idling if no node produced one.
    pub fn take_decision(self) -> Decision {
        self.decision.unwrap_or_default()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn distance_to_player(&self) -> u32 {
        chebyshev_distance(self.ally.position, self.world.player.position)
    }

    /// True when the ally stands on the tile the player faces.
    pub fn is_blocking_player(&self) -> bool {
        let player = self.world.player;
        let (dx, dy) = player.facing.delta();
        self.ally.position == player.position.offset(dx, dy)
    }

    /// True if the ally may take one step in `direction` right now.
    pub fn can_step(&self, direction: Direction) -> bool {
        let from = self.ally.position;
        can_enter(
            from.step(direction),
            self.world.map,
            self.world.entities(),
            self.ally.id,
        ) && can_cut_corner(from, direction, self.world.map)
    }

    /// First living enemy touching the ally, in roster order.
    pub fn adjacent_enemy(&self) -> Option<&'a Entity> {
        let origin = self.ally.position;
        self.world
            .hostiles()
            .find(|enemy| is_adjacent(origin, enemy.position))
    }

    /// Closest living enemy within `radius` (inclusive); ties go to roster order.
    pub fn nearest_enemy_within(&self, radius: u32) -> Option<&'a Entity> {
        let origin = self.ally.position;
        let mut best: Option<(&'a Entity, u32)> = None;
        for enemy in self.world.hostiles() {
            let distance = chebyshev_distance(origin, enemy.position);
            if distance > radius {
                continue;
            }
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((enemy, distance));
            }
        }
        best.map(|(enemy, _)| enemy)
    }

    /// First step of a bounded search toward `target`.
    pub fn path_toward(&self, target: Position, ignore: &[EntityId]) -> Option<Direction> {
        Pathfinder::from_config(self.config).find_step(
            self.ally.position,
            target,
            self.world.map,
            self.world.entities(),
            self.ally.id,
            ignore,
        )
    }
}
