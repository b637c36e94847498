//! Party turn driver.
//!
//! Allies decide one at a time in roster order. Each ally's move is applied
//! to the [`PartyState`] before the next ally decides, so later allies see
//! where earlier ones went.

use game_core::spatial::{can_cut_corner, can_enter, quantize_direction};
use game_core::{
    AiConfig, Direction, Entity, EntityId, GameEnv, MapOracle, Position, SkillId, ally_rng,
};
use rand::RngCore;

use crate::context::{Decision, World};
use crate::dispatcher::TacticDispatcher;
use crate::error::MoveError;
use crate::skills::{SkillQuery, SkillSelector};

/// Mutable roster the driver works on between turns.
#[derive(Clone, Debug)]
pub struct PartyState {
    pub player: Entity,
    /// Party members in roster order.
    pub allies: Vec<Entity>,
    pub enemies: Vec<Entity>,
}

impl PartyState {
    pub fn new(player: Entity, allies: Vec<Entity>, enemies: Vec<Entity>) -> Self {
        Self {
            player,
            allies,
            enemies,
        }
    }

    /// Player, allies and enemies, in that order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + Clone {
        std::iter::once(&self.player)
            .chain(self.allies.iter())
            .chain(self.enemies.iter())
    }

    /// Read-only view handed to the dispatcher.
    pub fn world<'a>(&'a self, map: &'a dyn MapOracle) -> World<'a> {
        World::new(map, &self.player, &self.allies, &self.enemies)
    }

    pub fn ally(&self, id: EntityId) -> Option<&Entity> {
        self.allies.iter().find(|ally| ally.id == id)
    }

    /// Moves an ally one step after re-checking the destination.
    ///
    /// On success the ally faces `direction` and the new position is
    /// returned. On failure the ally is left untouched.
    pub fn apply_step(
        &mut self,
        ally: EntityId,
        direction: Direction,
        map: &dyn MapOracle,
    ) -> Result<Position, MoveError> {
        let index = self
            .allies
            .iter()
            .position(|entity| entity.id == ally)
            .ok_or(MoveError::NotInParty { ally })?;

        let from = self.allies[index].position;
        let destination = from.step(direction);
        if !can_enter(destination, map, self.entities(), ally) {
            return Err(MoveError::Blocked { ally, destination });
        }
        if !can_cut_corner(from, direction, map) {
            return Err(MoveError::CornerCut {
                ally,
                from,
                direction,
            });
        }

        let entity = &mut self.allies[index];
        entity.position = destination;
        entity.facing = direction;
        Ok(destination)
    }

    /// Counts down every status effect by one turn.
    ///
    /// Call once at the end of a global turn.
    pub fn tick_status_effects(&mut self) {
        self.player.status_effects.tick();
        for entity in self.allies.iter_mut().chain(self.enemies.iter_mut()) {
            entity.status_effects.tick();
        }
    }
}

/// What one ally did during a party turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllyTurn {
    pub ally: EntityId,
    pub decision: Decision,
    /// Skill picked for the attack; `None` is a basic attack or no attack.
    pub skill: Option<SkillId>,
    /// Tile the ally ended up on, when it moved.
    pub moved_to: Option<Position>,
    /// Why a decided move was not applied.
    pub move_error: Option<MoveError>,
}

impl AllyTurn {
    fn new(ally: EntityId, decision: Decision, skill: Option<SkillId>) -> Self {
        Self {
            ally,
            decision,
            skill,
            moved_to: None,
            move_error: None,
        }
    }
}

/// Runs the dispatcher and skill selector for every living ally.
#[derive(Clone, Debug, Default)]
pub struct PartyTurn {
    dispatcher: TacticDispatcher,
    selector: SkillSelector,
}

impl PartyTurn {
    pub fn new(config: AiConfig) -> Self {
        Self {
            dispatcher: TacticDispatcher::new(config.clone()),
            selector: SkillSelector::new(config),
        }
    }

    /// Plays one turn for the party, drawing all randomness from `rng`.
    pub fn run(
        &self,
        state: &mut PartyState,
        env: GameEnv<'_>,
        rng: &mut dyn RngCore,
    ) -> Vec<AllyTurn> {
        let mut turns = Vec::with_capacity(state.allies.len());
        for index in 0..state.allies.len() {
            if let Some(turn) = self.take_turn(state, index, env, rng) {
                turns.push(turn);
            }
        }
        turns
    }

    /// Plays one turn with a reproducible generator per ally.
    ///
    /// Replaying the same `game_seed` and `turn` over the same state yields
    /// the same turns.
    pub fn run_seeded(
        &self,
        state: &mut PartyState,
        env: GameEnv<'_>,
        game_seed: u64,
        turn: u64,
    ) -> Vec<AllyTurn> {
        let mut turns = Vec::with_capacity(state.allies.len());
        for index in 0..state.allies.len() {
            let mut rng = ally_rng(game_seed, turn, state.allies[index].id);
            if let Some(ally_turn) = self.take_turn(state, index, env, &mut rng) {
                turns.push(ally_turn);
            }
        }
        turns
    }

    fn take_turn(
        &self,
        state: &mut PartyState,
        index: usize,
        env: GameEnv<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<AllyTurn> {
        let ally = &state.allies[index];
        if !ally.is_alive() {
            return None;
        }
        let ally_id = ally.id;

        let slot = ally.party_slot.unwrap_or_default();
        let decision = self
            .dispatcher
            .decide(ally, state.world(env.map()), slot, ally.tactic, rng);

        let target = decision
            .attack_target
            .and_then(|id| state.enemies.iter().find(|enemy| enemy.id == id));
        let skill = target.and_then(|target| {
            let query = SkillQuery {
                ally,
                target: Some(target),
                party_allies: &state.allies,
                player: &state.player,
                tactic: ally.tactic,
                chart: env.types(),
            };
            self.selector.select(&query, rng).map(|skill| skill.id)
        });
        let target_position = target.map(|target| target.position);

        let mut turn = AllyTurn::new(ally_id, decision, skill);
        if let Some(direction) = decision.move_direction {
            match state.apply_step(ally_id, direction, env.map()) {
                Ok(destination) => turn.moved_to = Some(destination),
                Err(err) => {
                    tracing::warn!("Ally {} move rejected: {}", ally_id, err);
                    turn.move_error = Some(err);
                }
            }
        } else if let Some(target_position) = target_position {
            let entity = &mut state.allies[index];
            entity.facing = quantize_direction(entity.position, target_position);
        }

        Some(turn)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{CombatStats, Env, StatusEffectKind, TerrainGrid, TypeChart};

    use super::*;

    fn entity(id: u32, x: i32, y: i32) -> Entity {
        Entity::new(EntityId(id), Position::new(x, y), CombatStats::full(40, 5, 5, 1))
    }

    #[test]
    fn apply_step_rejects_occupied_destination() {
        let map = TerrainGrid::from_rows(&["....", "...."]).unwrap();
        let mut state = PartyState::new(
            entity(0, 0, 0),
            vec![entity(1, 1, 0).with_party_slot(0).unwrap()],
            vec![],
        );

        let err = state.apply_step(EntityId(1), Direction::Left, &map).unwrap_err();
        assert_eq!(
            err,
            MoveError::Blocked {
                ally: EntityId(1),
                destination: Position::new(0, 0)
            }
        );
        assert_eq!(state.allies[0].position, Position::new(1, 0));

        let moved = state.apply_step(EntityId(1), Direction::Right, &map).unwrap();
        assert_eq!(moved, Position::new(2, 0));
        assert_eq!(state.allies[0].facing, Direction::Right);
    }

    #[test]
    fn unknown_ally_cannot_move() {
        let map = TerrainGrid::from_rows(&["...."]).unwrap();
        let mut state = PartyState::new(entity(0, 0, 0), vec![], vec![]);
        assert_eq!(
            state.apply_step(EntityId(5), Direction::Right, &map),
            Err(MoveError::NotInParty { ally: EntityId(5) })
        );
    }

    #[test]
    fn status_effects_tick_for_everyone() {
        let mut player = entity(0, 0, 0);
        player.status_effects.add(StatusEffectKind::DefUp, 1);
        let mut enemy = entity(9, 3, 0);
        enemy.status_effects.add(StatusEffectKind::Burn, 2);
        let mut state = PartyState::new(player, vec![], vec![enemy]);

        state.tick_status_effects();
        assert!(!state.player.status_effects.has(StatusEffectKind::DefUp));
        assert_eq!(
            state.enemies[0]
                .status_effects
                .turns_remaining(StatusEffectKind::Burn),
            Some(1)
        );
    }

    #[test]
    fn dead_allies_sit_out() {
        let map = TerrainGrid::from_rows(&["......"]).unwrap();
        let chart = TypeChart::neutral();
        let env = Env::new(&map, &chart).into_game_env();
        let mut fallen = entity(1, 5, 0).with_party_slot(0).unwrap();
        fallen.alive = false;
        let mut state = PartyState::new(entity(0, 0, 0), vec![fallen], vec![]);

        let turns = PartyTurn::default().run_seeded(&mut state, env, 1, 1);
        assert!(turns.is_empty());
    }
}
