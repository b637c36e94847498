//! Shared fixtures for ally-ai integration tests.
#![allow(dead_code)]

use ally_ai::{Decision, TacticDispatcher, World};
use game_core::{
    CombatStats, Direction, Entity, EntityId, Position, Tactic, TerrainGrid,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Terrain from glyph rows (`.` ground, `#` wall).
pub fn grid(rows: &[&str]) -> TerrainGrid {
    TerrainGrid::from_rows(rows).unwrap()
}

/// Walkable rectangle with no walls.
pub fn open_floor(width: usize, height: usize) -> TerrainGrid {
    let row = ".".repeat(width);
    let rows: Vec<&str> = (0..height).map(|_| row.as_str()).collect();
    grid(&rows)
}

pub fn player(x: i32, y: i32, facing: Direction) -> Entity {
    Entity::new(
        EntityId::PLAYER,
        Position::new(x, y),
        CombatStats::full(100, 10, 10, 10),
    )
    .facing(facing)
}

pub fn ally(id: u32, x: i32, y: i32, slot: u8) -> Entity {
    Entity::new(EntityId(id), Position::new(x, y), CombatStats::full(100, 10, 10, 10))
        .with_party_slot(slot)
        .unwrap()
}

pub fn enemy(id: u32, x: i32, y: i32) -> Entity {
    Entity::new(EntityId(id), Position::new(x, y), CombatStats::full(60, 8, 8, 8))
}

/// Sets current HP, keeping the maximum.
pub fn with_hp(mut entity: Entity, hp: u32) -> Entity {
    entity.stats = CombatStats::new(
        hp,
        entity.stats.max_hp,
        entity.stats.atk,
        entity.stats.def,
        entity.stats.level,
    )
    .unwrap();
    entity
}

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Runs the default dispatcher for a lone ally.
pub fn decide(
    tactic: Tactic,
    ally: &Entity,
    map: &TerrainGrid,
    player: &Entity,
    enemies: &[Entity],
    rng: &mut dyn RngCore,
) -> Decision {
    let world = World::new(map, player, std::slice::from_ref(ally), enemies);
    TacticDispatcher::default().decide(
        ally,
        world,
        ally.party_slot.unwrap_or_default(),
        tactic,
        rng,
    )
}

/// Where the ally ends up if `decision` moves it.
pub fn destination(ally: &Entity, decision: Decision) -> Position {
    decision
        .move_direction
        .map_or(ally.position, |direction| ally.position.step(direction))
}
