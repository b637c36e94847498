//! Data model and read-only oracles shared by the ally decision engine.
//!
//! `game-core` defines the entities, skills, and tactics the engine reasons
//! about, the terrain and type-effectiveness oracles it queries, and the pure
//! spatial predicates every decision is built from. Nothing in this crate
//! mutates world state; callers own their snapshots.
pub mod config;
pub mod env;
pub mod error;
pub mod spatial;
pub mod state;

pub use config::{AiConfig, GameConfig};
pub use env::{
    Env, GameEnv, MapDimensions, MapOracle, OracleError, StaticTile, TerrainGrid, TerrainKind,
    TypeChart, TypeChartOracle, ally_rng, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    CombatStats, Direction, ElementType, Entity, EntityId, ModelError, PartySlot, Position, Skill,
    SkillEffect, SkillId, SkillRange, StatusEffect, StatusEffectKind, StatusEffects, Tactic,
};
