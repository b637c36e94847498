//! Entity and skill data model.
//!
//! The decision engine reads these types from immutable snapshots. Positions,
//! facings and PP counters are mutated by callers between ticks.
pub mod error;
pub mod types;

pub use error::ModelError;
pub use types::{
    CombatStats, Direction, ElementType, Entity, EntityId, PartySlot, Position, Skill,
    SkillEffect, SkillId, SkillRange, StatusEffect, StatusEffectKind, StatusEffects, Tactic,
};
