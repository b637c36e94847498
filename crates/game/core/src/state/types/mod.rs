pub mod common;
pub mod element;
pub mod entity;
pub mod skill;
pub mod status;

// Re-export common types
pub use common::{Direction, EntityId, Position};

// Re-export entity types
pub use element::ElementType;
pub use entity::{CombatStats, Entity, PartySlot, Tactic};

// Re-export skill and status types
pub use skill::{Skill, SkillEffect, SkillId, SkillRange};
pub use status::{StatusEffect, StatusEffectKind, StatusEffects};
