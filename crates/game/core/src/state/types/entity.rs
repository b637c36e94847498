//! Entities taking part in ally decisions: the player, allies and enemies.

use arrayvec::ArrayVec;
use strum::{EnumCount, EnumIter};

use super::common::{Direction, EntityId, Position};
use super::element::ElementType;
use super::skill::Skill;
use super::status::StatusEffects;
use crate::config::GameConfig;
use crate::state::error::ModelError;

/// Core combat numbers of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub level: u32,
}

impl CombatStats {
    /// Creates stats, rejecting `hp > max_hp`.
    pub fn new(
        hp: u32,
        max_hp: u32,
        atk: u32,
        def: u32,
        level: u32,
    ) -> Result<Self, ModelError> {
        if hp > max_hp {
            return Err(ModelError::HpAboveMax { hp, max_hp });
        }
        Ok(Self {
            hp,
            max_hp,
            atk,
            def,
            level,
        })
    }

    /// Full-health stats with the given maximum.
    pub fn full(max_hp: u32, atk: u32, def: u32, level: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            atk,
            def,
            level,
        }
    }

    /// True when `hp < max_hp * ratio`.
    pub fn hp_below(&self, ratio: f32) -> bool {
        (self.hp as f32) < self.max_hp as f32 * ratio
    }
}

/// Behavioral mode selected for an ally from the party menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumCount, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tactic {
    /// Stay close to the player, engaging only nearby enemies.
    #[default]
    FollowMe,
    /// Hunt enemies within a wide radius.
    GoAfterFoes,
    /// Hold position and only fight what comes adjacent.
    StayHere,
    /// Wander randomly, ignoring the player.
    Scatter,
}

/// Position of an ally in the party roster, `0..=3`.
///
/// Higher slots trail further behind the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartySlot(u8);

impl PartySlot {
    const FOLLOW_BASE: u32 = 2;
    const LEASH_BASE: u32 = 5;

    pub fn new(slot: u8) -> Result<Self, ModelError> {
        if slot as usize >= GameConfig::MAX_PARTY_SLOTS {
            return Err(ModelError::PartySlotOutOfRange {
                slot,
                max: GameConfig::MAX_PARTY_SLOTS as u8 - 1,
            });
        }
        Ok(Self(slot))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Distance the ally keeps from the player while idle: `2 + slot`.
    pub const fn follow_distance(self) -> u32 {
        Self::FOLLOW_BASE + self.0 as u32
    }

    /// Distance beyond which the ally drops everything to rejoin: `5 + slot`.
    pub const fn leash_distance(self) -> u32 {
        Self::LEASH_BASE + self.0 as u32
    }
}

/// A creature on the floor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub position: Position,
    pub facing: Direction,
    pub stats: CombatStats,
    pub alive: bool,
    types: ArrayVec<ElementType, { GameConfig::MAX_ELEMENT_TYPES }>,
    /// Element of the basic attack.
    pub attack_type: ElementType,
    skills: ArrayVec<Skill, { GameConfig::MAX_SKILLS }>,
    pub status_effects: StatusEffects,
    pub is_ally: bool,
    pub is_boss: bool,
    pub tactic: Tactic,
    pub party_slot: Option<PartySlot>,
}

impl Entity {
    /// Creates a living, `Normal`-typed entity facing down with no skills.
    pub fn new(id: EntityId, position: Position, stats: CombatStats) -> Self {
        let mut types = ArrayVec::new();
        types.push(ElementType::Normal);
        Self {
            id,
            position,
            facing: Direction::default(),
            stats,
            alive: true,
            types,
            attack_type: ElementType::Normal,
            skills: ArrayVec::new(),
            status_effects: StatusEffects::empty(),
            is_ally: false,
            is_boss: false,
            tactic: Tactic::default(),
            party_slot: None,
        }
    }

    /// Replaces the elemental types; one or two are required.
    pub fn with_types(mut self, types: &[ElementType]) -> Result<Self, ModelError> {
        if types.is_empty() {
            return Err(ModelError::NoElementTypes);
        }
        if types.len() > GameConfig::MAX_ELEMENT_TYPES {
            return Err(ModelError::TooManyElementTypes {
                count: types.len(),
                max: GameConfig::MAX_ELEMENT_TYPES,
            });
        }
        self.types = types.iter().copied().collect();
        self.attack_type = types[0];
        Ok(self)
    }

    /// Replaces the skill list; at most four are allowed.
    pub fn with_skills(mut self, skills: Vec<Skill>) -> Result<Self, ModelError> {
        if skills.len() > GameConfig::MAX_SKILLS {
            return Err(ModelError::TooManySkills {
                count: skills.len(),
                max: GameConfig::MAX_SKILLS,
            });
        }
        self.skills = skills.into_iter().collect();
        Ok(self)
    }

    /// Marks the entity as an ally in the given roster slot.
    pub fn with_party_slot(mut self, slot: u8) -> Result<Self, ModelError> {
        self.party_slot = Some(PartySlot::new(slot)?);
        self.is_ally = true;
        Ok(self)
    }

    pub fn with_attack_type(mut self, attack_type: ElementType) -> Self {
        self.attack_type = attack_type;
        self
    }

    pub fn with_tactic(mut self, tactic: Tactic) -> Self {
        self.tactic = tactic;
        self
    }

    pub fn facing(mut self, facing: Direction) -> Self {
        self.facing = facing;
        self
    }

    pub fn as_boss(mut self) -> Self {
        self.is_boss = true;
        self
    }

    pub fn types(&self) -> &[ElementType] {
        &self.types
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skills_mut(&mut self) -> &mut [Skill] {
        &mut self.skills
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Living and below `ratio` of maximum HP.
    pub fn needs_healing(&self, ratio: f32) -> bool {
        self.alive && self.stats.hp_below(ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::skill::{SkillId, SkillRange};

    #[test]
    fn party_slot_thresholds() {
        for slot in 0..4u8 {
            let slot_value = PartySlot::new(slot).unwrap();
            assert_eq!(slot_value.follow_distance(), 2 + slot as u32);
            assert_eq!(slot_value.leash_distance(), 5 + slot as u32);
        }
        assert_eq!(
            PartySlot::new(4),
            Err(ModelError::PartySlotOutOfRange { slot: 4, max: 3 })
        );
    }

    #[test]
    fn hp_above_max_is_rejected() {
        assert_eq!(
            CombatStats::new(11, 10, 1, 1, 1),
            Err(ModelError::HpAboveMax { hp: 11, max_hp: 10 })
        );
        assert!(CombatStats::new(10, 10, 1, 1, 1).is_ok());
    }

    #[test]
    fn capacities_are_enforced() {
        let stats = CombatStats::full(10, 1, 1, 1);
        let entity = Entity::new(EntityId(1), Position::ORIGIN, stats);
        let skills = (0..5)
            .map(|i| Skill::new(SkillId(i), ElementType::Normal, 10, 5, SkillRange::Adjacent))
            .collect();
        assert_eq!(
            entity.clone().with_skills(skills),
            Err(ModelError::TooManySkills { count: 5, max: 4 })
        );
        assert_eq!(
            entity.clone().with_types(&[
                ElementType::Fire,
                ElementType::Flying,
                ElementType::Dragon
            ]),
            Err(ModelError::TooManyElementTypes { count: 3, max: 2 })
        );
        assert_eq!(entity.with_types(&[]), Err(ModelError::NoElementTypes));
    }

    #[test]
    fn needs_healing_requires_life() {
        let stats = CombatStats::full(100, 1, 1, 1);
        let mut entity = Entity::new(EntityId(1), Position::ORIGIN, stats);
        entity.stats.hp = 39;
        assert!(entity.needs_healing(0.4));
        entity.stats.hp = 40;
        assert!(!entity.needs_healing(0.4));
        entity.stats.hp = 0;
        entity.alive = false;
        assert!(!entity.needs_healing(0.4));
    }

    #[test]
    fn default_tactic_is_follow_me() {
        assert_eq!(Tactic::default(), Tactic::FollowMe);
        assert_eq!(Tactic::COUNT, 4);
    }

    #[test]
    fn new_entities_are_plain_enemies() {
        let stats = CombatStats::full(80, 1, 1, 1);
        let warden = Entity::new(EntityId(7), Position::ORIGIN, stats)
            .with_attack_type(ElementType::Rock)
            .as_boss();
        assert!(warden.is_boss && !warden.is_ally);
        assert_eq!(warden.party_slot, None);
        assert_eq!(warden.attack_type, ElementType::Rock);
        assert_eq!(warden.types(), &[ElementType::Normal]);
    }
}
