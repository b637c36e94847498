//! Skills known by entities.

use super::element::ElementType;
use super::status::StatusEffectKind;
use crate::state::error::ModelError;

/// Identifier of a skill definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u16);

/// Area a skill reaches from its user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillRange {
    /// Affects only the user.
    SelfOnly,
    /// Hits the tile in front of the user.
    Adjacent,
    /// Travels in a straight line.
    Line,
    /// Hits everything in the room.
    Room,
}

/// Secondary effect of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// Restores `percent` of the user's maximum HP.
    Heal { percent: u8 },
    /// Grants a status effect to the user.
    Grant(StatusEffectKind),
    /// Inflicts a status effect on the target.
    Inflict(StatusEffectKind),
}

/// A skill instance with its own PP counter.
///
/// `current_pp` never exceeds `max_pp`; the counter is only changed through
/// [`Skill::set_current_pp`] and [`Skill::spend_pp`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub element: ElementType,
    /// Base power; zero marks a non-damaging skill.
    pub power: u32,
    pub range: SkillRange,
    /// Hit chance in percent.
    pub accuracy: u8,
    pub effect: Option<SkillEffect>,
    /// Chance in percent that `effect` triggers on hit.
    pub effect_chance: Option<u8>,
    max_pp: u32,
    current_pp: u32,
}

impl Skill {
    pub const DEFAULT_ACCURACY: u8 = 100;

    /// Creates a skill with full PP and no secondary effect.
    pub fn new(
        id: SkillId,
        element: ElementType,
        power: u32,
        max_pp: u32,
        range: SkillRange,
    ) -> Self {
        Self {
            id,
            element,
            power,
            range,
            accuracy: Self::DEFAULT_ACCURACY,
            effect: None,
            effect_chance: None,
            max_pp,
            current_pp: max_pp,
        }
    }

    /// Self-targeted heal restoring `percent` of maximum HP.
    pub fn heal(id: SkillId, element: ElementType, percent: u8, max_pp: u32) -> Self {
        Self::new(id, element, 0, max_pp, SkillRange::SelfOnly)
            .with_effect(SkillEffect::Heal { percent })
    }

    /// Self-targeted buff granting `kind`.
    pub fn buff(id: SkillId, element: ElementType, kind: StatusEffectKind, max_pp: u32) -> Self {
        Self::new(id, element, 0, max_pp, SkillRange::SelfOnly)
            .with_effect(SkillEffect::Grant(kind))
    }

    pub fn with_effect(mut self, effect: SkillEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_on_hit(mut self, kind: StatusEffectKind, chance: u8) -> Self {
        self.effect = Some(SkillEffect::Inflict(kind));
        self.effect_chance = Some(chance);
        self
    }

    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the remaining PP, rejecting values above the maximum.
    pub fn with_current_pp(mut self, current_pp: u32) -> Result<Self, ModelError> {
        self.set_current_pp(current_pp)?;
        Ok(self)
    }

    pub fn set_current_pp(&mut self, current_pp: u32) -> Result<(), ModelError> {
        if current_pp > self.max_pp {
            return Err(ModelError::PpAboveMax {
                skill: self.id,
                current: current_pp,
                max: self.max_pp,
            });
        }
        self.current_pp = current_pp;
        Ok(())
    }

    /// Consumes one PP.
    ///
    /// # Returns
    ///
    /// `false` if the skill had no PP left.
    pub fn spend_pp(&mut self) -> bool {
        if self.current_pp == 0 {
            return false;
        }
        self.current_pp -= 1;
        true
    }

    pub fn current_pp(&self) -> u32 {
        self.current_pp
    }

    pub fn max_pp(&self) -> u32 {
        self.max_pp
    }

    /// True while the skill has PP left.
    pub fn is_usable(&self) -> bool {
        self.current_pp > 0
    }

    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }

    pub fn is_self_targeted(&self) -> bool {
        self.range == SkillRange::SelfOnly
    }

    pub fn heals(&self) -> bool {
        matches!(self.effect, Some(SkillEffect::Heal { .. }))
    }

    /// Status effect this skill grants its user, if any.
    pub fn granted_effect(&self) -> Option<StatusEffectKind> {
        match self.effect {
            Some(SkillEffect::Grant(kind)) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pp_cannot_exceed_max() {
        let skill = Skill::new(SkillId(1), ElementType::Fire, 40, 10, SkillRange::Adjacent);
        assert_eq!(skill.current_pp(), 10);

        let err = skill.clone().with_current_pp(11).unwrap_err();
        assert_eq!(
            err,
            ModelError::PpAboveMax {
                skill: SkillId(1),
                current: 11,
                max: 10
            }
        );
        assert_eq!(skill.with_current_pp(0).unwrap().current_pp(), 0);
    }

    #[test]
    fn spending_stops_at_zero() {
        let mut skill = Skill::new(SkillId(2), ElementType::Water, 40, 1, SkillRange::Line);
        assert!(skill.spend_pp());
        assert!(!skill.is_usable());
        assert!(!skill.spend_pp());
        assert_eq!(skill.current_pp(), 0);
    }

    #[test]
    fn heal_and_buff_constructors_are_self_targeted() {
        let heal = Skill::heal(SkillId(3), ElementType::Normal, 50, 5);
        assert!(heal.heals() && heal.is_self_targeted() && !heal.is_damaging());

        let buff = Skill::buff(SkillId(4), ElementType::Normal, StatusEffectKind::AtkUp, 5);
        assert_eq!(buff.granted_effect(), Some(StatusEffectKind::AtkUp));
        assert!(!buff.heals());
    }

    #[test]
    fn on_hit_effects_do_not_stop_a_skill_from_damaging() {
        let ember = Skill::new(SkillId(5), ElementType::Fire, 40, 25, SkillRange::Adjacent)
            .with_on_hit(StatusEffectKind::Burn, 10)
            .with_accuracy(95);
        assert!(ember.is_damaging());
        assert_eq!(ember.effect, Some(SkillEffect::Inflict(StatusEffectKind::Burn)));
        assert_eq!(ember.effect_chance, Some(10));
        assert_eq!(ember.accuracy, 95);
        assert_eq!(ember.granted_effect(), None);
    }
}
