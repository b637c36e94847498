//! Skill selection for an ally that has chosen to act.
//!
//! The selector answers one question: which of the ally's skills to use this
//! tick, if any. `None` means a basic attack against the target (or nothing
//! when there is no target).
//!
//! # Priorities
//!
//! | Tactic      | Order                                                   |
//! |-------------|---------------------------------------------------------|
//! | Scatter     | uniform pick among usable skills                        |
//! | FollowMe    | heal → buff (target not adjacent) → super-effective → roll for best |
//! | GoAfterFoes | heal → AtkUp (target not adjacent) → super-effective → best |
//! | StayHere    | heal (60%) → any buff → best                            |

pub mod queries;

use game_core::spatial::{chebyshev_distance, is_adjacent};
use game_core::{AiConfig, Entity, Skill, StatusEffectKind, Tactic, TypeChartOracle};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use self::queries::{
    buff_skill, find_best_attack_skill, find_super_effective_skill, heal_skill,
    party_member_critical,
};

const ANY_BUFF: [StatusEffectKind; 2] = [StatusEffectKind::AtkUp, StatusEffectKind::DefUp];
const ATTACK_BUFF: [StatusEffectKind; 1] = [StatusEffectKind::AtkUp];

/// Everything the selector looks at for one ally.
#[derive(Clone, Copy)]
pub struct SkillQuery<'a> {
    pub ally: &'a Entity,
    /// Attack target chosen by the dispatcher, if any.
    pub target: Option<&'a Entity>,
    /// Party members, used to spot critically hurt teammates.
    pub party_allies: &'a [Entity],
    pub player: &'a Entity,
    pub tactic: Tactic,
    pub chart: &'a dyn TypeChartOracle,
}

/// Picks the skill an ally uses this tick.
#[derive(Clone, Debug, Default)]
pub struct SkillSelector {
    config: AiConfig,
}

impl SkillSelector {
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    /// Returns the skill to use, or `None` for a basic attack.
    ///
    /// Never returns a skill with no PP left.
    pub fn select<'a>(
        &self,
        query: &SkillQuery<'a>,
        rng: &mut dyn RngCore,
    ) -> Option<&'a Skill> {
        let chosen = match query.tactic {
            Tactic::Scatter => self.select_random(query, rng),
            Tactic::FollowMe => self.select_follow_me(query, rng),
            Tactic::GoAfterFoes => self.select_go_after_foes(query),
            Tactic::StayHere => self.select_stay_here(query),
        };

        tracing::debug!(
            "Ally {} {:?} skill: {:?}",
            query.ally.id,
            query.tactic,
            chosen.map(|skill| skill.id)
        );
        chosen
    }

    fn select_random<'a>(
        &self,
        query: &SkillQuery<'a>,
        rng: &mut dyn RngCore,
    ) -> Option<&'a Skill> {
        let wants_heal = query.ally.needs_healing(self.config.self_heal_ratio);
        let usable: Vec<&'a Skill> = query
            .ally
            .skills()
            .iter()
            .filter(|skill| skill.is_usable() && (wants_heal || !skill.heals()))
            .collect();
        usable.choose(rng).copied()
    }

    fn select_follow_me<'a>(
        &self,
        query: &SkillQuery<'a>,
        rng: &mut dyn RngCore,
    ) -> Option<&'a Skill> {
        let ally = query.ally;
        if ally.needs_healing(self.config.self_heal_ratio) || self.should_support(query) {
            if let Some(heal) = heal_skill(ally) {
                return Some(heal);
            }
        }

        if !self.target_adjacent(query) {
            if let Some(buff) = buff_skill(ally, &ANY_BUFF) {
                return Some(buff);
            }
        }

        let target = query.target?;
        if let Some(skill) = find_super_effective_skill(ally, target, query.chart) {
            return Some(skill);
        }

        let chance = self.config.skill_use_probability();
        if rng.gen_bool(chance) {
            find_best_attack_skill(ally, target, query.chart)
        } else {
            None
        }
    }

    fn select_go_after_foes<'a>(&self, query: &SkillQuery<'a>) -> Option<&'a Skill> {
        let ally = query.ally;
        if ally.needs_healing(self.config.self_heal_ratio) {
            if let Some(heal) = heal_skill(ally) {
                return Some(heal);
            }
        }

        if !self.target_adjacent(query) {
            if let Some(buff) = buff_skill(ally, &ATTACK_BUFF) {
                return Some(buff);
            }
        }

        let target = query.target?;
        find_super_effective_skill(ally, target, query.chart)
            .or_else(|| find_best_attack_skill(ally, target, query.chart))
    }

    fn select_stay_here<'a>(&self, query: &SkillQuery<'a>) -> Option<&'a Skill> {
        let ally = query.ally;
        if ally.needs_healing(self.config.hold_heal_ratio) {
            if let Some(heal) = heal_skill(ally) {
                return Some(heal);
            }
        }

        if let Some(buff) = buff_skill(ally, &ANY_BUFF) {
            return Some(buff);
        }

        let target = query.target?;
        find_best_attack_skill(ally, target, query.chart)
    }

    /// FollowMe's extra reasons to heal: an adjacent hurt player, or a
    /// critically hurt teammate nearby.
    fn should_support(&self, query: &SkillQuery<'_>) -> bool {
        let ally = query.ally;
        let config = &self.config;

        let escorting = query.player.needs_healing(config.player_hurt_ratio)
            && is_adjacent(ally.position, query.player.position)
            && ally.needs_healing(config.escort_heal_ratio);

        let supporting = party_member_critical(
            ally,
            query.party_allies,
            config.party_critical_ratio,
            config.support_radius,
        ) && ally.needs_healing(config.support_heal_ratio);

        escorting || supporting
    }

    /// True when the target stands within one tile.
    fn target_adjacent(&self, query: &SkillQuery<'_>) -> bool {
        query
            .target
            .is_some_and(|target| chebyshev_distance(query.ally.position, target.position) <= 1)
    }
}
