//! Skill lookups shared by every tactic's selection rules.
//!
//! Every query skips skills with no PP left, so nothing returned here is ever
//! exhausted.

use game_core::spatial::chebyshev_distance;
use game_core::{Entity, Skill, StatusEffectKind, TypeChartOracle};

/// Type multiplier at which a skill counts as super-effective.
pub const SUPER_EFFECTIVE: f32 = 2.0;

/// First usable self-heal.
pub fn heal_skill(ally: &Entity) -> Option<&Skill> {
    ally.skills()
        .iter()
        .find(|skill| skill.is_self_targeted() && skill.is_usable() && skill.heals())
}

/// First usable self-buff granting one of `allowed` that is not already active.
pub fn buff_skill<'a>(
    ally: &'a Entity,
    allowed: &[StatusEffectKind],
) -> Option<&'a Skill> {
    ally.skills().iter().find(|skill| {
        skill.is_self_targeted()
            && skill.is_usable()
            && skill.granted_effect().is_some_and(|kind| {
                allowed.contains(&kind) && !ally.status_effects.has(kind)
            })
    })
}

/// Combined multiplier of `skill` against every type of `target`.
fn multiplier(skill: &Skill, target: &Entity, chart: &dyn TypeChartOracle) -> f32 {
    chart.effectiveness(skill.element, target.types())
}

/// First usable damaging skill hitting `target` for at least double damage.
pub fn find_super_effective_skill<'a>(
    ally: &'a Entity,
    target: &Entity,
    chart: &dyn TypeChartOracle,
) -> Option<&'a Skill> {
    ally.skills().iter().find(|skill| {
        skill.is_usable()
            && skill.is_damaging()
            && multiplier(skill, target, chart) >= SUPER_EFFECTIVE
    })
}

/// Usable damaging skill with the highest `power × multiplier` against `target`.
///
/// Skills the target is immune to are never picked. Ties keep the earlier skill.
pub fn find_best_attack_skill<'a>(
    ally: &'a Entity,
    target: &Entity,
    chart: &dyn TypeChartOracle,
) -> Option<&'a Skill> {
    let mut best: Option<(&'a Skill, f32)> = None;
    for skill in ally.skills() {
        if !skill.is_usable() || !skill.is_damaging() {
            continue;
        }
        let mult = multiplier(skill, target, chart);
        if mult <= 0.0 {
            continue;
        }
        let score = skill.power as f32 * mult;
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((skill, score));
        }
    }

    if let Some((skill, score)) = best {
        tracing::trace!(
            "Best attack for {} against {}: {:?} (score {})",
            ally.id,
            target.id,
            skill.id,
            score
        );
    }
    best.map(|(skill, _)| skill)
}

/// True if another living party member within `radius` is below `ratio` HP.
pub fn party_member_critical(
    ally: &Entity,
    party_allies: &[Entity],
    ratio: f32,
    radius: u32,
) -> bool {
    party_allies.iter().any(|other| {
        other.id != ally.id
            && other.needs_healing(ratio)
            && chebyshev_distance(ally.position, other.position) <= radius
    })
}
