//! Tactic dispatcher: picks movement and attack target for one ally.

use behavior_tree::Behavior;
use game_core::{AiConfig, Entity, PartySlot, Tactic};
use rand::RngCore;

use crate::context::{Decision, TacticContext, World};
use crate::subtrees;

/// Runs the behavior tree for an ally's tactic.
///
/// The dispatcher owns nothing but configuration; every call builds a fresh
/// tree and context, so it can be shared freely between allies and threads.
#[derive(Clone, Debug, Default)]
pub struct TacticDispatcher {
    config: AiConfig,
}

impl TacticDispatcher {
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Decides where `ally` moves and whom it attacks this tick.
    ///
    /// Always returns a decision; an ally with nothing to do idles.
    pub fn decide(
        &self,
        ally: &Entity,
        world: World<'_>,
        slot: PartySlot,
        tactic: Tactic,
        rng: &mut dyn RngCore,
    ) -> Decision {
        let tree = subtrees::tree_for(tactic, &self.config);
        let mut ctx = TacticContext::new(ally, world, slot, &self.config, rng);

        tree.tick(&mut ctx);
        if !ctx.has_decision() {
            tracing::warn!(
                "Ally {} - {:?} tree produced no decision, idling",
                ally.id,
                tactic
            );
        }

        let decision = ctx.take_decision();
        tracing::debug!(
            "Ally {} (slot {}) {:?} → {:?}",
            ally.id,
            slot.index(),
            tactic,
            decision
        );
        decision
    }
}
