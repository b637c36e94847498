//! Status effects carried by entities.
//!
//! # Turn-based Duration
//!
//! Each effect stores the number of turns it has left. [`StatusEffects::tick`]
//! runs once per global turn and drops effects that reach zero, so an effect
//! added with `turns = 3` is visible for three turns.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectKind {
    // ========================================================================
    // Buffs (self-granted)
    // ========================================================================
    /// Attack raised.
    AtkUp,

    /// Defense raised.
    DefUp,

    // ========================================================================
    // Debuffs (inflicted on hit)
    // ========================================================================
    /// HP loss over time.
    Burn,

    /// May lose turns.
    Paralyze,
}

impl StatusEffectKind {
    pub const fn is_buff(self) -> bool {
        matches!(self, StatusEffectKind::AtkUp | StatusEffectKind::DefUp)
    }
}

/// A single status effect with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    pub turns_remaining: u32,
}

/// Active status effects on an entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Remaining turns of an active effect.
    pub fn turns_remaining(&self, kind: StatusEffectKind) -> Option<u32> {
        self.effects
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.turns_remaining)
    }

    /// Adds a status effect lasting `turns` turns.
    ///
    /// If the effect already exists, keeps the longer duration. A zero
    /// duration is ignored, as is a new kind when the set is full.
    ///
    /// # Returns
    ///
    /// `true` if the effect is active afterwards.
    pub fn add(&mut self, kind: StatusEffectKind, turns: u32) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.turns_remaining = existing.turns_remaining.max(turns);
            return true;
        }

        if turns == 0 || self.effects.is_full() {
            return false;
        }
        self.effects.push(StatusEffect {
            kind,
            turns_remaining: turns,
        });
        true
    }

    /// Advances every effect by one turn and drops those that expire.
    pub fn tick(&mut self) {
        for effect in self.effects.iter_mut() {
            effect.turns_remaining = effect.turns_remaining.saturating_sub(1);
        }
        self.effects.retain(|e| e.turns_remaining > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
