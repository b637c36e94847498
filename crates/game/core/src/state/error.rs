//! Data model validation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::types::SkillId;

/// Errors raised when constructing entities, skills or party slots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelError {
    /// Remaining PP set above the skill's maximum.
    #[error("skill {skill:?} PP {current} exceeds maximum {max}")]
    PpAboveMax {
        skill: SkillId,
        current: u32,
        max: u32,
    },

    /// Current HP set above maximum HP.
    #[error("HP {hp} exceeds maximum {max_hp}")]
    HpAboveMax { hp: u32, max_hp: u32 },

    /// More skills than an entity can learn.
    #[error("{count} skills given (max: {max})")]
    TooManySkills { count: usize, max: usize },

    /// More elemental types than an entity can carry.
    #[error("{count} element types given (max: {max})")]
    TooManyElementTypes { count: usize, max: usize },

    /// Entities carry at least one elemental type.
    #[error("at least one element type is required")]
    NoElementTypes,

    /// Party slot outside `0..=max`.
    #[error("party slot {slot} is out of range (max: {max})")]
    PartySlotOutOfRange { slot: u8, max: u8 },
}

impl GameError for ModelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ModelError::*;
        match self {
            PpAboveMax { .. } => "MODEL_PP_ABOVE_MAX",
            HpAboveMax { .. } => "MODEL_HP_ABOVE_MAX",
            TooManySkills { .. } => "MODEL_TOO_MANY_SKILLS",
            TooManyElementTypes { .. } => "MODEL_TOO_MANY_ELEMENT_TYPES",
            NoElementTypes => "MODEL_NO_ELEMENT_TYPES",
            PartySlotOutOfRange { .. } => "MODEL_PARTY_SLOT_OUT_OF_RANGE",
        }
    }
}
