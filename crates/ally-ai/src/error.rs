//! Errors raised while applying ally decisions to a party.

use game_core::{Direction, EntityId, ErrorSeverity, GameError, Position};

/// A decided move that no longer holds when applied.
///
/// Allies are applied one after another, so a step chosen against an earlier
/// snapshot can be invalidated by a teammate moving first. The ally stays in
/// place.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("ally {ally} cannot enter {destination}: blocked or unwalkable")]
    Blocked {
        ally: EntityId,
        destination: Position,
    },

    #[error("ally {ally} cannot cut the corner moving {direction:?} from {from}")]
    CornerCut {
        ally: EntityId,
        from: Position,
        direction: Direction,
    },

    #[error("entity {ally} is not in the party")]
    NotInParty { ally: EntityId },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Blocked { .. } | Self::CornerCut { .. } => ErrorSeverity::Recoverable,
            Self::NotInParty { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Blocked { .. } => "MOVE_BLOCKED",
            Self::CornerCut { .. } => "MOVE_CORNER_CUT",
            Self::NotInParty { .. } => "MOVE_NOT_IN_PARTY",
        }
    }
}
