//! Oracle construction errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors raised while building terrain snapshots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Position is outside the map bounds.
    #[error("position {0:?} is out of map bounds")]
    PositionOutOfBounds(Position),

    /// Map row has a different width than the first row.
    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Unrecognized terrain glyph.
    #[error("unknown terrain glyph {glyph:?} at {position:?}")]
    UnknownGlyph { glyph: char, position: Position },
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            PositionOutOfBounds(_) => "ORACLE_POSITION_OUT_OF_BOUNDS",
            RaggedRow { .. } => "ORACLE_RAGGED_ROW",
            UnknownGlyph { .. } => "ORACLE_UNKNOWN_GLYPH",
        }
    }
}
