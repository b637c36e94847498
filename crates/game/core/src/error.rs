//! Error classification shared across the workspace.
//!
//! Each module owns its error enum (`ModelError` next to the data model,
//! `OracleError` next to the terrain grid, `MoveError` in the party driver).
//! They all report through [`GameError`] so callers can decide whether to
//! retry, reject, or abort without matching on concrete types.

/// How a caller should react to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The world changed under the caller; another choice may succeed.
    ///
    /// Example: a teammate stepped onto the destination first.
    Recoverable,

    /// The input itself is malformed and will fail again unchanged.
    ///
    /// Example: PP above maximum, party slot past the roster.
    Validation,

    /// Engine invariants were broken.
    Internal,

    /// The snapshot cannot be used any further.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True for severities that point at a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error enum in the workspace.
///
/// Derive `Display` with `thiserror` and classify by what the caller can do
/// about the error, not by how bad it looks.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs and telemetry; defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
