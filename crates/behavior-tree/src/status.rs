//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// In a turn-stepped game every node finishes inside the tick that asked for
/// it, so there is no `Running` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Conditions: the predicate held. Actions: a decision was written.
    Success,

    /// Conditions: the predicate did not hold. Actions: nothing applicable.
    Failure,
}

impl Status {
    /// Maps a boolean predicate result onto a status.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion() {
        assert_eq!(Status::from_bool(true), Status::Success);
        assert!(Status::from_bool(true).is_success());
        assert!(Status::from_bool(false).is_failure());
    }
}
