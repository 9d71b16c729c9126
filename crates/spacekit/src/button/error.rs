//! Button configuration errors.

/// A button configuration that breaks one of the cross-field invariants.
///
/// These are the only ways [`resolve`](super::resolve) can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// `fab` was set without an `icon`.
    #[error("fab requires icon")]
    FabRequiresIcon,
    /// `fab` was set together with `children`.
    #[error("fab forbids children")]
    FabForbidsChildren,
    /// Both `forceActiveState` and `forceHoverState` were set.
    #[error("conflicting forced states")]
    ConflictingForcedStates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigurationError::FabRequiresIcon.to_string(),
            "fab requires icon"
        );
        assert_eq!(
            ConfigurationError::FabForbidsChildren.to_string(),
            "fab forbids children"
        );
        assert_eq!(
            ConfigurationError::ConflictingForcedStates.to_string(),
            "conflicting forced states"
        );
    }
}
