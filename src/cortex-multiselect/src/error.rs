//! Error types for the multi-select state machine.

use crate::navigation::Direction;
use crate::option::OptionValue;

/// Result type alias for multi-select operations.
pub type MultiSelectResult<T> = std::result::Result<T, MultiSelectError>;

/// Errors raised by the multi-select core.
///
/// None of these are user-facing. They indicate a view adapter that broke the
/// dispatch contract or a host that supplied a bad configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MultiSelectError {
    /// A command outside the recognized vocabulary was dispatched.
    #[error("Invalid action type: {0}")]
    UnknownCommand(String),

    /// A recognized command arrived with a payload that could not be decoded.
    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    /// TARGET_UP/TARGET_DOWN was dispatched while already at the edge of the
    /// filtered list.
    #[error("Cannot move {direction} from {active:?}: already at the edge of the filtered options")]
    NavigationOutOfBounds {
        direction: Direction,
        active: Option<OptionValue>,
    },

    /// The configuration failed validation or could not be parsed.
    #[error("Invalid multi-select config: {0}")]
    InvalidConfig(String),
}

impl MultiSelectError {
    /// Creates a new `UnknownCommand` error.
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand(name.into())
    }

    /// Creates a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Returns true for contract violations by the dispatching code.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand(_) | Self::MalformedCommand(_) | Self::NavigationOutOfBounds { .. }
        )
    }
}
