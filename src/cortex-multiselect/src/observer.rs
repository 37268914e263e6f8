//! Hooks for hosts that watch the state machine.
//!
//! A [`StateObserver`] receives the committed state after every transition,
//! which is how a host reads selection results. A [`TraceSink`] is optional
//! diagnostic instrumentation; [`TracingSink`] forwards to `tracing`.

use crate::command::Command;
use crate::error::MultiSelectError;
use crate::state::MultiSelectState;

/// Receives the full state after each committed transition.
pub trait StateObserver {
    /// Called once per committed transition, follow-ups included.
    fn on_change(&mut self, state: &MultiSelectState);
}

impl<F> StateObserver for F
where
    F: FnMut(&MultiSelectState),
{
    fn on_change(&mut self, state: &MultiSelectState) {
        self(state)
    }
}

/// Diagnostic hook for commands and resulting states.
///
/// Never required for correctness; all methods default to doing nothing.
pub trait TraceSink {
    /// A command is about to be reduced.
    fn on_command(&self, _command: &Command) {}

    /// A command was reduced and committed.
    fn on_state(&self, _command: &Command, _state: &MultiSelectState) {}

    /// A command was rejected; state is unchanged.
    fn on_rejected(&self, _command: &Command, _error: &MultiSelectError) {}
}

/// Trace sink that emits `tracing` events at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn on_command(&self, command: &Command) {
        tracing::debug!(command = command.name(), ?command, "multiselect command");
    }

    fn on_state(&self, command: &Command, state: &MultiSelectState) {
        tracing::debug!(
            command = command.name(),
            open = state.open,
            input = %state.input,
            active = ?state.active_option,
            selected = state.selected_options.len(),
            "multiselect state"
        );
    }

    fn on_rejected(&self, command: &Command, error: &MultiSelectError) {
        tracing::debug!(command = command.name(), %error, "multiselect command rejected");
    }
}
