//! Side-effect coordinator.
//!
//! Runs after every committed transition and keeps derived UI state in line
//! with the machine:
//!
//! 1. when the filtered count changes, the first filtered option becomes
//!    active (or none, when nothing matches);
//! 2. while open, an active option that is not part of the filtered view is
//!    replaced the same way;
//! 3. when the active option changes, its row is scrolled into view.
//!
//! Rules 1 and 2 produce follow-up commands rather than editing state
//! directly, so every change still goes through the reducer.

use crate::command::Command;
use crate::option::OptionValue;
use crate::scroll::ScrollState;
use crate::state::MultiSelectState;

/// Requests for the view adapter, drained after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Bring the row for `value` (at `index` in the filtered list) into view.
    /// Non-smooth, minimal movement.
    ScrollIntoView { value: OptionValue, index: usize },
    /// Move keyboard focus to the text input.
    FocusInput,
}

/// Tracks what the previous transition looked like.
#[derive(Debug, Clone)]
pub struct Coordinator {
    prev_filtered_len: usize,
    prev_active: Option<OptionValue>,
    scroll: ScrollState,
}

impl Coordinator {
    /// Create a coordinator primed with the state at mount.
    ///
    /// The filtered count at mount is the baseline, so mounting never
    /// triggers auto-activation by itself.
    pub fn new(initial: &MultiSelectState, max_visible: usize) -> Self {
        let filtered_len = initial.filtered_options().len();
        Self {
            prev_filtered_len: filtered_len,
            prev_active: initial.active_option.clone(),
            scroll: ScrollState::new(filtered_len, max_visible),
        }
    }

    /// Viewport over the filtered rows.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Observe a committed transition.
    ///
    /// `filtered` must be the filtered values for `state`. Scroll requests
    /// are appended to `effects`; the returned command, if any, must be
    /// dispatched before any other command.
    pub fn after_transition(
        &mut self,
        state: &MultiSelectState,
        filtered: &[OptionValue],
        effects: &mut Vec<Effect>,
    ) -> Option<Command> {
        self.scroll.set_total(filtered.len());

        let mut follow_up = None;
        if filtered.len() != self.prev_filtered_len {
            self.prev_filtered_len = filtered.len();
            follow_up = Some(Command::SetActive(filtered.first().cloned()));
        } else if state.open && !active_is_valid(state.active_option.as_ref(), filtered) {
            follow_up = Some(Command::SetActive(filtered.first().cloned()));
        }

        if state.active_option != self.prev_active {
            self.prev_active = state.active_option.clone();
            if let Some(value) = &state.active_option {
                if let Some(index) = filtered.iter().position(|v| v == value) {
                    self.scroll.ensure_visible(index);
                    effects.push(Effect::ScrollIntoView {
                        value: value.clone(),
                        index,
                    });
                }
            }
        }

        follow_up
    }

    /// Change the number of visible rows.
    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.scroll.set_visible(max_visible);
    }
}

fn active_is_valid(active: Option<&OptionValue>, filtered: &[OptionValue]) -> bool {
    match active {
        Some(value) => filtered.contains(value),
        None => filtered.is_empty(),
    }
}
