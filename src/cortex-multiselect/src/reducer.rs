//! The interaction state machine.
//!
//! [`reduce`] is the one place state transitions happen. It is pure: the input
//! state is never touched, and a rejected command leaves the caller holding
//! the state it already had.

use crate::command::Command;
use crate::config::OpenSeeding;
use crate::error::{MultiSelectError, MultiSelectResult};
use crate::navigation::{self, Direction};
use crate::option::OptionValue;
use crate::selection;
use crate::state::MultiSelectState;

/// Apply `command` to `state` with the default OPEN policy.
pub fn reduce(state: &MultiSelectState, command: Command) -> MultiSelectResult<MultiSelectState> {
    reduce_with(state, command, OpenSeeding::default())
}

/// Apply `command` to `state`.
pub fn reduce_with(
    state: &MultiSelectState,
    command: Command,
    seeding: OpenSeeding,
) -> MultiSelectResult<MultiSelectState> {
    let mut next = state.clone();
    match command {
        Command::Open => {
            if seeding == OpenSeeding::FirstOption {
                next.active_option = state.options.first().map(|option| option.value.clone());
            }
            next.open = true;
        }
        Command::Close => next.open = false,
        Command::Toggle => next.open = !state.open,
        Command::SetInput(text) => next.input = text,
        Command::SetActive(value) => next.active_option = value,
        Command::SetSelected(value) => {
            next.selected_options = selection::toggle(&state.selected_options, &value);
        }
        Command::TargetUp(filtered) => {
            next.active_option = Some(target(state, &filtered, Direction::Up)?);
        }
        Command::TargetDown(filtered) => {
            next.active_option = Some(target(state, &filtered, Direction::Down)?);
        }
    }
    Ok(next)
}

fn target(
    state: &MultiSelectState,
    filtered: &[OptionValue],
    direction: Direction,
) -> MultiSelectResult<OptionValue> {
    navigation::next_active(state.active_option.as_ref(), filtered, direction).ok_or_else(|| {
        MultiSelectError::NavigationOutOfBounds {
            direction,
            active: state.active_option.clone(),
        }
    })
}
