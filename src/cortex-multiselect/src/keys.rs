//! Keyboard mapping for the text input.
//!
//! Translates key events into commands:
//!
//! | Key | Effect |
//! |-----|--------|
//! | ↓ / ↑ | open if closed, then move the highlight (never past the ends) |
//! | Enter | toggle the highlighted option and clear the input (only if already open) |
//! | Esc / Tab | close |
//! | Backspace | with empty input, remove the most recent selection |
//! | letters, digits | open if closed |
//!
//! Anything else dispatches nothing. Text insertion and ordinary deletion are
//! not part of this mapping; see [`InputControl`](crate::controls::InputControl).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::Command;
use crate::error::MultiSelectResult;
use crate::machine::MultiSelect;
use crate::navigation::{Direction, at_boundary};
use crate::option::OptionValue;

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a key the control reacts to; nothing was dispatched
    Ignored,
    /// Recognized; any resulting commands were dispatched
    Handled,
    /// The value was toggled in the selection
    Toggled(OptionValue),
    /// The option list was closed
    Closed,
}

impl KeyOutcome {
    /// Returns true if the key was recognized.
    pub fn is_handled(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Keys the control recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Move(Direction),
    Enter,
    Close,
    Backspace,
    Edit,
}

fn classify(key: &KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Down => Some(KeyAction::Move(Direction::Down)),
        KeyCode::Up => Some(KeyAction::Move(Direction::Up)),
        KeyCode::Enter => Some(KeyAction::Enter),
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => Some(KeyAction::Close),
        KeyCode::Backspace => Some(KeyAction::Backspace),
        KeyCode::Char(c)
            if c.is_alphanumeric()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(KeyAction::Edit)
        }
        _ => None,
    }
}

/// Apply the keyboard mapping for `key`.
pub fn handle_key(select: &mut MultiSelect, key: KeyEvent) -> MultiSelectResult<KeyOutcome> {
    let Some(action) = classify(&key) else {
        return Ok(KeyOutcome::Ignored);
    };

    if action == KeyAction::Close {
        select.dispatch(Command::Close)?;
        return Ok(KeyOutcome::Closed);
    }

    let was_open = select.state().open;
    if !was_open {
        select.dispatch(Command::Open)?;
    }

    match action {
        KeyAction::Move(direction) => {
            let filtered = select.filtered_values();
            if !at_boundary(select.state().active_option.as_ref(), &filtered, direction) {
                let command = match direction {
                    Direction::Up => Command::TargetUp(filtered),
                    Direction::Down => Command::TargetDown(filtered),
                };
                select.dispatch(command)?;
            }
            Ok(KeyOutcome::Handled)
        }
        KeyAction::Enter => {
            // The OPEN above does not count; Enter only acts on a list the
            // user could already see.
            let Some(active) = select.state().active_option.clone().filter(|_| was_open) else {
                return Ok(KeyOutcome::Handled);
            };
            select.dispatch(Command::SetSelected(active.clone()))?;
            select.dispatch(Command::SetInput(String::new()))?;
            Ok(KeyOutcome::Toggled(active))
        }
        KeyAction::Backspace => {
            let state = select.state();
            if !state.input.is_empty() {
                return Ok(KeyOutcome::Handled);
            }
            let Some(last) = state.last_selected().cloned() else {
                return Ok(KeyOutcome::Handled);
            };
            select.dispatch(Command::SetSelected(last.clone()))?;
            Ok(KeyOutcome::Toggled(last))
        }
        KeyAction::Edit | KeyAction::Close => Ok(KeyOutcome::Handled),
    }
}

/// Key hints for the text input, as (key label, description) pairs.
pub fn key_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("↑↓", "Navigate"),
        ("Enter", "Toggle"),
        ("Backspace", "Remove last"),
        ("Esc", "Close"),
    ]
}
