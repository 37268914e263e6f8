//! Capability bundles for the view adapter.
//!
//! A rendering layer drives the control through three handles: the trigger
//! button, the text input, and one row per visible option. Each exposes the
//! flags it needs to render and the handlers its events map to.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::Command;
use crate::coordinator::Effect;
use crate::error::MultiSelectResult;
use crate::keys::{self, KeyOutcome};
use crate::machine::MultiSelect;
use crate::option::OptionValue;
use crate::text::TextBuffer;

impl MultiSelect {
    /// Handle for the trigger button.
    pub fn trigger_control(&mut self) -> TriggerControl<'_> {
        TriggerControl { select: self }
    }

    /// Handle for the text input.
    pub fn input_control(&mut self) -> InputControl<'_> {
        InputControl { select: self }
    }

    /// Handle for the row showing `value`.
    pub fn option_control(&mut self, value: OptionValue) -> OptionRowControl<'_> {
        OptionRowControl {
            select: self,
            value,
        }
    }
}

/// The button that opens and closes the list.
pub struct TriggerControl<'a> {
    select: &'a mut MultiSelect,
}

impl TriggerControl<'_> {
    /// Whether the list is open (`aria-expanded`).
    pub fn expanded(&self) -> bool {
        self.select.state().open
    }

    /// Click: toggle, and focus the text input if the list is now open.
    pub fn on_click(&mut self) -> MultiSelectResult<()> {
        self.select.dispatch(Command::Toggle)?;
        if self.select.state().open {
            self.select.push_effect(Effect::FocusInput);
        }
        Ok(())
    }

    /// Any key on the trigger opens a closed list and moves focus to the input.
    pub fn on_key(&mut self) -> MultiSelectResult<()> {
        if !self.select.state().open {
            self.select.dispatch(Command::Open)?;
            self.select.push_effect(Effect::FocusInput);
        }
        Ok(())
    }

    /// Focus left the trigger.
    pub fn on_blur(&mut self) -> MultiSelectResult<()> {
        self.select.dispatch(Command::Close)
    }
}

/// The filter text field.
pub struct InputControl<'a> {
    select: &'a mut MultiSelect,
}

impl InputControl<'_> {
    /// Current filter text.
    pub fn value(&self) -> &str {
        &self.select.state().input
    }

    /// Whether the list is open (`aria-expanded`).
    pub fn expanded(&self) -> bool {
        self.select.state().open
    }

    /// The highlighted option (`aria-activedescendant`).
    pub fn active_descendant(&self) -> Option<&OptionValue> {
        self.select.state().active_option.as_ref()
    }

    /// The text changed.
    pub fn on_change(&mut self, text: impl Into<String>) -> MultiSelectResult<()> {
        self.select.dispatch(Command::SetInput(text.into()))
    }

    /// The input gained focus.
    pub fn on_focus(&mut self) -> MultiSelectResult<()> {
        self.select.dispatch(Command::Open)
    }

    /// The input lost focus.
    pub fn on_blur(&mut self) -> MultiSelectResult<()> {
        self.select.dispatch(Command::Close)
    }

    /// Pasted text is appended to the filter.
    pub fn on_paste(&mut self, text: &str) -> MultiSelectResult<()> {
        let mut buffer = TextBuffer::from_value(self.select.state().input.clone());
        buffer.insert_str(text);
        self.on_change(buffer.into_value())
    }

    /// A key was pressed in the input.
    ///
    /// Runs the keyboard mapping, then the default text editing a native
    /// field would do: characters are appended and Backspace deletes the
    /// last grapheme, unless it just removed a selection.
    pub fn on_key(&mut self, key: KeyEvent) -> MultiSelectResult<KeyOutcome> {
        let outcome = keys::handle_key(self.select, key)?;

        if key.kind == KeyEventKind::Release
            || key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Ok(outcome);
        }

        let mut buffer = TextBuffer::from_value(self.select.state().input.clone());
        let edited = match key.code {
            KeyCode::Char(c) => {
                buffer.insert(c);
                true
            }
            KeyCode::Backspace if !matches!(outcome, KeyOutcome::Toggled(_)) => buffer.backspace(),
            _ => false,
        };
        if edited {
            self.on_change(buffer.into_value())?;
        }

        Ok(outcome)
    }

    /// Key hints for the input.
    pub fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        keys::key_hints()
    }
}

/// One option row in the list.
pub struct OptionRowControl<'a> {
    select: &'a mut MultiSelect,
    value: OptionValue,
}

impl OptionRowControl<'_> {
    /// The value this row shows.
    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Whether the value is selected (`aria-selected`).
    pub fn selected(&self) -> bool {
        self.select.state().is_selected(&self.value)
    }

    /// Whether the row is highlighted.
    pub fn active(&self) -> bool {
        self.select.state().is_active(&self.value)
    }

    /// Pointer pressed on the row: toggle it and clear the filter.
    ///
    /// The adapter must keep focus on the input (suppress the default
    /// focus change) so the list stays open.
    pub fn on_pointer_down(&mut self) -> MultiSelectResult<()> {
        self.select.dispatch(Command::SetSelected(self.value.clone()))?;
        self.select.dispatch(Command::SetInput(String::new()))
    }

    /// Pointer entered the row.
    pub fn on_pointer_enter(&mut self) -> MultiSelectResult<()> {
        self.select.dispatch(Command::SetActive(Some(self.value.clone())))
    }
}
