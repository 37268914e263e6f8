//! Grapheme-aware editing of the filter text.
//!
//! The state machine only stores the input string. Hosts that receive raw key
//! events (a terminal, for instance) edit it through a [`TextBuffer`] and
//! dispatch the result as SET_INPUT. Editing happens at the end of the text:
//! characters are appended and Backspace removes the last grapheme.

use unicode_segmentation::UnicodeSegmentation;

/// Filter text being edited at its end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
}

impl TextBuffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `value`.
    pub fn from_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the buffer, returning its text.
    pub fn into_value(self) -> String {
        self.value
    }

    /// Append a character.
    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    /// Append text (for paste).
    pub fn insert_str(&mut self, text: &str) {
        self.value.push_str(text);
    }

    /// Delete the last grapheme. Returns true if text changed.
    pub fn backspace(&mut self) -> bool {
        match self.value.grapheme_indices(true).next_back() {
            Some((start, _)) => {
                self.value.truncate(start);
                true
            }
            None => false,
        }
    }
}
