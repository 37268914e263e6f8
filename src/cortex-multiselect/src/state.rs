//! Interaction state of one multi-select control.

use std::sync::Arc;

use serde::Serialize;

use crate::filter;
use crate::option::{OptionValue, SelectOption};
use crate::selection;

/// The single authoritative state aggregate.
///
/// Only the reducer produces new values of this type. Derived views
/// (filtered options, selected labels) are computed from it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSelectState {
    /// Full option list, shared and never mutated
    pub options: Arc<[SelectOption]>,
    /// Current filter text
    pub input: String,
    /// Whether the option list is open
    pub open: bool,
    /// Highlighted option for keyboard selection
    pub active_option: Option<OptionValue>,
    /// Selected values in selection order, no duplicates
    pub selected_options: Vec<OptionValue>,
}

impl MultiSelectState {
    /// Initial state for a freshly mounted control.
    pub fn new(options: impl Into<Arc<[SelectOption]>>) -> Self {
        Self {
            options: options.into(),
            input: String::new(),
            open: false,
            active_option: None,
            selected_options: Vec::new(),
        }
    }

    /// Options matching the current input, in original order.
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        filter::filter_options(&self.options, &self.input)
    }

    /// Values of the options matching the current input.
    pub fn filtered_values(&self) -> Vec<OptionValue> {
        self.filtered_options()
            .into_iter()
            .map(|option| option.value.clone())
            .collect()
    }

    /// Labels of the selected options joined by `separator`.
    pub fn selected_labels(&self, separator: &str) -> String {
        selection::selected_labels(&self.options, &self.selected_options, separator)
    }

    /// Returns true if `value` is selected.
    pub fn is_selected(&self, value: &OptionValue) -> bool {
        selection::is_selected(&self.selected_options, value)
    }

    /// Returns true if `value` is the active option.
    pub fn is_active(&self, value: &OptionValue) -> bool {
        self.active_option.as_ref() == Some(value)
    }

    /// The most recently selected value.
    pub fn last_selected(&self) -> Option<&OptionValue> {
        selection::last_selected(&self.selected_options)
    }
}
