//! Selection set operations.
//!
//! The selection is an ordered list of distinct values; insertion order is
//! selection order and only matters for display.

use crate::option::{OptionValue, SelectOption};

/// Toggle `value` in `selected`.
///
/// Removes it if present (keeping the relative order of the rest), otherwise
/// appends it at the end.
pub fn toggle(selected: &[OptionValue], value: &OptionValue) -> Vec<OptionValue> {
    if is_selected(selected, value) {
        selected.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.clone());
        next
    }
}

/// Returns true if `value` is in the selection.
pub fn is_selected(selected: &[OptionValue], value: &OptionValue) -> bool {
    selected.contains(value)
}

/// The most recently selected value.
pub fn last_selected(selected: &[OptionValue]) -> Option<&OptionValue> {
    selected.last()
}

/// Labels of the selected values in selection order, joined by `separator`.
///
/// Values with no matching option are skipped.
pub fn selected_labels(options: &[SelectOption], selected: &[OptionValue], separator: &str) -> String {
    selected
        .iter()
        .filter_map(|value| {
            options
                .iter()
                .find(|option| &option.value == value)
                .map(|option| option.label.as_str())
        })
        .collect::<Vec<_>>()
        .join(separator)
}
