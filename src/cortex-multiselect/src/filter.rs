//! Filter engine.
//!
//! Derives the visible option subset from the full option list and the current
//! input text. Matching is a case-insensitive substring test on the trimmed
//! label and trimmed input; output order always equals input order.

use crate::option::SelectOption;

/// Returns true if `label` matches the filter `input`.
///
/// Empty (or all-whitespace) input matches every label.
pub fn matches(label: &str, input: &str) -> bool {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    label.trim().to_lowercase().contains(&needle)
}

/// Returns the options matching `input`, in their original order.
pub fn filter_options<'a>(options: &'a [SelectOption], input: &str) -> Vec<&'a SelectOption> {
    filtered_indices(options, input)
        .into_iter()
        .map(|idx| &options[idx])
        .collect()
}

/// Returns indices into `options` of the entries matching `input`.
pub fn filtered_indices(options: &[SelectOption], input: &str) -> Vec<usize> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return (0..options.len()).collect();
    }
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.label.trim().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Filtered view cached against the input it was computed for.
///
/// Options are immutable for the lifetime of a control, so the input text is
/// the whole fingerprint.
#[derive(Debug, Clone, Default)]
pub struct FilterCache {
    input: Option<String>,
    indices: Vec<usize>,
}

impl FilterCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the filtered indices for `input` if it differs from the
    /// input they were last computed for.
    pub fn refresh(&mut self, options: &[SelectOption], input: &str) -> &[usize] {
        if self.input.as_deref() != Some(input) {
            self.indices = filtered_indices(options, input);
            self.input = Some(input.to_string());
        }
        &self.indices
    }

    /// Indices from the last refresh.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}
