//! The multi-select controller.
//!
//! [`MultiSelect`] owns one control's state and is the single place commands
//! are applied. Each dispatch runs the reducer, lets the coordinator react,
//! and notifies the observer, draining coordinator follow-ups before
//! returning so the next user command always sees a settled state.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::command::Command;
use crate::config::MultiSelectConfig;
use crate::coordinator::{Coordinator, Effect};
use crate::error::MultiSelectResult;
use crate::filter::FilterCache;
use crate::observer::{StateObserver, TraceSink};
use crate::option::{OptionValue, SelectOption};
use crate::reducer::reduce_with;
use crate::scroll::ScrollState;
use crate::state::MultiSelectState;

/// A searchable multi-select control.
///
/// # Example
///
/// ```rust
/// use cortex_multiselect::{Command, MultiSelect, OptionValue, SelectOption};
///
/// let mut select = MultiSelect::new(vec![
///     SelectOption::new("one", 1),
///     SelectOption::new("on", 2),
///     SelectOption::new("two", 3),
/// ]);
///
/// select.dispatch(Command::Open).unwrap();
/// select.dispatch(Command::SetInput("tw".into())).unwrap();
///
/// // The coordinator moved the highlight onto the only visible option.
/// assert_eq!(select.state().active_option, Some(OptionValue::from(3)));
///
/// select.dispatch(Command::SetSelected(OptionValue::from(3))).unwrap();
/// assert_eq!(select.selected_labels(), "two");
/// ```
pub struct MultiSelect {
    state: MultiSelectState,
    config: MultiSelectConfig,
    coordinator: Coordinator,
    filter: FilterCache,
    observer: Option<Box<dyn StateObserver>>,
    trace: Option<Box<dyn TraceSink>>,
    effects: Vec<Effect>,
}

impl MultiSelect {
    /// Mount a control over `options` with the default config.
    pub fn new(options: impl Into<Arc<[SelectOption]>>) -> Self {
        let config = MultiSelectConfig::default();
        let state = MultiSelectState::new(options);
        let coordinator = Coordinator::new(&state, config.max_visible);
        let mut filter = FilterCache::new();
        filter.refresh(&state.options, &state.input);
        Self {
            state,
            config,
            coordinator,
            filter,
            observer: None,
            trace: None,
            effects: Vec::new(),
        }
    }

    /// Use `config` instead of the defaults.
    ///
    /// The config is validated the same way a loaded one is.
    pub fn with_config(mut self, config: MultiSelectConfig) -> MultiSelectResult<Self> {
        config.validate()?;
        self.coordinator.set_max_visible(config.max_visible);
        self.config = config;
        Ok(self)
    }

    /// Register an observer for committed states.
    pub fn with_observer(mut self, observer: impl StateObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Install a diagnostic trace sink.
    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.trace = Some(Box::new(sink));
        self
    }

    /// Replace or remove the observer.
    pub fn set_observer(&mut self, observer: Option<Box<dyn StateObserver>>) {
        self.observer = observer;
    }

    /// Apply a command and everything the coordinator derives from it.
    ///
    /// A rejected command leaves the state exactly as it was.
    pub fn dispatch(&mut self, command: Command) -> MultiSelectResult<()> {
        let mut queue = VecDeque::from([command]);

        while let Some(command) = queue.pop_front() {
            if let Some(trace) = &self.trace {
                trace.on_command(&command);
            }

            let next = match reduce_with(&self.state, command.clone(), self.config.open_seeding) {
                Ok(next) => next,
                Err(err) => {
                    tracing::warn!(command = command.name(), %err, "Rejected multiselect command");
                    if let Some(trace) = &self.trace {
                        trace.on_rejected(&command, &err);
                    }
                    return Err(err);
                }
            };
            self.state = next;

            let filtered = self.filtered_values();
            if let Some(follow_up) =
                self.coordinator
                    .after_transition(&self.state, &filtered, &mut self.effects)
            {
                queue.push_back(follow_up);
            }

            if let Some(trace) = &self.trace {
                trace.on_state(&command, &self.state);
            }
            if let Some(observer) = self.observer.as_mut() {
                observer.on_change(&self.state);
            }
        }

        Ok(())
    }

    /// Current committed state.
    pub fn state(&self) -> &MultiSelectState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &MultiSelectConfig {
        &self.config
    }

    /// Full option list.
    pub fn options(&self) -> &[SelectOption] {
        &self.state.options
    }

    /// Options matching the current input, in original order.
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        self.filter
            .indices()
            .iter()
            .map(|&idx| &self.state.options[idx])
            .collect()
    }

    /// Values of the options matching the current input.
    pub fn filtered_values(&mut self) -> Vec<OptionValue> {
        let options = &self.state.options;
        self.filter
            .refresh(options, &self.state.input)
            .iter()
            .map(|&idx| options[idx].value.clone())
            .collect()
    }

    /// Selected labels joined with the configured separator.
    pub fn selected_labels(&self) -> String {
        self.state.selected_labels(&self.config.label_separator)
    }

    /// Viewport over the filtered rows.
    pub fn scroll(&self) -> &ScrollState {
        self.coordinator.scroll()
    }

    /// Take the effects requested since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub(crate) fn push_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}

impl fmt::Debug for MultiSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSelect")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("coordinator", &self.coordinator)
            .field("has_observer", &self.observer.is_some())
            .field("has_trace", &self.trace.is_some())
            .field("effects", &self.effects)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MultiSelectError;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn select() -> MultiSelect {
        MultiSelect::new(vec![
            SelectOption::new("one", 1),
            SelectOption::new("on", 2),
            SelectOption::new("two", 3),
        ])
    }

    fn v(n: i64) -> OptionValue {
        OptionValue::from(n)
    }

    #[test]
    fn test_filter_narrows_then_widens() {
        let mut select = select();

        select.dispatch(Command::SetInput("on".into())).unwrap();
        let labels: Vec<_> = select.filtered_options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["one", "on"]);
        assert_eq!(select.state().active_option, Some(v(1)));

        select.dispatch(Command::SetInput(String::new())).unwrap();
        assert_eq!(select.filtered_options().len(), 3);
        assert_eq!(select.state().active_option, Some(v(1)));
    }

    #[test]
    fn test_observer_sees_follow_ups() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut select = select().with_observer(move |state: &MultiSelectState| {
            sink.borrow_mut().push(state.active_option.clone());
        });

        select.dispatch(Command::SetInput("tw".into())).unwrap();

        // SET_INPUT, then the coordinator's SET_ACTIVE.
        assert_eq!(*seen.borrow(), vec![None, Some(v(3))]);
    }

    #[test]
    fn test_rejected_command_keeps_state() {
        let mut select = select();
        select.dispatch(Command::Open).unwrap();
        select.dispatch(Command::SetActive(Some(v(3)))).unwrap();
        let before = select.state().clone();

        let err = select
            .dispatch(Command::TargetDown(vec![v(1), v(2), v(3)]))
            .unwrap_err();
        assert!(matches!(err, MultiSelectError::NavigationOutOfBounds { .. }));
        assert_eq!(select.state(), &before);
    }

    #[test]
    fn test_open_with_filter_repairs_seed() {
        let mut select = select();
        select.dispatch(Command::SetInput("tw".into())).unwrap();
        select.dispatch(Command::Close).unwrap();

        // OPEN seeds the first unfiltered option, which is not visible.
        select.dispatch(Command::Open).unwrap();
        assert_eq!(select.state().active_option, Some(v(3)));
    }

    #[test]
    fn test_active_change_requests_scroll() {
        let mut select = select();
        select.dispatch(Command::Open).unwrap();
        let effects = select.take_effects();
        assert_eq!(
            effects,
            vec![Effect::ScrollIntoView {
                value: v(1),
                index: 0,
            }]
        );
        assert!(select.take_effects().is_empty());
    }

    #[test]
    fn test_custom_separator() {
        let mut select = select()
            .with_config(MultiSelectConfig::default().with_label_separator(" + "))
            .unwrap();
        select.dispatch(Command::SetSelected(v(3))).unwrap();
        select.dispatch(Command::SetSelected(v(1))).unwrap();
        assert_eq!(select.selected_labels(), "two + one");
    }

    #[test]
    fn test_with_config_rejects_zero_rows() {
        let err = select()
            .with_config(MultiSelectConfig::default().with_max_visible(0))
            .unwrap_err();
        assert!(matches!(err, MultiSelectError::InvalidConfig(_)));
    }
}
