//! End-to-end interaction scenarios for the multi-select control.

use std::cell::RefCell;
use std::rc::Rc;

use cortex_multiselect::prelude::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn v(s: &str) -> OptionValue {
    OptionValue::from(s)
}

// ============================================================================
// SELECTION
// ============================================================================

mod selection_scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_then_deselect() {
        let mut select = MultiSelect::new(vec![
            SelectOption::new("one", "one"),
            SelectOption::new("two", "two"),
        ]);

        select.dispatch(Command::SetSelected(v("one"))).unwrap();
        assert_eq!(select.state().selected_options, vec![v("one")]);

        select.dispatch(Command::SetSelected(v("one"))).unwrap();
        assert!(select.state().selected_options.is_empty());
    }

    #[test]
    fn test_enter_selects_and_clears() {
        let mut select = MultiSelect::new(vec![
            SelectOption::new("one", "one"),
            SelectOption::new("two", "two"),
        ]);
        select.dispatch(Command::Open).unwrap();
        select.dispatch(Command::SetInput("tw".into())).unwrap();
        assert_eq!(select.state().active_option, Some(v("two")));

        select.input_control().on_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(select.state().selected_options, vec![v("two")]);
        assert_eq!(select.state().input, "");
    }

    #[test]
    fn test_backspace_removes_last_selection() {
        let mut select = MultiSelect::new(vec![
            SelectOption::new("one", "one"),
            SelectOption::new("two", "two"),
        ]);
        select.dispatch(Command::SetSelected(v("one"))).unwrap();
        select.dispatch(Command::SetSelected(v("two"))).unwrap();

        select.input_control().on_key(key(KeyCode::Backspace)).unwrap();

        assert_eq!(select.state().selected_options, vec![v("one")]);
    }

    #[test]
    fn test_selected_labels_follow_selection_order() {
        let mut select = MultiSelect::new(vec![
            SelectOption::new("Apple", 1),
            SelectOption::new("Banana", 2),
            SelectOption::new("Cherry", 3),
        ]);
        for value in [3, 1, 2] {
            select.option_control(OptionValue::from(value)).on_pointer_down().unwrap();
        }
        assert_eq!(select.selected_labels(), "Cherry, Apple, Banana");

        select.option_control(OptionValue::from(1)).on_pointer_down().unwrap();
        assert_eq!(select.selected_labels(), "Cherry, Banana");
    }
}

// ============================================================================
// FILTERING AND AUTO-ACTIVATION
// ============================================================================

mod filter_scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_narrows_then_widens() {
        let mut select = MultiSelect::new(vec![
            SelectOption::new("one", 1),
            SelectOption::new("on", 2),
            SelectOption::new("two", 3),
        ]);

        select.dispatch(Command::SetInput("on".into())).unwrap();
        let filtered: Vec<_> = select.filtered_options().into_iter().cloned().collect();
        assert_eq!(
            filtered,
            vec![SelectOption::new("one", 1), SelectOption::new("on", 2)]
        );
        assert_eq!(select.state().active_option, Some(OptionValue::from(1)));

        // Move off the first option, then widen the filter.
        select.dispatch(Command::SetActive(Some(OptionValue::from(2)))).unwrap();
        select.dispatch(Command::SetInput(String::new())).unwrap();
        assert_eq!(select.filtered_options().len(), 3);
        assert_eq!(select.state().active_option, Some(OptionValue::from(1)));
    }

    #[test]
    fn test_same_count_keeps_active_while_closed() {
        let mut select = MultiSelect::new(vec![
            SelectOption::new("alpha", "a"),
            SelectOption::new("beta", "b"),
        ]);
        select.dispatch(Command::SetInput("alp".into())).unwrap();
        assert_eq!(select.state().active_option, Some(v("a")));

        // "bet" also leaves one option: count unchanged, closed, no re-seed.
        select.dispatch(Command::SetInput("bet".into())).unwrap();
        assert_eq!(select.state().active_option, Some(v("a")));

        // Once open, the stale highlight is replaced.
        select.dispatch(Command::Open).unwrap();
        assert_eq!(select.state().active_option, Some(v("b")));
    }

    #[test]
    fn test_no_match_clears_active() {
        let mut select = MultiSelect::new(vec![SelectOption::new("one", "one")]);
        select.dispatch(Command::Open).unwrap();
        select.input_control().on_change("xyz").unwrap();
        assert!(select.filtered_options().is_empty());
        assert_eq!(select.state().active_option, None);
    }
}

// ============================================================================
// OPENING AND CLOSING
// ============================================================================

mod open_close_scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    fn select() -> MultiSelect {
        MultiSelect::new(vec![
            SelectOption::new("one", "one"),
            SelectOption::new("two", "two"),
        ])
    }

    #[test]
    fn test_trigger_blur_closes() {
        let mut select = select();
        let mut trigger = select.trigger_control();
        trigger.on_click().unwrap();
        assert!(trigger.expanded());

        trigger.on_blur().unwrap();
        assert!(!trigger.expanded());

        // Blurring a closed trigger is harmless.
        trigger.on_blur().unwrap();
        assert!(!select.state().open);
    }

    #[test]
    fn test_preserve_seeding_keeps_highlight_across_reopen() {
        let mut select = select()
            .with_config(MultiSelectConfig::default().with_open_seeding(OpenSeeding::Preserve))
            .unwrap();

        // Nothing to preserve yet; the coordinator fills in the first option.
        select.dispatch(Command::Open).unwrap();
        assert_eq!(select.state().active_option, Some(v("one")));

        select.dispatch(Command::SetActive(Some(v("two")))).unwrap();
        select.dispatch(Command::Close).unwrap();
        select.dispatch(Command::Open).unwrap();
        assert_eq!(select.state().active_option, Some(v("two")));
    }

    #[test]
    fn test_first_option_seeding_resets_highlight_on_reopen() {
        let mut select = select();
        select.dispatch(Command::Open).unwrap();
        select.dispatch(Command::SetActive(Some(v("two")))).unwrap();
        select.dispatch(Command::Close).unwrap();
        select.dispatch(Command::Open).unwrap();
        assert_eq!(select.state().active_option, Some(v("one")));
    }

    #[test]
    fn test_preserve_seeding_repairs_filtered_out_highlight() {
        let mut select = select()
            .with_config(MultiSelectConfig::default().with_open_seeding(OpenSeeding::Preserve))
            .unwrap();
        select.dispatch(Command::SetActive(Some(v("one")))).unwrap();

        // "tw" and "on" each leave one option, so the count does not change
        // between them and only the open-list repair can move the highlight.
        select.dispatch(Command::SetInput("on".into())).unwrap();
        select.dispatch(Command::SetInput("tw".into())).unwrap();
        assert_eq!(select.state().active_option, Some(v("one")));

        select.dispatch(Command::Open).unwrap();
        assert_eq!(select.state().active_option, Some(v("two")));
    }
}

// ============================================================================
// OBSERVATION
// ============================================================================

mod observer_scenarios {
    use super::*;
    use pretty_assertions::assert_eq;
    use cortex_multiselect::MultiSelectError;

    #[derive(Clone, Default)]
    struct RecordingSink {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl TraceSink for RecordingSink {
        fn on_command(&self, command: &Command) {
            self.events.borrow_mut().push(format!("command {}", command.name()));
        }

        fn on_rejected(&self, command: &Command, _error: &MultiSelectError) {
            self.events.borrow_mut().push(format!("rejected {}", command.name()));
        }
    }

    #[test]
    fn test_observer_receives_every_transition() {
        let states = Rc::new(RefCell::new(Vec::<MultiSelectState>::new()));
        let sink = Rc::clone(&states);
        let mut select = MultiSelect::new(vec![
            SelectOption::new("one", "one"),
            SelectOption::new("two", "two"),
        ])
        .with_observer(move |state: &MultiSelectState| sink.borrow_mut().push(state.clone()));

        select.trigger_control().on_click().unwrap();
        select.option_control(v("two")).on_pointer_down().unwrap();

        let states = states.borrow();
        let last = states.last().unwrap();
        assert!(last.open);
        assert_eq!(last.selected_options, vec![v("two")]);
        // TOGGLE, SET_ACTIVE (repair), SET_SELECTED, SET_INPUT
        assert_eq!(states.len(), 4);
    }

    #[test]
    fn test_trace_sink_sees_follow_ups_and_rejections() {
        let sink = RecordingSink::default();
        let mut select = MultiSelect::new(vec![
            SelectOption::new("one", "one"),
            SelectOption::new("two", "two"),
        ])
        .with_trace_sink(sink.clone());

        select.dispatch(Command::SetInput("tw".into())).unwrap();
        let err = select.dispatch(Command::TargetDown(vec![v("two")])).unwrap_err();
        assert!(err.is_contract_violation());

        assert_eq!(
            *sink.events.borrow(),
            vec![
                "command SET_INPUT".to_string(),
                "command SET_ACTIVE".to_string(),
                "command TARGET_DOWN".to_string(),
                "rejected TARGET_DOWN".to_string(),
            ]
        );
    }

    #[test]
    fn test_commands_from_json() {
        let mut select = MultiSelect::new(vec![SelectOption::new("one", 1)]);
        for json in [
            r#"{"type":"OPEN"}"#,
            r#"{"type":"SET_SELECTED","payload":1}"#,
        ] {
            select.dispatch(Command::from_json(json).unwrap()).unwrap();
        }
        assert_eq!(select.state().selected_options, vec![OptionValue::from(1)]);

        let err = Command::from_json(r#"{"type":"SELECT_ALL"}"#).unwrap_err();
        assert!(matches!(err, MultiSelectError::UnknownCommand(name) if name == "SELECT_ALL"));
    }
}

// ============================================================================
// SCROLLING
// ============================================================================

mod scroll_scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyboard_navigation_scrolls_viewport() {
        let options: Vec<SelectOption> = (0..8)
            .map(|i| SelectOption::new(format!("item {i}"), i))
            .collect();
        let mut select = MultiSelect::new(options)
            .with_config(MultiSelectConfig::default().with_max_visible(3))
            .unwrap();

        for _ in 0..5 {
            select.input_control().on_key(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(select.state().active_option, Some(OptionValue::from(5)));
        assert_eq!(select.scroll().offset(), 3);
        assert!(select.scroll().is_visible(5));

        let last_scroll = select
            .take_effects()
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::ScrollIntoView { index, .. } => Some(index),
                Effect::FocusInput => None,
            })
            .last();
        assert_eq!(last_scroll, Some(5));
    }
}
