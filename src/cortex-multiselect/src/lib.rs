//! # Cortex Multi-Select
//!
//! The interaction model of a searchable, multi-selection dropdown: a list of
//! labeled options the user filters by typing, navigates by keyboard or
//! pointer, and selects zero or more of.
//!
//! Rendering is left to the host. This crate owns the state and the rules that
//! keep it consistent; a view adapter feeds it events and draws from
//! [`MultiSelectState`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cortex_multiselect::prelude::*;
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//!
//! let mut select = MultiSelect::new(vec![
//!     SelectOption::new("one", "one"),
//!     SelectOption::new("two", "two"),
//! ]);
//!
//! let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
//! let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
//!
//! select.input_control().on_key(down).unwrap();
//! let outcome = select.input_control().on_key(enter).unwrap();
//!
//! assert_eq!(outcome, KeyOutcome::Toggled(OptionValue::from("two")));
//! assert_eq!(select.selected_labels(), "two");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │              View adapter (terminal, GUI, ...)               │
//! │   TriggerControl │ InputControl (keys) │ OptionRowControl    │
//! └─────────────────────────────┬────────────────────────────────┘
//!                               │ Command
//! ┌─────────────────────────────▼────────────────────────────────┐
//! │ MultiSelect::dispatch                                        │
//! │   reducer ──► coordinator ──► observer / trace sink          │
//! │      ▲             │ follow-up SET_ACTIVE, Effect            │
//! │      └─────────────┘                                         │
//! └─────────────────────────────┬────────────────────────────────┘
//!                               │
//!       filter │ selection │ navigation (pure functions)
//! ```

pub mod command;
pub mod config;
pub mod controls;
pub mod coordinator;
pub mod error;
pub mod filter;
pub mod keys;
pub mod machine;
pub mod navigation;
pub mod observer;
pub mod option;
pub mod reducer;
pub mod scroll;
pub mod selection;
pub mod state;
pub mod text;

pub use command::Command;
pub use config::{MultiSelectConfig, OpenSeeding};
pub use controls::{InputControl, OptionRowControl, TriggerControl};
pub use coordinator::{Coordinator, Effect};
pub use error::{MultiSelectError, MultiSelectResult};
pub use keys::KeyOutcome;
pub use machine::MultiSelect;
pub use navigation::Direction;
pub use observer::{StateObserver, TraceSink, TracingSink};
pub use option::{OptionValue, SelectOption};
pub use reducer::{reduce, reduce_with};
pub use state::MultiSelectState;

/// Commonly used types and traits for quick imports.
///
/// ```rust,ignore
/// use cortex_multiselect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::command::Command;
    pub use crate::config::{MultiSelectConfig, OpenSeeding};
    pub use crate::coordinator::Effect;
    pub use crate::error::{MultiSelectError, MultiSelectResult};
    pub use crate::keys::KeyOutcome;
    pub use crate::machine::MultiSelect;
    pub use crate::observer::{StateObserver, TraceSink, TracingSink};
    pub use crate::option::{OptionValue, SelectOption};
    pub use crate::state::MultiSelectState;
}

/// Cortex Multi-Select version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
