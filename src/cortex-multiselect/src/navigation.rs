//! Active-option navigation over the filtered list.
//!
//! Navigation never wraps. `next_active` does no clamping of its own; callers
//! check [`at_boundary`] before moving, and an out-of-range move yields `None`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::option::OptionValue;

/// Direction of active-option movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the first filtered option (Arrow-up)
    Up,
    /// Towards the last filtered option (Arrow-down)
    Down,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// Compute the option that becomes active after moving one step.
///
/// An absent or unknown `active` counts as sitting just before the first
/// option, so `Down` lands on the first value and `Up` has nowhere to go.
pub fn next_active(
    active: Option<&OptionValue>,
    filtered: &[OptionValue],
    direction: Direction,
) -> Option<OptionValue> {
    let current = active
        .and_then(|value| filtered.iter().position(|v| v == value))
        .map_or(-1, |idx| idx as isize);
    let target = current + direction.step();
    if target < 0 {
        return None;
    }
    filtered.get(target as usize).cloned()
}

/// Returns true if moving in `direction` would leave the filtered list.
///
/// This is the guard the keyboard layer applies before dispatching
/// TARGET_UP/TARGET_DOWN: already on the first (or last) option, or nothing
/// to move through.
pub fn at_boundary(active: Option<&OptionValue>, filtered: &[OptionValue], direction: Direction) -> bool {
    next_active(active, filtered, direction).is_none()
}
