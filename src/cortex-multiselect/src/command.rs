//! The command vocabulary of the interaction state machine.
//!
//! Every state change goes through one of these commands. Commands serialize
//! as `{ "type": "SET_INPUT", "payload": "tw" }` so hosts can forward them
//! across a boundary and replay them.

use serde::{Deserialize, Serialize};

use crate::error::{MultiSelectError, MultiSelectResult};
use crate::option::OptionValue;

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Open the option list
    Open,
    /// Close the option list
    Close,
    /// Flip the open state
    Toggle,
    /// Replace the filter text
    SetInput(String),
    /// Highlight an option (or clear the highlight)
    SetActive(Option<OptionValue>),
    /// Toggle a value in the selection
    SetSelected(OptionValue),
    /// Move the highlight up within the given filtered values
    TargetUp(Vec<OptionValue>),
    /// Move the highlight down within the given filtered values
    TargetDown(Vec<OptionValue>),
}

impl Command {
    /// All command names, in declaration order.
    pub const NAMES: [&'static str; 8] = [
        "OPEN",
        "CLOSE",
        "TOGGLE",
        "SET_INPUT",
        "SET_ACTIVE",
        "SET_SELECTED",
        "TARGET_UP",
        "TARGET_DOWN",
    ];

    /// Canonical name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Open => "OPEN",
            Command::Close => "CLOSE",
            Command::Toggle => "TOGGLE",
            Command::SetInput(_) => "SET_INPUT",
            Command::SetActive(_) => "SET_ACTIVE",
            Command::SetSelected(_) => "SET_SELECTED",
            Command::TargetUp(_) => "TARGET_UP",
            Command::TargetDown(_) => "TARGET_DOWN",
        }
    }

    /// Decode a command from its JSON form.
    ///
    /// A `type` outside the vocabulary is an `UnknownCommand` contract error;
    /// anything else that fails to decode is `MalformedCommand`.
    pub fn from_json(json: &str) -> MultiSelectResult<Self> {
        let raw: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| MultiSelectError::MalformedCommand(e.to_string()))?;

        let Some(kind) = raw.get("type").and_then(|t| t.as_str()) else {
            return Err(MultiSelectError::MalformedCommand(
                "missing string field `type`".to_string(),
            ));
        };
        if !Self::NAMES.contains(&kind) {
            return Err(MultiSelectError::unknown_command(kind));
        }

        serde_json::from_value(raw).map_err(|e| MultiSelectError::MalformedCommand(e.to_string()))
    }
}
