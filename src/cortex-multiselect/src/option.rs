//! Option types offered for selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an option.
///
/// Hosts may key options by string or by integer. The two never compare equal,
/// so `Text("1")` and `Int(1)` are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Integer identifier
    Int(i64),
    /// String identifier
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// A labeled option in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label, also the text the filter matches against
    pub label: String,
    /// Unique value/identifier
    pub value: OptionValue,
}

impl SelectOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds_are_distinct() {
        assert_ne!(OptionValue::from("1"), OptionValue::from(1));
        assert_eq!(OptionValue::from(7), OptionValue::Int(7));
        assert_eq!(OptionValue::from("seven").to_string(), "seven");
    }

    #[test]
    fn test_untagged_serde() {
        let opts: Vec<SelectOption> = serde_json::from_str(
            r#"[{"label":"one","value":"one"},{"label":"two","value":2}]"#,
        )
        .unwrap();
        assert_eq!(opts[0].value, OptionValue::from("one"));
        assert_eq!(opts[1].value, OptionValue::from(2));
        assert_eq!(opts[1].value.to_string(), "2");
    }
}
