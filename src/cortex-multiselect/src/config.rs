//! Configuration for a multi-select control.

use serde::{Deserialize, Serialize};

use crate::error::{MultiSelectError, MultiSelectResult};

/// What OPEN does to the active option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenSeeding {
    /// Highlight the first unfiltered option; the coordinator then corrects
    /// it against the active filter.
    #[default]
    FirstOption,
    /// Leave the active option untouched.
    Preserve,
}

/// Behavior settings for a [`MultiSelect`](crate::MultiSelect).
///
/// # Example
///
/// ```rust
/// use cortex_multiselect::{MultiSelectConfig, OpenSeeding};
///
/// let config = MultiSelectConfig::from_toml_str(r#"
/// open_seeding = "preserve"
/// max_visible = 5
/// "#).unwrap();
///
/// assert_eq!(config.open_seeding, OpenSeeding::Preserve);
/// assert_eq!(config.label_separator, ", ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiSelectConfig {
    /// OPEN active-option policy.
    pub open_seeding: OpenSeeding,

    /// Separator between labels in the selected-labels display string.
    pub label_separator: String,

    /// Number of option rows visible in the viewport at once.
    pub max_visible: usize,
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            open_seeding: OpenSeeding::FirstOption,
            label_separator: ", ".to_string(),
            max_visible: 10,
        }
    }
}

impl MultiSelectConfig {
    /// Parse and validate a config from TOML.
    pub fn from_toml_str(source: &str) -> MultiSelectResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| MultiSelectError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the OPEN seeding policy.
    pub fn with_open_seeding(mut self, seeding: OpenSeeding) -> Self {
        self.open_seeding = seeding;
        self
    }

    /// Set the label separator.
    pub fn with_label_separator(mut self, separator: impl Into<String>) -> Self {
        self.label_separator = separator.into();
        self
    }

    /// Set the number of visible rows.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Check the config for values the controller cannot work with.
    pub fn validate(&self) -> MultiSelectResult<()> {
        if self.max_visible == 0 {
            return Err(MultiSelectError::invalid_config(
                "max_visible must be at least 1",
            ));
        }
        Ok(())
    }
}
