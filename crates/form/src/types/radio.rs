use serde::{Deserialize, Serialize};

use crate::metadata::InputMetadata;

/// Configuration accepted by the radio builder calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioOptions {
    pub caption: Option<String>,
    pub disabled: bool,
    pub hidden: bool,
    pub value: Option<String>,
    pub checked: bool,
}

impl RadioOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the help text (builder-style, consuming).
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Declare the radio button disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Declare the radio button hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Set the submission value sent when this button is selected.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Start the radio button selected.
    #[must_use]
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// A single radio button control.
///
/// Selection exclusivity among siblings is the renderer's concern (it
/// follows from the shared submission name); the cascade treats a radio
/// button exactly like any other leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioInput {
    #[serde(flatten)]
    pub metadata: InputMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default)]
    pub checked: bool,
}

impl RadioInput {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: InputMetadata::new(id, label),
            value: None,
            checked: false,
        }
    }

    /// Apply builder options (builder-style, consuming).
    #[must_use]
    pub fn with_options(mut self, options: RadioOptions) -> Self {
        self.metadata.caption = options.caption;
        self.metadata.disabled = options.disabled;
        self.metadata.hidden = options.hidden;
        self.value = options.value;
        self.checked = options.checked;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_minimal_radio() {
        let input = RadioInput::new("size-s", "Small");
        assert_eq!(input.metadata.id, "size-s");
        assert_eq!(input.metadata.label, "Small");
        assert!(!input.checked);
    }

    #[test]
    fn with_options_applies_flags() {
        let input = RadioInput::new("size-s", "Small")
            .with_options(RadioOptions::new().with_value("s").disabled());

        assert_eq!(input.value.as_deref(), Some("s"));
        assert!(input.metadata.disabled);
        assert!(!input.metadata.hidden);
    }

    #[test]
    fn serde_round_trip() {
        let input = RadioInput::new("size-s", "Small")
            .with_options(RadioOptions::new().with_value("s").checked());

        let json = serde_json::to_string(&input).unwrap();
        let deserialized: RadioInput = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, input);
    }
}
