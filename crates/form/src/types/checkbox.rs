use serde::{Deserialize, Serialize};

use crate::metadata::InputMetadata;

/// Configuration accepted by the checkbox builder calls.
///
/// `disabled` and `hidden` become the node's declared state; the
/// cascade may strengthen them, never weaken them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxOptions {
    pub caption: Option<String>,
    pub disabled: bool,
    pub hidden: bool,
    pub value: Option<String>,
    pub checked: bool,
}

impl CheckboxOptions {
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

    /// Declare the checkbox disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Declare the checkbox hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Set the submission value sent when the box is checked.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Start the checkbox checked.
    #[must_use]
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// A single checkbox control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxInput {
    #[serde(flatten)]
    pub metadata: InputMetadata,

    /// Submission value sent when the box is checked (renderer concern,
    /// passed through unchanged).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether the box starts checked.
    #[serde(default)]
    pub checked: bool,
}

impl CheckboxInput {
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
    pub fn with_options(mut self, options: CheckboxOptions) -> Self {
        self.metadata.caption = options.caption;
        self.metadata.disabled = options.disabled;
        self.metadata.hidden = options.hidden;
        self.value = options.value;
        self.checked = options.checked;
        self
    }
}
