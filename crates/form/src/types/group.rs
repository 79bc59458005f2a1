use serde::{Deserialize, Serialize};

use crate::metadata::InputMetadata;
use crate::node::InputNode;

/// Configuration accepted by the group builder calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupOptions {
    /// Explicit id; when absent the builder derives one from the label.
    pub id: Option<String>,
    pub caption: Option<String>,
    pub disabled: bool,
    pub hidden: bool,
    /// Caller-supplied inline validation message.
    pub validation_message: Option<String>,
}

impl GroupOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit id instead of the label-derived one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the help text (builder-style, consuming).
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Declare the whole group disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Declare the whole group hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Supply the inline validation message shown in the group's slot.
    #[must_use]
    pub fn with_validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = Some(message.into());
        self
    }
}

/// A composite input owning an ordered sequence of children plus an
/// inline validation slot.
///
/// The validation message is supplied by the caller at construction
/// time, derived from whatever validation subsystem is in play. The
/// engine only checks presence; it never inspects a bound model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInput {
    #[serde(flatten)]
    pub metadata: InputMetadata,

    /// Child inputs in rendering order. Order is significant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<InputNode>,

    /// Inline validation message. `None` or empty means no error is
    /// currently present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
}

impl GroupInput {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: InputMetadata::new(id, label),
            children: Vec::new(),
            validation_message: None,
        }
    }

    /// Append a child input (builder-style, consuming).
    #[must_use]
    pub fn with_child(mut self, child: InputNode) -> Self {
        self.children.push(child);
        self
    }

    /// Apply builder options (builder-style, consuming). An explicit
    /// `id` in the options replaces the current one.
    #[must_use]
    pub fn with_options(mut self, options: GroupOptions) -> Self {
        if let Some(id) = options.id {
            self.metadata.id = id;
        }
        self.metadata.caption = options.caption;
        self.metadata.disabled = options.disabled;
        self.metadata.hidden = options.hidden;
        self.validation_message = options.validation_message;
        self
    }
}
