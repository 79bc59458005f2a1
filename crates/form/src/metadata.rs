use serde::{Deserialize, Serialize};

/// Descriptive and behavioral attributes shared by every input node.
///
/// `disabled` and `hidden` hold what the form author *declared* on this
/// node. Effective values are computed by the cascade resolver from the
/// root path and are never written back here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMetadata {
    /// Stable identifier, used for label/control association.
    pub id: String,

    /// Human-readable label text.
    pub label: String,

    /// Optional help text displayed near the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Declared disabled state.
    #[serde(default)]
    pub disabled: bool,

    /// Declared hidden state.
    #[serde(default)]
    pub hidden: bool,
}

impl InputMetadata {
    /// Create metadata with the required id and label.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }
}
