use serde::{Deserialize, Serialize};

use crate::kind::InputKind;
use crate::metadata::InputMetadata;
use crate::types::{CheckboxInput, GroupInput, RadioInput};

/// A node in the form tree, tagged by type.
///
/// The `type` field in JSON determines which variant is used during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputNode {
    Checkbox(CheckboxInput),
    Radio(RadioInput),
    Group(GroupInput),
}

impl InputNode {
    /// The stable identifier of this node.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.metadata().id
    }

    /// The display label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.metadata().label
    }

    /// The node kind.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Checkbox(_) => InputKind::Checkbox,
            Self::Radio(_) => InputKind::Radio,
            Self::Group(_) => InputKind::Group,
        }
    }

    /// Access the shared metadata for this node.
    #[must_use]
    pub fn metadata(&self) -> &InputMetadata {
        match self {
            Self::Checkbox(input) => &input.metadata,
            Self::Radio(input) => &input.metadata,
            Self::Group(group) => &group.metadata,
        }
    }

    /// Mutable access to the shared metadata.
    pub fn metadata_mut(&mut self) -> &mut InputMetadata {
        match self {
            Self::Checkbox(input) => &mut input.metadata,
            Self::Radio(input) => &mut input.metadata,
            Self::Group(group) => &mut group.metadata,
        }
    }

    /// Child nodes in declared order; `None` for leaves.
    #[must_use]
    pub fn children(&self) -> Option<&[InputNode]> {
        match self {
            Self::Checkbox(_) | Self::Radio(_) => None,
            Self::Group(group) => Some(&group.children),
        }
    }

    /// Whether this node owns children.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }
}
