//! The renderer-facing contract: a fully resolved form tree.
//!
//! Everything a markup renderer needs is here: per-node effective
//! state, control data, and the group validation slot. The types
//! serialize, so a resolved tree can cross a process boundary to a
//! remote renderer unchanged.

use serde::{Deserialize, Serialize};

use crate::cascade::ResolvedState;
use crate::classes;
use crate::kind::InputKind;
use crate::validation::ValidationSlot;

/// A fully resolved form, ready to hand to a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedForm {
    /// Root nodes in declared order.
    pub nodes: Vec<ResolvedNode>,
}

/// One resolved node, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedNode {
    Leaf(ResolvedLeaf),
    Group(ResolvedGroup),
}

impl ResolvedNode {
    /// The node's stable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.id,
            Self::Group(group) => &group.id,
        }
    }

    /// The node's effective state.
    #[must_use]
    pub fn state(&self) -> ResolvedState {
        match self {
            Self::Leaf(leaf) => leaf.state,
            Self::Group(group) => group.state,
        }
    }

    /// Resolved children in rendering order; `None` for leaves.
    #[must_use]
    pub fn children(&self) -> Option<&[ResolvedNode]> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(group) => Some(&group.children),
        }
    }

    /// Downcast to a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&ResolvedLeaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    /// Downcast to a group.
    #[must_use]
    pub fn as_group(&self) -> Option<&ResolvedGroup> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(group) => Some(group),
        }
    }
}

/// A resolved leaf control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLeaf {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub kind: InputKind,
    /// Effective state after the cascade.
    pub state: ResolvedState,
    /// Submission value, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub checked: bool,
}

impl ResolvedLeaf {
    /// The opaque CSS hook for this leaf's wrapper element.
    #[must_use]
    pub fn wrapper_class(&self) -> &'static str {
        self.kind.wrapper_class()
    }
}

/// A resolved group.
///
/// A renderer walks it in field order: the grouping wrapper carries
/// `state`, then the legend, then the validation slot (always present,
/// immediately after the legend), then the children in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGroup {
    pub id: String,
    /// Legend text for the grouping wrapper.
    pub legend: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Effective state after the cascade.
    pub state: ResolvedState,
    /// The inline validation slot. Never absent; visibility is a flag.
    pub validation: ValidationSlot,
    /// Resolved children in declared order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResolvedNode>,
}

impl ResolvedGroup {
    /// The opaque CSS hook for the grouping wrapper.
    #[must_use]
    pub fn wrapper_class(&self) -> &'static str {
        InputKind::Group.wrapper_class()
    }

    /// The opaque CSS hooks for the validation slot element.
    #[must_use]
    pub fn validation_classes(&self) -> [&'static str; 2] {
        [classes::INLINE_VALIDATION, classes::VALIDATION_SPACING]
    }
}
