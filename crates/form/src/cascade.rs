use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::metadata::InputMetadata;
use crate::node::InputNode;
use crate::resolved::{ResolvedGroup, ResolvedLeaf, ResolvedNode};
use crate::validation::ValidationSlot;

/// Effective rendering state of a node after cascade resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedState {
    pub disabled: bool,
    pub hidden: bool,
}

impl ResolvedState {
    /// State at the tree root: nothing inherited.
    pub const ROOT: Self = Self {
        disabled: false,
        hidden: false,
    };

    /// Combine inherited state with a node's declarations.
    ///
    /// The cascade is a monotonic OR: a node may add disability or
    /// hiddenness its ancestors did not have, but can never remove
    /// inherited state.
    #[must_use]
    pub fn cascade(self, metadata: &InputMetadata) -> Self {
        Self {
            disabled: self.disabled || metadata.disabled,
            hidden: self.hidden || metadata.hidden,
        }
    }
}

/// Resolve one node under the given ancestor state.
///
/// Pure and total: siblings resolve independently (order affects only
/// rendering order, never state), and trees built through the builder
/// are finite and acyclic, so resolution is O(nodes) with no failure
/// mode. Group children receive this node's *effective* state as their
/// new ancestor state, not the declared-only values.
#[must_use]
pub fn resolve_node(node: &InputNode, ancestor: ResolvedState) -> ResolvedNode {
    let state = ancestor.cascade(node.metadata());
    trace!(
        id = node.id(),
        kind = node.kind().as_str(),
        disabled = state.disabled,
        hidden = state.hidden,
        "resolved node"
    );

    match node {
        InputNode::Checkbox(input) => ResolvedNode::Leaf(ResolvedLeaf {
            id: input.metadata.id.clone(),
            label: input.metadata.label.clone(),
            caption: input.metadata.caption.clone(),
            kind: node.kind(),
            state,
            value: input.value.clone(),
            checked: input.checked,
        }),
        InputNode::Radio(input) => ResolvedNode::Leaf(ResolvedLeaf {
            id: input.metadata.id.clone(),
            label: input.metadata.label.clone(),
            caption: input.metadata.caption.clone(),
            kind: node.kind(),
            state,
            value: input.value.clone(),
            checked: input.checked,
        }),
        InputNode::Group(group) => ResolvedNode::Group(ResolvedGroup {
            id: group.metadata.id.clone(),
            legend: group.metadata.label.clone(),
            caption: group.metadata.caption.clone(),
            state,
            validation: ValidationSlot::for_group(group),
            children: group
                .children
                .iter()
                .map(|child| resolve_node(child, state))
                .collect(),
        }),
    }
}
