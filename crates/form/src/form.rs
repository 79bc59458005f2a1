use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::FormBuilder;
use crate::cascade::{ResolvedState, resolve_node};
use crate::error::FormError;
use crate::node::InputNode;
use crate::resolved::ResolvedForm;

/// An ordered tree of input nodes, built once per render pass.
///
/// A form is a value, not a type: construct it (builder or
/// [`from_nodes`](Self::from_nodes)), resolve it, hand the resolved
/// tree to a renderer, and discard it. It owns its nodes exclusively
/// and holds no state between render passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nodes: Vec<InputNode>,
}

impl Form {
    /// Start building a form.
    #[must_use]
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// Construct a form from already-built nodes, enforcing the
    /// construction-time contract: every node carries a non-empty label
    /// and a non-empty id, and ids are unique within the tree.
    ///
    /// Violations fail here, before any resolution happens.
    pub fn from_nodes(nodes: Vec<InputNode>) -> Result<Self, FormError> {
        let mut seen = HashSet::new();
        let total = check_nodes(&nodes, &mut seen)?;
        debug!(nodes = total, roots = nodes.len(), "form constructed");
        Ok(Self { nodes })
    }

    /// Root nodes in declared order.
    #[must_use]
    pub fn nodes(&self) -> &[InputNode] {
        &self.nodes
    }

    /// The number of root nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the form has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the root nodes.
    pub fn iter(&self) -> impl Iterator<Item = &InputNode> {
        self.nodes.iter()
    }

    /// Run the cascade and presentation rules over the whole tree.
    ///
    /// Pure and total; each call computes effective state fresh from
    /// the declarations, so repeated calls are idempotent.
    #[must_use]
    pub fn resolve(&self) -> ResolvedForm {
        ResolvedForm {
            nodes: self
                .nodes
                .iter()
                .map(|node| resolve_node(node, ResolvedState::ROOT))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Form {
    type Item = &'a InputNode;
    type IntoIter = std::slice::Iter<'a, InputNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

fn check_nodes(nodes: &[InputNode], seen: &mut HashSet<String>) -> Result<usize, FormError> {
    let mut total = 0;
    for node in nodes {
        let meta = node.metadata();
        if meta.label.trim().is_empty() {
            return Err(FormError::EmptyLabel {
                id: meta.id.clone(),
            });
        }
        if meta.id.trim().is_empty() {
            return Err(FormError::EmptyId {
                label: meta.label.clone(),
            });
        }
        if !seen.insert(meta.id.clone()) {
            return Err(FormError::DuplicateId {
                id: meta.id.clone(),
            });
        }
        total += 1;
        if let Some(children) = node.children() {
            total += check_nodes(children, seen)?;
        }
    }
    Ok(total)
}
