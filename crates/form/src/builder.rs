use crate::error::FormError;
use crate::form::Form;
use crate::node::InputNode;
use crate::types::{
    CheckboxInput, CheckboxOptions, GroupInput, GroupOptions, RadioInput, RadioOptions,
};

/// Explicit builder for a form's input tree.
///
/// Every call appends a node to the enclosing collection; there is no
/// implicit "current receiver". Groups scope their children through a
/// closure receiving a [`GroupBuilder`]; leaves are also permitted at
/// the root, outside any group.
///
/// ```
/// use trellis_form::prelude::*;
///
/// let form = Form::builder()
///     .group(
///         "Ultimate answer",
///         GroupOptions::new().with_validation_message("At least one selection is required"),
///         |group| {
///             group.checkbox("foo", "Foo", CheckboxOptions::new());
///         },
///     )
///     .build()?;
/// # Ok::<(), FormError>(())
/// ```
#[derive(Debug, Default)]
pub struct FormBuilder {
    nodes: Vec<InputNode>,
}

impl FormBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a root-level checkbox.
    #[must_use]
    pub fn checkbox(
        mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        options: CheckboxOptions,
    ) -> Self {
        self.nodes
            .push(InputNode::Checkbox(CheckboxInput::new(name, label).with_options(options)));
        self
    }

    /// Append a root-level radio button.
    #[must_use]
    pub fn radio(
        mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        options: RadioOptions,
    ) -> Self {
        self.nodes
            .push(InputNode::Radio(RadioInput::new(name, label).with_options(options)));
        self
    }

    /// Append a group whose children are declared inside `scope`.
    ///
    /// The group id comes from `options` when given, otherwise it is
    /// derived by slugifying the label.
    #[must_use]
    pub fn group(
        mut self,
        label: impl Into<String>,
        options: GroupOptions,
        scope: impl FnOnce(&mut GroupBuilder),
    ) -> Self {
        self.nodes.push(build_group(label.into(), options, scope));
        self
    }

    /// Finish building, enforcing the construction-time contract.
    pub fn build(self) -> Result<Form, FormError> {
        Form::from_nodes(self.nodes)
    }
}

/// Builder scope for one group's children. Mirrors the root builder's
/// methods; groups nest arbitrarily.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    children: Vec<InputNode>,
}

impl GroupBuilder {
    /// Append a checkbox to this group.
    pub fn checkbox(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        options: CheckboxOptions,
    ) -> &mut Self {
        self.children
            .push(InputNode::Checkbox(CheckboxInput::new(name, label).with_options(options)));
        self
    }

    /// Append a radio button to this group.
    pub fn radio(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        options: RadioOptions,
    ) -> &mut Self {
        self.children
            .push(InputNode::Radio(RadioInput::new(name, label).with_options(options)));
        self
    }

    /// Append a nested group.
    pub fn group(
        &mut self,
        label: impl Into<String>,
        options: GroupOptions,
        scope: impl FnOnce(&mut GroupBuilder),
    ) -> &mut Self {
        self.children.push(build_group(label.into(), options, scope));
        self
    }
}

fn build_group(
    label: String,
    options: GroupOptions,
    scope: impl FnOnce(&mut GroupBuilder),
) -> InputNode {
    let derived_id = slug(&label);
    let mut group = GroupInput::new(derived_id, label).with_options(options);

    let mut builder = GroupBuilder::default();
    scope(&mut builder);
    group.children = builder.children;

    InputNode::Group(group)
}

/// Derive a stable id from a label: lowercase, runs of
/// non-alphanumerics collapsed to single dashes.
fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
