use serde::{Deserialize, Serialize};

use crate::types::GroupInput;

/// The always-present, conditionally-visible validation region of a
/// resolved group.
///
/// The slot exists whether or not a message is present, so the element
/// it renders to is never added or removed across re-renders; only its
/// `visible` flag changes. That keeps client-side behavior (animated
/// reveal, ARIA wiring) stable. How a renderer expresses "not visible"
/// (zero height, `display:none`, off-screen) is its own business.
///
/// This is distinct from the cascade's `hidden`: a hidden group is fully
/// inert, while a non-visible slot is present-but-invisible by style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSlot {
    /// Element id, derived from the group id for `aria-describedby`
    /// wiring.
    pub id: String,

    /// Whether the slot is visually shown.
    pub visible: bool,

    /// Message text; empty whenever the slot is not visible.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl ValidationSlot {
    /// Apply the presentation rule to a group.
    ///
    /// The message was pre-computed by the caller from whatever
    /// validation subsystem is in play; an absent or empty message is a
    /// normal input, not an error. `Some("")` and `None` are
    /// equivalent.
    #[must_use]
    pub fn for_group(group: &GroupInput) -> Self {
        let message = group.validation_message.as_deref().unwrap_or("");
        Self {
            id: slot_id(&group.metadata.id),
            visible: !message.is_empty(),
            text: message.to_owned(),
        }
    }
}

/// Derive the validation element id from a group id.
fn slot_id(group_id: &str) -> String {
    format!("{group_id}-validation")
}
