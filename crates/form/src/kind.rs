use serde::{Deserialize, Serialize};

use crate::classes;

/// The kind of an input node, determining its control semantics and
/// wrapper markup hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Checkbox,
    Radio,
    Group,
}

impl InputKind {
    /// Whether this kind owns child inputs.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Group)
    }

    /// String identifier for serialization/logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Group => "group",
        }
    }

    /// The opaque CSS hook a renderer puts on this kind's wrapper element.
    #[must_use]
    pub fn wrapper_class(&self) -> &'static str {
        match self {
            Self::Checkbox => classes::CHECKBOX_WRAP,
            Self::Radio => classes::RADIO_WRAP,
            Self::Group => classes::GROUP_WRAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_group_is_container() {
        assert!(InputKind::Group.is_container());
        assert!(!InputKind::Checkbox.is_container());
        assert!(!InputKind::Radio.is_container());
    }

    #[test]
    fn as_str_round_trips_through_serde() {
        let kinds = [InputKind::Checkbox, InputKind::Radio, InputKind::Group];

        for kind in &kinds {
            let json = serde_json::to_string(kind).unwrap();
            let quoted = format!("\"{}\"", kind.as_str());
            assert_eq!(json, quoted, "as_str mismatch for {kind:?}");

            let deserialized: InputKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, deserialized);
        }
    }

    #[test]
    fn wrapper_classes_are_distinct() {
        let kinds = [InputKind::Checkbox, InputKind::Radio, InputKind::Group];
        let mut wraps: Vec<&str> = kinds.iter().map(InputKind::wrapper_class).collect();
        wraps.sort_unstable();
        wraps.dedup();
        assert_eq!(wraps.len(), kinds.len());
    }
}
