/// Error type for form construction.
///
/// Resolution and presentation are total over built trees, so every
/// variant here is a construction-time contract violation surfaced by
/// [`FormBuilder::build`](crate::builder::FormBuilder::build) or
/// [`Form::from_nodes`](crate::form::Form::from_nodes), before any
/// resolution happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A node was declared without label text.
    #[error("empty label on input `{id}`")]
    EmptyLabel { id: String },

    /// A node was declared with an empty id.
    #[error("empty id on input labelled `{label}`")]
    EmptyId { label: String },

    /// Two nodes in the same tree share an id.
    #[error("duplicate input id `{id}`")]
    DuplicateId { id: String },
}

impl FormError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::EmptyLabel { .. } => "label",
            Self::EmptyId { .. } | Self::DuplicateId { .. } => "id",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::EmptyLabel { .. } => "FORM_EMPTY_LABEL",
            Self::EmptyId { .. } => "FORM_EMPTY_ID",
            Self::DuplicateId { .. } => "FORM_DUPLICATE_ID",
        }
    }
}
