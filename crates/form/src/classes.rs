//! Opaque CSS hooks passed through to the renderer.
//!
//! These are presentation-layer constants. The engine never interprets
//! them; a renderer is free to ignore them entirely.

/// Wrapper around a checkbox control and its label.
pub const CHECKBOX_WRAP: &str = "FormControl-checkbox-wrap";

/// Wrapper around a radio control and its label.
pub const RADIO_WRAP: &str = "FormControl-radio-wrap";

/// Grouping wrapper (fieldset) around a set of related controls.
pub const GROUP_WRAP: &str = "FormControl-check-group-wrap";

/// Inline validation slot rendered after a group legend.
pub const INLINE_VALIDATION: &str = "FormControl-inlineValidation";

/// Spacing utility applied to the validation slot.
pub const VALIDATION_SPACING: &str = "mt-2";
