pub mod checkbox;
pub mod group;
pub mod radio;

pub use checkbox::{CheckboxInput, CheckboxOptions};
pub use group::{GroupInput, GroupOptions};
pub use radio::{RadioInput, RadioOptions};
