pub mod builder;
pub mod cascade;
pub mod classes;
pub mod error;
pub mod form;
pub mod kind;
pub mod metadata;
pub mod node;
pub mod resolved;
pub mod types;
pub mod validation;

pub mod prelude {
    pub use crate::builder::{FormBuilder, GroupBuilder};
    pub use crate::cascade::{ResolvedState, resolve_node};
    pub use crate::error::FormError;
    pub use crate::form::Form;
    pub use crate::kind::InputKind;
    pub use crate::metadata::InputMetadata;
    pub use crate::node::InputNode;
    pub use crate::resolved::{ResolvedForm, ResolvedGroup, ResolvedLeaf, ResolvedNode};
    pub use crate::validation::ValidationSlot;

    pub use crate::types::*;
}
