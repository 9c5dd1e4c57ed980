//! The workflow document model.
//!
//! Pure data: every alternative in the document (state variants, transitions,
//! ends, reference-or-inline definitions) is an enum, and serialization follows
//! the workflow JSON schema with camelCase keys and unset fields omitted.

pub mod action;
pub mod definitions;
pub mod flow;
pub mod state;
pub mod workflow;

pub use action::*;
pub use definitions::*;
pub use flow::*;
pub use state::*;
pub use workflow::*;

/// Free-form key/value metadata attached to documents and entities.
///
/// Keys serialize in sorted order so repeated builds produce identical JSON.
pub type Metadata = std::collections::BTreeMap<String, String>;
