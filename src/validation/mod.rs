//! Pluggable validation of workflow drafts.
//!
//! [`crate::builder::WorkflowBuilder`] never inspects a draft itself. It asks a
//! [`ValidatorFactory`] for a [`WorkflowValidator`] bound to the draft, so the
//! validation strategy can be swapped (or stubbed in tests) without touching
//! the builder.

mod options;
mod schema;

pub use options::ValidationOptions;
pub use schema::{SchemaValidator, SchemaValidatorFactory};

use crate::error::ValidationErrors;
use crate::model::WorkflowDraft;

/// Checks one workflow draft.
pub trait WorkflowValidator {
    /// `true` iff the draft satisfies every structural invariant.
    fn is_valid(&self) -> bool;

    /// One entry per violated invariant. Empty when the draft is valid.
    fn validate(&self) -> ValidationErrors;
}

/// Supplies a validator for each draft handed to it.
pub trait ValidatorFactory {
    fn workflow_validator<'a>(&self, draft: &'a WorkflowDraft) -> Box<dyn WorkflowValidator + 'a>;
}
