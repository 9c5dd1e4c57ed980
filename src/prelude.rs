//! Prelude module for convenient imports
//!
//! Re-exports the builders, the document model, and the validation types so a
//! single `use sekkei::prelude::*;` covers the usual document assembly.
//!
//! # Example
//!
//! ```rust
//! use sekkei::prelude::*;
//! use serde_json::json;
//!
//! # fn run_example() -> Result<(), ValidationErrors> {
//! let workflow = WorkflowBuilder::new()
//!     .with_id("greeting")
//!     .with_name("Greeting Workflow")
//!     .with_version("1.0")
//!     .with_start("Greet")
//!     .with_states(vec![InjectStateBuilder::new()
//!         .with_name("Greet")
//!         .with_data(json!({"greeting": "Hello"}))
//!         .with_end(true)
//!         .build()])
//!     .build()?;
//!
//! assert_eq!(workflow.states().len(), 1);
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Builders
pub use crate::builder::*;

// Document model
pub use crate::model::{
    Action, Branch, Definitions, End, EventDef, EventKind, Events, ExecTimeout, FunctionDef,
    FunctionRef, FunctionType, Functions, OnEvent, Repeat, Retries, RetryDef, Start, State,
    StateType, Transition, Workflow, WorkflowDraft,
};

// Validation
pub use crate::validation::{
    SchemaValidator, SchemaValidatorFactory, ValidationOptions, ValidatorFactory,
    WorkflowValidator,
};

// Error types
pub use crate::error::{ConfigError, ValidationError, ValidationErrors};
