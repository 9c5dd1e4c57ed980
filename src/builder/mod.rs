//! Fluent builders for every entity of a workflow document.
//!
//! Entity builders never fail: `build` hands back whatever was set and leaves
//! structural checks to [`WorkflowBuilder::build`], the only place the whole
//! document is visible. Every builder is consumed by `build`.

mod action;
mod definitions;
mod flow;
mod state;
mod workflow;

pub use action::{ActionBuilder, BranchBuilder, OnEventBuilder, RepeatBuilder};
pub use definitions::{
    DefinitionsBuilder, EventBuilder, EventsBuilder, FunctionBuilder, FunctionsBuilder,
    RetriesBuilder, RetryBuilder,
};
pub use flow::{EndBuilder, TransitionBuilder};
pub use state::{
    CallbackStateBuilder, DelayStateBuilder, EventStateBuilder, ForEachStateBuilder,
    InjectStateBuilder, OperationStateBuilder, ParallelStateBuilder, SubFlowStateBuilder,
    SwitchStateBuilder,
};
pub use workflow::WorkflowBuilder;
