//! One builder per state variant. Each emits its own `type` discriminant by
//! wrapping the staged state in the matching [`State`] variant.
//!
//! Transition/end exclusivity is not checked here; the workflow validator sees
//! the whole document and reports it there.

use super::definitions::collect_metadata;
use crate::model::{
    Action, ActionMode, Branch, CallbackState, CompletionType, DataCondition, DefaultCondition,
    DelayState, End, ErrorHandler, EventCondition, EventDataFilter, EventState, ForEachState,
    InjectState, NumberOrString, OnEvent, OperationState, ParallelState, Repeat, State,
    StateDataFilter, SubFlowState, SwitchState, Transition,
};
use serde_json::Value;

/// Setters shared by every state variant.
macro_rules! state_setters {
    () => {
        pub fn with_name(mut self, value: impl Into<String>) -> Self {
            self.state.name = Some(value.into());
            self
        }

        pub fn with_state_data_filter(mut self, value: StateDataFilter) -> Self {
            self.state.state_data_filter = Some(value);
            self
        }

        pub fn with_on_errors(mut self, value: Vec<ErrorHandler>) -> Self {
            self.state.on_errors = Some(value);
            self
        }

        pub fn with_compensated_by(mut self, value: impl Into<String>) -> Self {
            self.state.compensated_by = Some(value.into());
            self
        }

        pub fn with_used_for_compensation(mut self, value: bool) -> Self {
            self.state.used_for_compensation = Some(value);
            self
        }

        pub fn with_metadata<K, V>(mut self, value: impl IntoIterator<Item = (K, V)>) -> Self
        where
            K: Into<String>,
            V: Into<String>,
        {
            self.state.metadata = Some(collect_metadata(value));
            self
        }
    };
}

/// Setters for states that leave through their own transition or end.
macro_rules! flow_setters {
    () => {
        pub fn with_transition(mut self, value: impl Into<Transition>) -> Self {
            self.state.transition = Some(value.into());
            self
        }

        pub fn with_end(mut self, value: impl Into<End>) -> Self {
            self.state.end = Some(value.into());
            self
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct EventStateBuilder {
    state: EventState,
}

impl EventStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();
    flow_setters!();

    pub fn with_exclusive(mut self, value: bool) -> Self {
        self.state.exclusive = Some(value);
        self
    }

    pub fn with_on_events(mut self, value: Vec<OnEvent>) -> Self {
        self.state.on_events = Some(value);
        self
    }

    pub fn with_timeout(mut self, value: impl Into<String>) -> Self {
        self.state.timeout = Some(value.into());
        self
    }

    pub fn build(self) -> State {
        State::Event(self.state)
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperationStateBuilder {
    state: OperationState,
}

impl OperationStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();
    flow_setters!();

    pub fn with_action_mode(mut self, value: ActionMode) -> Self {
        self.state.action_mode = Some(value);
        self
    }

    pub fn with_actions(mut self, value: Vec<Action>) -> Self {
        self.state.actions = Some(value);
        self
    }

    pub fn with_timeout(mut self, value: impl Into<String>) -> Self {
        self.state.timeout = Some(value.into());
        self
    }

    pub fn build(self) -> State {
        State::Operation(self.state)
    }
}

/// Switch states route through their conditions and have no transition/end setters.
#[derive(Debug, Clone, Default)]
pub struct SwitchStateBuilder {
    state: SwitchState,
}

impl SwitchStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();

    pub fn with_data_conditions(mut self, value: Vec<DataCondition>) -> Self {
        self.state.data_conditions = Some(value);
        self
    }

    pub fn with_event_conditions(mut self, value: Vec<EventCondition>) -> Self {
        self.state.event_conditions = Some(value);
        self
    }

    pub fn with_default_condition(mut self, value: DefaultCondition) -> Self {
        self.state.default_condition = Some(value);
        self
    }

    pub fn with_event_timeout(mut self, value: impl Into<String>) -> Self {
        self.state.event_timeout = Some(value.into());
        self
    }

    pub fn build(self) -> State {
        State::Switch(self.state)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DelayStateBuilder {
    state: DelayState,
}

impl DelayStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();
    flow_setters!();

    pub fn with_time_delay(mut self, value: impl Into<String>) -> Self {
        self.state.time_delay = Some(value.into());
        self
    }

    pub fn build(self) -> State {
        State::Delay(self.state)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParallelStateBuilder {
    state: ParallelState,
}

impl ParallelStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();
    flow_setters!();

    pub fn with_branches(mut self, value: Vec<Branch>) -> Self {
        self.state.branches = Some(value);
        self
    }

    pub fn with_completion_type(mut self, value: CompletionType) -> Self {
        self.state.completion_type = Some(value);
        self
    }

    /// Number of branches that must complete when the completion type is `n_of_m`.
    pub fn with_num_completed(mut self, value: u32) -> Self {
        self.state.num_completed = Some(value);
        self
    }

    pub fn build(self) -> State {
        State::Parallel(self.state)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubFlowStateBuilder {
    state: SubFlowState,
}

impl SubFlowStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();
    flow_setters!();

    pub fn with_workflow_id(mut self, value: impl Into<String>) -> Self {
        self.state.workflow_id = Some(value.into());
        self
    }

    pub fn with_wait_for_completion(mut self, value: bool) -> Self {
        self.state.wait_for_completion = Some(value);
        self
    }

    pub fn with_repeat(mut self, value: Repeat) -> Self {
        self.state.repeat = Some(value);
        self
    }

    pub fn build(self) -> State {
        State::SubFlow(self.state)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InjectStateBuilder {
    state: InjectState,
}

impl InjectStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();
    flow_setters!();

    pub fn with_data(mut self, value: Value) -> Self {
        self.state.data = Some(value);
        self
    }

    pub fn build(self) -> State {
        State::Inject(self.state)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForEachStateBuilder {
    state: ForEachState,
}

impl ForEachStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();
    flow_setters!();

    pub fn with_input_collection(mut self, value: impl Into<String>) -> Self {
        self.state.input_collection = Some(value.into());
        self
    }

    pub fn with_output_collection(mut self, value: impl Into<String>) -> Self {
        self.state.output_collection = Some(value.into());
        self
    }

    pub fn with_iteration_param(mut self, value: impl Into<String>) -> Self {
        self.state.iteration_param = Some(value.into());
        self
    }

    pub fn with_max(mut self, value: impl Into<NumberOrString>) -> Self {
        self.state.max = Some(value.into());
        self
    }

    pub fn with_actions(mut self, value: Vec<Action>) -> Self {
        self.state.actions = Some(value);
        self
    }

    pub fn build(self) -> State {
        State::ForEach(self.state)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallbackStateBuilder {
    state: CallbackState,
}

impl CallbackStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    state_setters!();
    flow_setters!();

    pub fn with_action(mut self, value: Action) -> Self {
        self.state.action = Some(value);
        self
    }

    pub fn with_event_ref(mut self, value: impl Into<String>) -> Self {
        self.state.event_ref = Some(value.into());
        self
    }

    pub fn with_timeout(mut self, value: impl Into<String>) -> Self {
        self.state.timeout = Some(value.into());
        self
    }

    pub fn with_event_data_filter(mut self, value: EventDataFilter) -> Self {
        self.state.event_data_filter = Some(value);
        self
    }

    pub fn build(self) -> State {
        State::Callback(self.state)
    }
}
