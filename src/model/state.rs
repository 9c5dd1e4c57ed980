use super::Metadata;
use super::action::{Action, ActionMode, Branch, EventDataFilter, OnEvent, Repeat};
use super::flow::{End, Transition};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDataFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Handles a named error raised while a state executes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHandler {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
}

/// A switch branch taken when a workflow expression over the state data holds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A switch branch taken when a referenced event arrives.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub event_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_data_filter: Option<EventDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// The switch branch taken when no other condition matches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionType {
    #[default]
    And,
    Xor,
    NOfM,
}

/// Waits for one or all of a set of events, then performs actions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_events: Option<Vec<OnEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Performs a list of actions in sequence or in parallel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_mode: Option<ActionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Routes on data or event conditions. Carries no transition or end of its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_conditions: Option<Vec<DataCondition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_conditions: Option<Vec<EventCondition>>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_condition: Option<DefaultCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Runs branches concurrently, completing per `completion_type`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<Branch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_type: Option<CompletionType>,
    #[serde(rename = "n", skip_serializing_if = "Option::is_none")]
    pub num_completed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Invokes another workflow by id, optionally repeating it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubFlowState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_completion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Injects static data into the state data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Runs actions once per element of an input collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForEachState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<NumberOrExpression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Upper bound on parallel for-each iterations: a count or a workflow expression.
pub type NumberOrExpression = super::definitions::NumberOrString;

/// Performs an action, then waits for a callback event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_data_filter: Option<EventDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_data_filter: Option<StateDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_errors: Option<Vec<ErrorHandler>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<End>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_for_compensation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A workflow state, discriminated by its `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum State {
    Event(EventState),
    Operation(OperationState),
    Switch(SwitchState),
    Delay(DelayState),
    Parallel(ParallelState),
    #[serde(rename = "subflow")]
    SubFlow(SubFlowState),
    Inject(InjectState),
    ForEach(ForEachState),
    Callback(CallbackState),
}

/// The `type` discriminant of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    Event,
    Operation,
    Switch,
    Delay,
    Parallel,
    SubFlow,
    Inject,
    ForEach,
    Callback,
}

impl StateType {
    /// The literal written to the document's `type` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateType::Event => "event",
            StateType::Operation => "operation",
            StateType::Switch => "switch",
            StateType::Delay => "delay",
            StateType::Parallel => "parallel",
            StateType::SubFlow => "subflow",
            StateType::Inject => "inject",
            StateType::ForEach => "forEach",
            StateType::Callback => "callback",
        }
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl State {
    pub fn state_type(&self) -> StateType {
        match self {
            State::Event(_) => StateType::Event,
            State::Operation(_) => StateType::Operation,
            State::Switch(_) => StateType::Switch,
            State::Delay(_) => StateType::Delay,
            State::Parallel(_) => StateType::Parallel,
            State::SubFlow(_) => StateType::SubFlow,
            State::Inject(_) => StateType::Inject,
            State::ForEach(_) => StateType::ForEach,
            State::Callback(_) => StateType::Callback,
        }
    }

    pub fn name(&self) -> Option<&str> {
        let name = match self {
            State::Event(s) => &s.name,
            State::Operation(s) => &s.name,
            State::Switch(s) => &s.name,
            State::Delay(s) => &s.name,
            State::Parallel(s) => &s.name,
            State::SubFlow(s) => &s.name,
            State::Inject(s) => &s.name,
            State::ForEach(s) => &s.name,
            State::Callback(s) => &s.name,
        };
        name.as_deref()
    }

    /// The state's own transition. Switch states route through their conditions
    /// and always report `None`.
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            State::Switch(_) => None,
            State::Event(s) => s.transition.as_ref(),
            State::Operation(s) => s.transition.as_ref(),
            State::Delay(s) => s.transition.as_ref(),
            State::Parallel(s) => s.transition.as_ref(),
            State::SubFlow(s) => s.transition.as_ref(),
            State::Inject(s) => s.transition.as_ref(),
            State::ForEach(s) => s.transition.as_ref(),
            State::Callback(s) => s.transition.as_ref(),
        }
    }

    /// The state's own end definition. Always `None` for switch states.
    pub fn end(&self) -> Option<&End> {
        match self {
            State::Switch(_) => None,
            State::Event(s) => s.end.as_ref(),
            State::Operation(s) => s.end.as_ref(),
            State::Delay(s) => s.end.as_ref(),
            State::Parallel(s) => s.end.as_ref(),
            State::SubFlow(s) => s.end.as_ref(),
            State::Inject(s) => s.end.as_ref(),
            State::ForEach(s) => s.end.as_ref(),
            State::Callback(s) => s.end.as_ref(),
        }
    }
}
