//! Control-flow values: where a workflow starts, where a state goes next,
//! and how an execution path ends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An event produced when a transition is taken or an execution path ends.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProduceEvent {
    pub event_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_attributes: Option<Value>,
}

/// The next state of a workflow, either by bare name or with extra options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transition {
    Name(String),
    Definition(TransitionDef),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDef {
    pub next_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produce_events: Option<Vec<ProduceEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensate: Option<bool>,
}

impl Transition {
    /// Name of the state this transition leads to.
    pub fn next_state(&self) -> &str {
        match self {
            Transition::Name(name) => name,
            Transition::Definition(def) => &def.next_state,
        }
    }
}

impl From<&str> for Transition {
    fn from(name: &str) -> Self {
        Transition::Name(name.to_string())
    }
}

impl From<String> for Transition {
    fn from(name: String) -> Self {
        Transition::Name(name)
    }
}

impl From<TransitionDef> for Transition {
    fn from(def: TransitionDef) -> Self {
        Transition::Definition(def)
    }
}

/// The end of an execution path, either a bare terminate flag or a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum End {
    Terminate(bool),
    Definition(EndDef),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produce_events: Option<Vec<ProduceEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensate: Option<bool>,
}

impl From<bool> for End {
    fn from(terminate: bool) -> Self {
        End::Terminate(terminate)
    }
}

impl From<EndDef> for End {
    fn from(def: EndDef) -> Self {
        End::Definition(def)
    }
}

/// A cron expression, optionally bounded by an ISO 8601 date-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CronDef {
    Expression(String),
    Definition(CronSchedule),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronSchedule {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

/// When workflow instances are created automatically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<CronDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// The initial state of a workflow, optionally with a start schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Start {
    Name(String),
    Scheduled(ScheduledStart),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledStart {
    pub state_name: String,
    pub schedule: Schedule,
}

impl Start {
    pub fn state_name(&self) -> &str {
        match self {
            Start::Name(name) => name,
            Start::Scheduled(scheduled) => &scheduled.state_name,
        }
    }
}

impl From<&str> for Start {
    fn from(name: &str) -> Self {
        Start::Name(name.to_string())
    }
}

impl From<String> for Start {
    fn from(name: String) -> Self {
        Start::Name(name)
    }
}

impl From<ScheduledStart> for Start {
    fn from(scheduled: ScheduledStart) -> Self {
        Start::Scheduled(scheduled)
    }
}

/// Maximum workflow execution time. Opaque data at this layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecTimeout {
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_before: Option<String>,
}

impl ExecTimeout {
    pub fn new(duration: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transition_next_state() {
        let plain = Transition::from("Next");
        let detailed = Transition::from(TransitionDef {
            next_state: "Other".to_string(),
            compensate: Some(true),
            ..Default::default()
        });
        assert_eq!(plain.next_state(), "Next");
        assert_eq!(detailed.next_state(), "Other");
        assert_eq!(
            serde_json::to_value(&detailed).unwrap(),
            json!({"nextState": "Other", "compensate": true})
        );
    }

    #[test]
    fn test_end_shapes() {
        assert_eq!(serde_json::to_value(End::from(true)).unwrap(), json!(true));
        let end = End::from(EndDef {
            terminate: Some(true),
            ..Default::default()
        });
        assert_eq!(serde_json::to_value(&end).unwrap(), json!({"terminate": true}));
    }

    #[test]
    fn test_scheduled_start_state_name() {
        let start = Start::from(ScheduledStart {
            state_name: "Poll".to_string(),
            schedule: Schedule {
                cron: Some(CronDef::Expression("0 0/15 * * * ?".to_string())),
                ..Default::default()
            },
        });
        assert_eq!(start.state_name(), "Poll");
        assert_eq!(
            serde_json::to_value(&start).unwrap(),
            json!({"stateName": "Poll", "schedule": {"cron": "0 0/15 * * * ?"}})
        );
    }
}
