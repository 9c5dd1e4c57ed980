use super::Metadata;
use super::definitions::{Events, Functions, Retries};
use super::flow::{ExecTimeout, Start};
use super::state::State;
use crate::error::{ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};

/// A workflow document under construction. Every field is optional so that a
/// validator can inspect whatever the caller managed to set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Start>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<State>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec_timeout: Option<ExecTimeout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Events>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Functions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<Retries>,
}

/// A finalized, validated workflow document.
///
/// Only [`crate::builder::WorkflowBuilder::build`] (or a [`TryFrom`] conversion
/// from a draft) produces one, and it exposes no mutators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    id: String,
    name: String,
    version: String,
    start: Start,
    states: Vec<State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expression_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exec_timeout: Option<ExecTimeout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keep_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Events>,
    #[serde(skip_serializing_if = "Option::is_none")]
    functions: Option<Functions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retries: Option<Retries>,
}

impl Workflow {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn start(&self) -> &Start {
        &self.start
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Looks up a state by name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name() == Some(name))
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn schema_version(&self) -> Option<&str> {
        self.schema_version.as_deref()
    }

    pub fn expression_lang(&self) -> Option<&str> {
        self.expression_lang.as_deref()
    }

    pub fn exec_timeout(&self) -> Option<&ExecTimeout> {
        self.exec_timeout.as_ref()
    }

    pub fn keep_active(&self) -> Option<bool> {
        self.keep_active
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn events(&self) -> Option<&Events> {
        self.events.as_ref()
    }

    pub fn functions(&self) -> Option<&Functions> {
        self.functions.as_ref()
    }

    pub fn retries(&self) -> Option<&Retries> {
        self.retries.as_ref()
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Promotes a draft once its mandatory fields are present. Does not run any
/// other check; pair it with a [`crate::validation::WorkflowValidator`].
impl TryFrom<WorkflowDraft> for Workflow {
    type Error = ValidationErrors;

    fn try_from(draft: WorkflowDraft) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        if draft.id.is_none() {
            errors.push(ValidationError::MissingField("id"));
        }
        if draft.name.is_none() {
            errors.push(ValidationError::MissingField("name"));
        }
        if draft.version.is_none() {
            errors.push(ValidationError::MissingField("version"));
        }
        if draft.start.is_none() {
            errors.push(ValidationError::MissingField("start"));
        }
        if draft.states.is_none() {
            errors.push(ValidationError::MissingField("states"));
        }

        match (draft.id, draft.name, draft.version, draft.start, draft.states) {
            (Some(id), Some(name), Some(version), Some(start), Some(states)) => Ok(Workflow {
                id,
                name,
                version,
                start,
                states,
                description: draft.description,
                schema_version: draft.schema_version,
                expression_lang: draft.expression_lang,
                exec_timeout: draft.exec_timeout,
                keep_active: draft.keep_active,
                metadata: draft.metadata,
                events: draft.events,
                functions: draft.functions,
                retries: draft.retries,
            }),
            _ => Err(errors),
        }
    }
}
