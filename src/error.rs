use itertools::Itertools;
use std::path::PathBuf;
use thiserror::Error;

/// A single structural violation found in a workflow draft.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Workflow is missing mandatory field '{0}'")]
    MissingField(&'static str),

    #[error("State at index {index} is missing mandatory field '{field}'")]
    MissingStateField { index: usize, field: &'static str },

    #[error("'{0}' must not be empty")]
    EmptyCollection(String),

    #[error("Start state '{0}' does not name any state in 'states'")]
    UnknownStartState(String),

    #[error("State name '{0}' is used by more than one state")]
    DuplicateStateName(String),

    #[error("{location} must define exactly one of 'transition' or 'end', found {found}")]
    TransitionEndConflict { location: String, found: &'static str },

    #[error("Inline {kind} definition at index {index} is missing mandatory field '{field}'")]
    MissingDefinitionField {
        kind: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("{0} has a transition without a next state")]
    BlankTransition(String),

    #[error("{0} must reference a function or an event")]
    ActionWithoutRef(String),

    #[error("Branch '{0}' must define 'actions', 'workflowId', or both")]
    EmptyBranch(String),

    #[error("Switch state '{0}' must define 'dataConditions' or 'eventConditions'")]
    MissingSwitchConditions(String),

    #[error("{0}")]
    Custom(String),
}

impl ValidationError {
    /// A violation described only by its message, for custom validators.
    pub fn custom(message: impl Into<String>) -> Self {
        ValidationError::Custom(message.into())
    }
}

/// Every violation found in one draft, in discovery order.
///
/// Raised as a single failure from [`crate::builder::WorkflowBuilder::build`].
#[derive(Error, Debug, Clone, PartialEq, Default)]
#[error("Workflow validation failed: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors.len() {
        0 => "no violations recorded".to_string(),
        1 => errors[0].to_string(),
        n => format!("{} violations: {}", n, errors.iter().join("; ")),
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The human-readable message of each violation.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Errors that can occur while loading [`crate::validation::ValidationOptions`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read validation options from '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse validation options: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_violation_display() {
        let errors = ValidationErrors::from(vec![ValidationError::MissingField("id")]);
        assert_eq!(
            errors.to_string(),
            "Workflow validation failed: Workflow is missing mandatory field 'id'"
        );
    }

    #[test]
    fn test_multiple_violations_display() {
        let errors: ValidationErrors = vec![
            ValidationError::MissingField("id"),
            ValidationError::UnknownStartState("Nowhere".to_string()),
        ]
        .into_iter()
        .collect();
        let text = errors.to_string();
        assert!(text.contains("2 violations"));
        assert!(text.contains("'id'"));
        assert!(text.contains("Nowhere"));
    }

    #[test]
    fn test_custom_message() {
        let err = ValidationError::custom("any error");
        assert_eq!(err.to_string(), "any error");
    }
}
