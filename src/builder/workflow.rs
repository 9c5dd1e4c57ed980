use super::definitions::collect_metadata;
use crate::error::{ValidationError, ValidationErrors};
use crate::model::{
    Events, ExecTimeout, Functions, Retries, Start, State, Workflow, WorkflowDraft,
};
use crate::validation::{SchemaValidatorFactory, ValidatorFactory};
use std::fmt;

/// Assembles the root workflow document and gates it through validation.
///
/// Setters may be called in any order and repeated; the last write wins.
/// [`build`](Self::build) either returns a finalized [`Workflow`] or every
/// violation the validator found, never a partially valid document.
pub struct WorkflowBuilder {
    draft: WorkflowDraft,
    validator_factory: Box<dyn ValidatorFactory>,
}

impl fmt::Debug for WorkflowBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowBuilder")
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl Default for WorkflowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowBuilder {
    /// A builder validating with [`SchemaValidatorFactory`] and default options.
    pub fn new() -> Self {
        Self {
            draft: WorkflowDraft::default(),
            validator_factory: Box::new(SchemaValidatorFactory::default()),
        }
    }

    /// Replaces the validation strategy used by [`build`](Self::build).
    pub fn with_validator_factory(mut self, factory: impl ValidatorFactory + 'static) -> Self {
        self.validator_factory = Box::new(factory);
        self
    }

    pub fn with_id(mut self, value: impl Into<String>) -> Self {
        self.draft.id = Some(value.into());
        self
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.draft.name = Some(value.into());
        self
    }

    pub fn with_version(mut self, value: impl Into<String>) -> Self {
        self.draft.version = Some(value.into());
        self
    }

    pub fn with_start(mut self, value: impl Into<Start>) -> Self {
        self.draft.start = Some(value.into());
        self
    }

    pub fn with_states(mut self, value: Vec<State>) -> Self {
        self.draft.states = Some(value);
        self
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.draft.description = Some(value.into());
        self
    }

    pub fn with_schema_version(mut self, value: impl Into<String>) -> Self {
        self.draft.schema_version = Some(value.into());
        self
    }

    pub fn with_expression_lang(mut self, value: impl Into<String>) -> Self {
        self.draft.expression_lang = Some(value.into());
        self
    }

    pub fn with_exec_timeout(mut self, value: ExecTimeout) -> Self {
        self.draft.exec_timeout = Some(value);
        self
    }

    pub fn with_keep_active(mut self, value: bool) -> Self {
        self.draft.keep_active = Some(value);
        self
    }

    pub fn with_metadata<K, V>(mut self, value: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.draft.metadata = Some(collect_metadata(value));
        self
    }

    /// Accepts a URI (`&str`/`String`), an inline `Vec<EventDef>`, or the
    /// output of an [`crate::builder::EventsBuilder`].
    pub fn with_events(mut self, value: impl Into<Events>) -> Self {
        self.draft.events = Some(value.into());
        self
    }

    pub fn with_functions(mut self, value: impl Into<Functions>) -> Self {
        self.draft.functions = Some(value.into());
        self
    }

    pub fn with_retries(mut self, value: impl Into<Retries>) -> Self {
        self.draft.retries = Some(value.into());
        self
    }

    /// The document staged so far.
    pub fn draft(&self) -> &WorkflowDraft {
        &self.draft
    }

    /// Validates the staged draft and finalizes it.
    pub fn build(self) -> Result<Workflow, ValidationErrors> {
        let label = self.draft.id.as_deref().unwrap_or("<unnamed>").to_string();
        log::debug!("Validating workflow draft '{}'", label);

        {
            let validator = self.validator_factory.workflow_validator(&self.draft);
            if !validator.is_valid() {
                let mut errors = validator.validate();
                if errors.is_empty() {
                    errors.push(ValidationError::custom(
                        "Validator rejected the workflow without reporting a violation",
                    ));
                }
                log::warn!(
                    "Rejected workflow '{}' with {} violation(s)",
                    label,
                    errors.len()
                );
                return Err(errors);
            }
        }

        let workflow = Workflow::try_from(self.draft)?;
        log::debug!(
            "Finalized workflow '{}' with {} state(s)",
            label,
            workflow.states().len()
        );
        Ok(workflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::InjectStateBuilder;
    use crate::validation::WorkflowValidator;
    use serde_json::json;

    struct AcceptAll;

    impl WorkflowValidator for AcceptAll {
        fn is_valid(&self) -> bool {
            true
        }

        fn validate(&self) -> ValidationErrors {
            ValidationErrors::new()
        }
    }

    struct AcceptAllFactory;

    impl ValidatorFactory for AcceptAllFactory {
        fn workflow_validator<'a>(
            &self,
            _draft: &'a WorkflowDraft,
        ) -> Box<dyn WorkflowValidator + 'a> {
            Box::new(AcceptAll)
        }
    }

    fn hello_state() -> State {
        InjectStateBuilder::new()
            .with_name("Hello State")
            .with_data(json!({"result": "Hello World!"}))
            .with_end(true)
            .build()
    }

    #[test]
    fn test_empty_builder_fails() {
        let errors = WorkflowBuilder::new().build().unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_draft_reflects_setters() {
        let builder = WorkflowBuilder::new()
            .with_id("first")
            .with_id("second")
            .with_keep_active(true);
        assert_eq!(builder.draft().id.as_deref(), Some("second"));
        assert_eq!(builder.draft().keep_active, Some(true));
        assert!(builder.draft().states.is_none());
    }

    #[test]
    fn test_permissive_validator_cannot_finalize_incomplete_draft() {
        let errors = WorkflowBuilder::new()
            .with_validator_factory(AcceptAllFactory)
            .with_states(vec![hello_state()])
            .build()
            .unwrap_err();
        assert_eq!(
            errors.as_slice(),
            &[
                ValidationError::MissingField("id"),
                ValidationError::MissingField("name"),
                ValidationError::MissingField("version"),
                ValidationError::MissingField("start"),
            ]
        );
    }

    #[test]
    fn test_debug_shows_draft() {
        let builder = WorkflowBuilder::new().with_id("helloworld");
        let text = format!("{:?}", builder);
        assert!(text.starts_with("WorkflowBuilder"));
        assert!(text.contains("helloworld"));
    }

    #[test]
    fn test_metadata_collects_pairs() {
        let workflow = WorkflowBuilder::new()
            .with_id("wf")
            .with_name("wf")
            .with_version("1.0")
            .with_start("Hello State")
            .with_states(vec![hello_state()])
            .with_metadata([("owner", "ops"), ("tier", "gold")])
            .build()
            .expect("workflow is valid");
        let metadata = workflow.metadata().expect("metadata was set");
        assert_eq!(metadata.get("owner").map(String::as_str), Some("ops"));
        assert_eq!(metadata.len(), 2);
        assert_eq!(
            workflow.to_value().unwrap()["metadata"],
            json!({"owner": "ops", "tier": "gold"})
        );
    }
}
