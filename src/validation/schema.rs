use super::{ValidationOptions, ValidatorFactory, WorkflowValidator};
use crate::error::{ValidationError, ValidationErrors};
use crate::model::{
    Action, Branch, DataCondition, DefaultCondition, Definitions, End, EventCondition, OnEvent, State,
    SwitchState, Transition, WorkflowDraft,
};
use ahash::AHashSet;
use itertools::Itertools;

/// The default validator: enforces the structural rules of the workflow schema.
pub struct SchemaValidator<'a> {
    draft: &'a WorkflowDraft,
    options: ValidationOptions,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(draft: &'a WorkflowDraft) -> Self {
        Self::with_options(draft, ValidationOptions::default())
    }

    pub fn with_options(draft: &'a WorkflowDraft, options: ValidationOptions) -> Self {
        Self { draft, options }
    }

    fn check_mandatory_fields(&self, errors: &mut ValidationErrors) {
        let draft = self.draft;
        let fields = [
            ("id", draft.id.as_deref()),
            ("name", draft.name.as_deref()),
            ("version", draft.version.as_deref()),
            ("start", draft.start.as_ref().map(|s| s.state_name())),
        ];
        for (field, value) in fields {
            if is_blank(value) {
                errors.push(ValidationError::MissingField(field));
            }
        }

        match &draft.states {
            None => errors.push(ValidationError::MissingField("states")),
            Some(states) if states.is_empty() => {
                errors.push(ValidationError::EmptyCollection("states".to_string()))
            }
            Some(_) => {}
        }
    }

    fn check_states(&self, states: &[State], errors: &mut ValidationErrors) {
        for (index, state) in states.iter().enumerate() {
            if is_blank(state.name()) {
                errors.push(ValidationError::MissingStateField {
                    index,
                    field: "name",
                });
            }
            check_variant_fields(index, state, errors);

            let location = state_label(index, state);
            check_actions(&location, state, errors);
            match state {
                State::Switch(switch) => check_switch(&location, switch, errors),
                _ => check_flow(&location, state.transition(), state.end(), errors),
            }
            if let State::Parallel(parallel) = state {
                for (i, branch) in parallel.branches.iter().flatten().enumerate() {
                    check_branch(i, branch, errors);
                }
            }
        }

        if self.options.check_unique_state_names {
            for name in states.iter().filter_map(State::name).duplicates() {
                errors.push(ValidationError::DuplicateStateName(name.to_string()));
            }
        }

        if self.options.check_start_reference {
            if let Some(start) = self.draft.start.as_ref().map(|s| s.state_name()) {
                let names: AHashSet<&str> = states.iter().filter_map(State::name).collect();
                if !start.trim().is_empty() && !names.contains(start) {
                    errors.push(ValidationError::UnknownStartState(start.to_string()));
                }
            }
        }
    }

    fn check_definitions(&self, errors: &mut ValidationErrors) {
        if !self.options.check_definitions_not_empty {
            return;
        }
        let draft = self.draft;
        let empties = [
            ("events", draft.events.as_ref().is_some_and(is_empty_inline)),
            ("functions", draft.functions.as_ref().is_some_and(is_empty_inline)),
            ("retries", draft.retries.as_ref().is_some_and(is_empty_inline)),
        ];
        for (field, empty) in empties {
            if empty {
                errors.push(ValidationError::EmptyCollection(field.to_string()));
            }
        }
    }

    /// Mandatory fields of inline event, function and retry definitions.
    fn check_definition_fields(&self, errors: &mut ValidationErrors) {
        let draft = self.draft;
        let mut require = |present: bool, kind: &'static str, index: usize, field: &'static str| {
            if !present {
                errors.push(ValidationError::MissingDefinitionField { kind, index, field });
            }
        };

        for (index, event) in inline_items(draft.events.as_ref()).iter().enumerate() {
            require(!is_blank(event.name.as_deref()), "event", index, "name");
        }
        for (index, function) in inline_items(draft.functions.as_ref()).iter().enumerate() {
            require(!is_blank(function.name.as_deref()), "function", index, "name");
            require(!is_blank(function.operation.as_deref()), "function", index, "operation");
        }
        for (index, retry) in inline_items(draft.retries.as_ref()).iter().enumerate() {
            require(!is_blank(retry.name.as_deref()), "retry", index, "name");
            require(retry.max_attempts.is_some(), "retry", index, "maxAttempts");
        }
    }
}

impl WorkflowValidator for SchemaValidator<'_> {
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.check_mandatory_fields(&mut errors);
        if let Some(states) = &self.draft.states {
            self.check_states(states, &mut errors);
        }
        self.check_definitions(&mut errors);
        self.check_definition_fields(&mut errors);
        errors
    }
}

/// Hands out a [`SchemaValidator`] per draft, configured with fixed options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidatorFactory {
    options: ValidationOptions,
}

impl SchemaValidatorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }
}

impl ValidatorFactory for SchemaValidatorFactory {
    fn workflow_validator<'a>(&self, draft: &'a WorkflowDraft) -> Box<dyn WorkflowValidator + 'a> {
        Box::new(SchemaValidator::with_options(draft, self.options))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn is_empty_inline<T>(definitions: &Definitions<T>) -> bool {
    definitions.inline().is_some_and(|defs| defs.is_empty())
}

fn inline_items<T>(definitions: Option<&Definitions<T>>) -> &[T] {
    definitions.and_then(Definitions::inline).unwrap_or_default()
}

fn state_label(index: usize, state: &State) -> String {
    match state.name() {
        Some(name) if !name.trim().is_empty() => format!("State '{}'", name),
        _ => format!("State at index {}", index),
    }
}

/// Exactly one of transition/end must be set.
fn check_flow(
    location: &str,
    transition: Option<&Transition>,
    end: Option<&End>,
    errors: &mut ValidationErrors,
) {
    if transition.is_some_and(|t| t.next_state().trim().is_empty()) {
        errors.push(ValidationError::BlankTransition(location.to_string()));
    }
    let found = match (transition.is_some(), end.is_some()) {
        (true, false) | (false, true) => return,
        (true, true) => "both",
        (false, false) => "neither",
    };
    errors.push(ValidationError::TransitionEndConflict {
        location: location.to_string(),
        found,
    });
}

fn check_switch(location: &str, switch: &SwitchState, errors: &mut ValidationErrors) {
    let data: &[DataCondition] = switch.data_conditions.as_deref().unwrap_or_default();
    let events: &[EventCondition] = switch.event_conditions.as_deref().unwrap_or_default();
    if data.is_empty() && events.is_empty() {
        let name = switch.name.clone().unwrap_or_else(|| location.to_string());
        errors.push(ValidationError::MissingSwitchConditions(name));
    }

    for (i, cond) in data.iter().enumerate() {
        let at = format!("{} data condition {}", location, i);
        check_flow(&at, cond.transition.as_ref(), cond.end.as_ref(), errors);
    }
    for (i, cond) in events.iter().enumerate() {
        let at = format!("{} event condition {}", location, i);
        check_flow(&at, cond.transition.as_ref(), cond.end.as_ref(), errors);
    }
    if let Some(DefaultCondition { transition, end }) = &switch.default_condition {
        let at = format!("{} default condition", location);
        check_flow(&at, transition.as_ref(), end.as_ref(), errors);
    }
}

fn check_branch(index: usize, branch: &Branch, errors: &mut ValidationErrors) {
    let has_actions = branch.actions.as_ref().is_some_and(|a| !a.is_empty());
    let has_workflow = !is_blank(branch.workflow_id.as_deref());
    if !has_actions && !has_workflow {
        let name = branch
            .name
            .clone()
            .unwrap_or_else(|| format!("#{}", index));
        errors.push(ValidationError::EmptyBranch(name));
    }
}

fn push_actions<'s>(prefix: &str, actions: Option<&'s [Action]>, out: &mut Vec<(String, &'s Action)>) {
    for (i, action) in actions.unwrap_or_default().iter().enumerate() {
        out.push((format!("{} action {}", prefix, i), action));
    }
}

/// Every action reachable from a state must call a function or trigger an event.
fn check_actions(location: &str, state: &State, errors: &mut ValidationErrors) {
    let mut actions = Vec::new();
    match state {
        State::Operation(s) => push_actions(location, s.actions.as_deref(), &mut actions),
        State::ForEach(s) => push_actions(location, s.actions.as_deref(), &mut actions),
        State::Callback(s) => {
            if let Some(action) = &s.action {
                actions.push((format!("{} action", location), action));
            }
        }
        State::Event(s) => {
            for (i, on_event) in s.on_events.iter().flatten().enumerate() {
                let prefix = format!("{} onEvents {}", location, i);
                push_actions(&prefix, on_event.actions.as_deref(), &mut actions);
            }
        }
        State::Parallel(s) => {
            for (i, branch) in s.branches.iter().flatten().enumerate() {
                let label = branch.name.clone().unwrap_or_else(|| format!("#{}", i));
                let prefix = format!("{} branch '{}'", location, label);
                push_actions(&prefix, branch.actions.as_deref(), &mut actions);
            }
        }
        State::Switch(_) | State::Delay(_) | State::SubFlow(_) | State::Inject(_) => {}
    }

    for (at, action) in actions {
        if action.function_ref.is_none() && action.event_ref.is_none() {
            errors.push(ValidationError::ActionWithoutRef(at));
        }
    }
}

/// Fields a particular state variant cannot do without.
fn check_variant_fields(index: usize, state: &State, errors: &mut ValidationErrors) {
    let mut require = |present: bool, field: &'static str| {
        if !present {
            errors.push(ValidationError::MissingStateField { index, field });
        }
    };

    match state {
        State::Event(s) => {
            let on_events: &[OnEvent] = s.on_events.as_deref().unwrap_or_default();
            require(!on_events.is_empty(), "onEvents");
            for on_event in on_events {
                require(
                    on_event.event_refs.as_ref().is_some_and(|r| !r.is_empty()),
                    "onEvents.eventRefs",
                );
            }
        }
        State::Operation(s) => require(s.actions.is_some(), "actions"),
        State::Switch(_) => {}
        State::Delay(s) => require(!is_blank(s.time_delay.as_deref()), "timeDelay"),
        State::Parallel(s) => require(s.branches.as_ref().is_some_and(|b| !b.is_empty()), "branches"),
        State::SubFlow(s) => require(!is_blank(s.workflow_id.as_deref()), "workflowId"),
        State::Inject(s) => require(s.data.is_some(), "data"),
        State::ForEach(s) => require(!is_blank(s.input_collection.as_deref()), "inputCollection"),
        State::Callback(s) => {
            require(s.action.is_some(), "action");
            require(!is_blank(s.event_ref.as_deref()), "eventRef");
        }
    }
}
