use crate::model::{
    Action, ActionDataFilter, ActionMode, Branch, EventDataFilter, EventRef, FunctionRef, OnEvent,
    Repeat,
};

fn collect_names(values: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    values.into_iter().map(Into::into).collect()
}

#[derive(Debug, Clone, Default)]
pub struct ActionBuilder {
    action: Action,
}

impl ActionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.action.name = Some(value.into());
        self
    }

    pub fn with_function_ref(mut self, value: impl Into<FunctionRef>) -> Self {
        self.action.function_ref = Some(value.into());
        self
    }

    pub fn with_event_ref(mut self, value: EventRef) -> Self {
        self.action.event_ref = Some(value);
        self
    }

    pub fn with_timeout(mut self, value: impl Into<String>) -> Self {
        self.action.timeout = Some(value.into());
        self
    }

    pub fn with_action_data_filter(mut self, value: ActionDataFilter) -> Self {
        self.action.action_data_filter = Some(value);
        self
    }

    pub fn build(self) -> Action {
        self.action
    }
}

#[derive(Debug, Clone, Default)]
pub struct BranchBuilder {
    branch: Branch,
}

impl BranchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.branch.name = Some(value.into());
        self
    }

    pub fn with_actions(mut self, value: Vec<Action>) -> Self {
        self.branch.actions = Some(value);
        self
    }

    pub fn with_workflow_id(mut self, value: impl Into<String>) -> Self {
        self.branch.workflow_id = Some(value.into());
        self
    }

    pub fn build(self) -> Branch {
        self.branch
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepeatBuilder {
    repeat: Repeat,
}

impl RepeatBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expression(mut self, value: impl Into<String>) -> Self {
        self.repeat.expression = Some(value.into());
        self
    }

    pub fn with_check_before(mut self, value: bool) -> Self {
        self.repeat.check_before = Some(value);
        self
    }

    pub fn with_max(mut self, value: u32) -> Self {
        self.repeat.max = Some(value);
        self
    }

    pub fn with_continue_on_error(mut self, value: bool) -> Self {
        self.repeat.continue_on_error = Some(value);
        self
    }

    pub fn with_stop_on_events(mut self, value: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.repeat.stop_on_events = Some(collect_names(value));
        self
    }

    pub fn build(self) -> Repeat {
        self.repeat
    }
}

#[derive(Debug, Clone, Default)]
pub struct OnEventBuilder {
    on_event: OnEvent,
}

impl OnEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event_refs(mut self, value: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.on_event.event_refs = Some(collect_names(value));
        self
    }

    pub fn with_action_mode(mut self, value: ActionMode) -> Self {
        self.on_event.action_mode = Some(value);
        self
    }

    pub fn with_actions(mut self, value: Vec<Action>) -> Self {
        self.on_event.actions = Some(value);
        self
    }

    pub fn with_event_data_filter(mut self, value: EventDataFilter) -> Self {
        self.on_event.event_data_filter = Some(value);
        self
    }

    pub fn build(self) -> OnEvent {
        self.on_event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_on_event_builder() {
        let on_event = OnEventBuilder::new()
            .with_event_refs(["CarTurnedOnEvent"])
            .with_action_mode(ActionMode::Parallel)
            .build();
        assert_eq!(
            serde_json::to_value(&on_event).unwrap(),
            json!({"eventRefs": ["CarTurnedOnEvent"], "actionMode": "parallel"})
        );
    }

    #[test]
    fn test_repeat_builder_only_emits_set_fields() {
        let repeat = RepeatBuilder::new()
            .with_stop_on_events(vec!["CarTurnedOffEvent".to_string()])
            .build();
        assert_eq!(
            serde_json::to_value(&repeat).unwrap(),
            json!({"stopOnEvents": ["CarTurnedOffEvent"]})
        );
    }

    #[test]
    fn test_branch_shapes() {
        let by_actions = BranchBuilder::new()
            .with_name("notify")
            .with_actions(vec![ActionBuilder::new().with_function_ref("sendEmail").build()])
            .build();
        assert!(by_actions.workflow_id.is_none());

        let by_workflow = BranchBuilder::new()
            .with_name("audit")
            .with_workflow_id("audit-flow")
            .build();
        assert!(by_workflow.actions.is_none());
        assert_eq!(
            serde_json::to_value(&by_workflow).unwrap(),
            json!({"name": "audit", "workflowId": "audit-flow"})
        );
    }
}
