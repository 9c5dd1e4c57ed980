//! Common test utilities for building workflow documents and loading fixtures.
use sekkei::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Loads a golden document from `tests/fixtures`.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture '{}': {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Fixture '{}' is not valid JSON: {}", path.display(), e))
}

/// The single inject state used by the hello world document.
#[allow(dead_code)]
pub fn hello_state() -> State {
    InjectStateBuilder::new()
        .with_name("Hello State")
        .with_data(json!({"result": "Hello World!"}))
        .with_end(true)
        .build()
}

/// A root builder with every mandatory field of the hello world document set.
///
/// Note that `start` names a state that is not in `states`; the default
/// options accept that, strict options do not.
#[allow(dead_code)]
pub fn hello_builder() -> WorkflowBuilder {
    WorkflowBuilder::new()
        .with_id("helloworld")
        .with_name("hello world")
        .with_version("0.6")
        .with_start("hello builder")
        .with_states(vec![hello_state()])
}

/// A root builder for a small, fully consistent two-state document.
#[allow(dead_code)]
pub fn greeting_builder() -> WorkflowBuilder {
    WorkflowBuilder::new()
        .with_id("greeting")
        .with_name("Greeting Workflow")
        .with_version("1.0")
        .with_start("Wait")
        .with_states(vec![
            DelayStateBuilder::new()
                .with_name("Wait")
                .with_time_delay("PT1S")
                .with_transition("Greet")
                .build(),
            InjectStateBuilder::new()
                .with_name("Greet")
                .with_data(json!({"greeting": "Hello"}))
                .with_end(true)
                .build(),
        ])
}
