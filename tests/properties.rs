//! Property tests for the root builder's assembly rules.
mod common;
use common::*;
use proptest::prelude::*;
use sekkei::prelude::*;
use serde_json::json;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn arb_uri() -> impl Strategy<Value = String> {
    "[a-z]{3,8}".prop_map(|host| format!("http://{}:8080/defs.json", host))
}

fn arb_events(min: usize, max: usize) -> impl Strategy<Value = Vec<EventDef>> {
    prop::collection::vec(
        (arb_token(), arb_token()).prop_map(|(name, kind)| {
            EventBuilder::new()
                .with_name(name)
                .with_type(kind)
                .with_source("my/source")
                .build()
        }),
        min..max,
    )
}

/// A chain of inject states where each transitions to the next and the last ends.
fn chain_of_states(count: usize) -> Vec<State> {
    (0..count)
        .map(|i| {
            let builder = InjectStateBuilder::new()
                .with_name(format!("step{}", i))
                .with_data(json!({ "step": i }));
            if i + 1 == count {
                builder.with_end(true).build()
            } else {
                builder.with_transition(format!("step{}", i + 1)).build()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_last_write_wins(first in arb_token(), second in arb_token()) {
        let workflow = hello_builder()
            .with_id(first.clone())
            .with_id(second.clone())
            .with_name(first.clone())
            .with_name(second.clone())
            .build()
            .unwrap();

        prop_assert_eq!(workflow.id(), second.as_str());
        prop_assert_eq!(workflow.name(), second.as_str());
    }

    #[test]
    fn prop_build_is_deterministic(count in 1usize..6) {
        let build = || {
            WorkflowBuilder::new()
                .with_id("chain")
                .with_name("Chain")
                .with_version("1.0")
                .with_start("step0")
                .with_states(chain_of_states(count))
                .with_metadata((0..count).map(|i| (format!("k{}", i), format!("v{}", i))))
                .with_validator_factory(SchemaValidatorFactory::with_options(ValidationOptions::strict()))
                .build()
        };

        let first = build().unwrap();
        let second = build().unwrap();
        prop_assert_eq!(first.states().len(), count);
        prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn prop_uri_takes_precedence_over_inline(uri in arb_uri(), events in arb_events(0, 4)) {
        let definitions = EventsBuilder::new()
            .with_uri_definition(uri.clone())
            .with_events(events)
            .build();

        prop_assert_eq!(definitions.uri(), Some(uri.as_str()));
        prop_assert!(definitions.inline().is_none());
    }

    #[test]
    fn prop_inline_events_serialize_in_order(events in arb_events(1, 5)) {
        let names: Vec<String> = events.iter().filter_map(|e| e.name.clone()).collect();
        let workflow = hello_builder()
            .with_events(EventsBuilder::new().with_events(events).build())
            .build()
            .unwrap();

        let value = workflow.to_value().unwrap();
        let serialized: Vec<String> = value["events"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap().to_string())
            .collect();
        prop_assert_eq!(serialized, names);
    }

    #[test]
    fn prop_missing_mandatory_fields_never_finalize(
        has_id in any::<bool>(),
        has_name in any::<bool>(),
        has_version in any::<bool>(),
        has_start in any::<bool>(),
        has_states in any::<bool>(),
    ) {
        let mut builder = WorkflowBuilder::new();
        if has_id { builder = builder.with_id("id"); }
        if has_name { builder = builder.with_name("name"); }
        if has_version { builder = builder.with_version("1.0"); }
        if has_start { builder = builder.with_start("Hello State"); }
        if has_states { builder = builder.with_states(vec![hello_state()]); }

        let missing = [has_id, has_name, has_version, has_start, has_states]
            .iter()
            .filter(|present| !**present)
            .count();

        match builder.build() {
            Ok(_) => prop_assert_eq!(missing, 0),
            Err(errors) => prop_assert_eq!(errors.len(), missing),
        }
    }
}
