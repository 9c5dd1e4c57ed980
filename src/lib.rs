//! # Sekkei - Workflow Document Builder
//!
//! **Sekkei** assembles serverless workflow documents through fluent builders
//! and validates them before handing back a finalized value. Instead of
//! writing the nested JSON structure by hand, client code builds each entity
//! (states, events, functions, retries, actions, ...) with its own builder and
//! feeds the results into a root [`builder::WorkflowBuilder`].
//!
//! ## Core Workflow
//!
//! 1.  **Build Entities**: Use the entity builders (`EventBuilder`, `InjectStateBuilder`,
//!     `RepeatBuilder`, ...) to produce model values. These never fail.
//! 2.  **Assemble the Root**: Pass the results into `WorkflowBuilder`'s setters in any order.
//!     Repeated setters keep the last value.
//! 3.  **Finalize**: `WorkflowBuilder::build` asks its [`validation::ValidatorFactory`] for a
//!     validator bound to the draft. A valid draft becomes an immutable [`model::Workflow`];
//!     an invalid one yields a [`error::ValidationErrors`] listing every violation.
//! 4.  **Serialize**: The finalized workflow serializes to the workflow JSON schema, with
//!     unset optional fields omitted.
//!
//! ## Quick Start
//!
//! ```rust
//! use sekkei::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let events = EventsBuilder::new()
//!         .with_events(vec![EventBuilder::new()
//!             .with_name("CarTurnedOnEvent")
//!             .with_type("car.events")
//!             .with_source("my/car/start")
//!             .build()])
//!         .build();
//!
//!     let workflow = WorkflowBuilder::new()
//!         .with_id("checkcarvitals")
//!         .with_name("Check Car Vitals Workflow")
//!         .with_version("1.0")
//!         .with_start("WhenCarIsOn")
//!         .with_states(vec![
//!             EventStateBuilder::new()
//!                 .with_name("WhenCarIsOn")
//!                 .with_on_events(vec![OnEventBuilder::new()
//!                     .with_event_refs(["CarTurnedOnEvent"])
//!                     .build()])
//!                 .with_transition("Report")
//!                 .build(),
//!             InjectStateBuilder::new()
//!                 .with_name("Report")
//!                 .with_data(json!({"status": "checked"}))
//!                 .with_end(true)
//!                 .build(),
//!         ])
//!         .with_events(events)
//!         .build()?;
//!
//!     println!("{}", workflow.to_json_pretty()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Validation
//!
//! Implement [`validation::WorkflowValidator`] and [`validation::ValidatorFactory`] and
//! pass the factory to `WorkflowBuilder::with_validator_factory` to replace the default
//! [`validation::SchemaValidatorFactory`]. The default factory can also be tuned with
//! [`validation::ValidationOptions`], e.g. `ValidationOptions::strict()` to additionally
//! require `start` to name an existing state.

pub mod builder;
pub mod error;
pub mod model;
pub mod prelude;
pub mod validation;
