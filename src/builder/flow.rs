use crate::model::{End, EndDef, ProduceEvent, Transition, TransitionDef};

/// Builds a [`Transition`].
///
/// Produces the bare state-name form unless produced events or a compensate
/// flag were set, in which case the object form is emitted.
#[derive(Debug, Clone, Default)]
pub struct TransitionBuilder {
    next_state: Option<String>,
    produce_events: Option<Vec<ProduceEvent>>,
    compensate: Option<bool>,
}

impl TransitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next_state(mut self, value: impl Into<String>) -> Self {
        self.next_state = Some(value.into());
        self
    }

    pub fn with_produce_events(mut self, value: Vec<ProduceEvent>) -> Self {
        self.produce_events = Some(value);
        self
    }

    pub fn with_compensate(mut self, value: bool) -> Self {
        self.compensate = Some(value);
        self
    }

    pub fn build(self) -> Transition {
        let next_state = self.next_state.unwrap_or_default();
        if self.produce_events.is_none() && self.compensate.is_none() {
            return Transition::Name(next_state);
        }
        Transition::Definition(TransitionDef {
            next_state,
            produce_events: self.produce_events,
            compensate: self.compensate,
        })
    }
}

/// Builds an [`End`].
///
/// With nothing but (at most) a terminate flag set, the bare boolean form is
/// emitted, defaulting to `true`.
#[derive(Debug, Clone, Default)]
pub struct EndBuilder {
    terminate: Option<bool>,
    produce_events: Option<Vec<ProduceEvent>>,
    compensate: Option<bool>,
}

impl EndBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_terminate(mut self, value: bool) -> Self {
        self.terminate = Some(value);
        self
    }

    pub fn with_produce_events(mut self, value: Vec<ProduceEvent>) -> Self {
        self.produce_events = Some(value);
        self
    }

    pub fn with_compensate(mut self, value: bool) -> Self {
        self.compensate = Some(value);
        self
    }

    pub fn build(self) -> End {
        if self.produce_events.is_none() && self.compensate.is_none() {
            return End::Terminate(self.terminate.unwrap_or(true));
        }
        End::Definition(EndDef {
            terminate: self.terminate,
            produce_events: self.produce_events,
            compensate: self.compensate,
        })
    }
}
