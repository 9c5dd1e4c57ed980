use crate::model::{
    Correlation, Definitions, EventDef, EventKind, FunctionDef, FunctionType, Metadata,
    NumberOrString, RetryDef,
};

pub(crate) fn collect_metadata<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Builds an [`EventDef`]. The event kind starts out as `consumed`.
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    event: EventDef,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.event.name = Some(value.into());
        self
    }

    pub fn with_source(mut self, value: impl Into<String>) -> Self {
        self.event.source = Some(value.into());
        self
    }

    pub fn with_type(mut self, value: impl Into<String>) -> Self {
        self.event.event_type = Some(value.into());
        self
    }

    pub fn with_kind(mut self, value: EventKind) -> Self {
        self.event.kind = value;
        self
    }

    pub fn with_correlation(mut self, value: Vec<Correlation>) -> Self {
        self.event.correlation = Some(value);
        self
    }

    pub fn with_metadata<K, V>(mut self, value: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.event.metadata = Some(collect_metadata(value));
        self
    }

    pub fn build(self) -> EventDef {
        self.event
    }
}

#[derive(Debug, Clone, Default)]
pub struct FunctionBuilder {
    function: FunctionDef,
}

impl FunctionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.function.name = Some(value.into());
        self
    }

    pub fn with_operation(mut self, value: impl Into<String>) -> Self {
        self.function.operation = Some(value.into());
        self
    }

    pub fn with_type(mut self, value: FunctionType) -> Self {
        self.function.function_type = Some(value);
        self
    }

    pub fn with_metadata<K, V>(mut self, value: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.function.metadata = Some(collect_metadata(value));
        self
    }

    pub fn build(self) -> FunctionDef {
        self.function
    }
}

/// Builds a [`RetryDef`]. Numeric fields take a number or its string form as-is.
#[derive(Debug, Clone, Default)]
pub struct RetryBuilder {
    retry: RetryDef,
}

impl RetryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.retry.name = Some(value.into());
        self
    }

    pub fn with_delay(mut self, value: impl Into<String>) -> Self {
        self.retry.delay = Some(value.into());
        self
    }

    pub fn with_max_delay(mut self, value: impl Into<String>) -> Self {
        self.retry.max_delay = Some(value.into());
        self
    }

    pub fn with_increment(mut self, value: impl Into<String>) -> Self {
        self.retry.increment = Some(value.into());
        self
    }

    pub fn with_multiplier(mut self, value: impl Into<NumberOrString>) -> Self {
        self.retry.multiplier = Some(value.into());
        self
    }

    pub fn with_max_attempts(mut self, value: impl Into<NumberOrString>) -> Self {
        self.retry.max_attempts = Some(value.into());
        self
    }

    pub fn with_jitter(mut self, value: impl Into<NumberOrString>) -> Self {
        self.retry.jitter = Some(value.into());
        self
    }

    pub fn build(self) -> RetryDef {
        self.retry
    }
}

/// Builds a reference-or-inline field.
///
/// Both alternatives may be staged, but only one survives `build`: a URI, once
/// set, wins and the inline list is discarded. With neither set the result is
/// an empty inline list, which the workflow validator rejects.
#[derive(Debug, Clone)]
pub struct DefinitionsBuilder<T> {
    uri: Option<String>,
    inline: Option<Vec<T>>,
}

pub type EventsBuilder = DefinitionsBuilder<EventDef>;
pub type FunctionsBuilder = DefinitionsBuilder<FunctionDef>;
pub type RetriesBuilder = DefinitionsBuilder<RetryDef>;

impl<T> Default for DefinitionsBuilder<T> {
    fn default() -> Self {
        Self {
            uri: None,
            inline: None,
        }
    }
}

impl<T> DefinitionsBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uri_definition(mut self, value: impl Into<String>) -> Self {
        self.uri = Some(value.into());
        self
    }

    pub fn with_definitions(mut self, value: Vec<T>) -> Self {
        self.inline = Some(value);
        self
    }

    pub fn build(self) -> Definitions<T> {
        match (self.uri, self.inline) {
            (Some(uri), inline) => {
                if let Some(discarded) = inline {
                    log::debug!(
                        "URI definition '{}' takes precedence; discarding {} inline definition(s)",
                        uri,
                        discarded.len()
                    );
                }
                Definitions::Uri(uri)
            }
            (None, inline) => Definitions::Inline(inline.unwrap_or_default()),
        }
    }
}

impl DefinitionsBuilder<EventDef> {
    pub fn with_events(self, value: Vec<EventDef>) -> Self {
        self.with_definitions(value)
    }
}

impl DefinitionsBuilder<FunctionDef> {
    pub fn with_functions(self, value: Vec<FunctionDef>) -> Self {
        self.with_definitions(value)
    }
}

impl DefinitionsBuilder<RetryDef> {
    pub fn with_retries(self, value: Vec<RetryDef>) -> Self {
        self.with_definitions(value)
    }
}
