use super::Metadata;
use serde::{Deserialize, Serialize};

/// A reference-or-inline field: either a URI pointing at an external
/// definitions file, or a list of definitions carried in the document itself.
///
/// The two alternatives are variants of one enum, so a finalized document can
/// never carry both. Serializes as a plain string or as an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Definitions<T> {
    Uri(String),
    Inline(Vec<T>),
}

impl<T> Definitions<T> {
    /// The external reference, if this is the URI alternative.
    pub fn uri(&self) -> Option<&str> {
        match self {
            Definitions::Uri(uri) => Some(uri),
            Definitions::Inline(_) => None,
        }
    }

    /// The inline definitions, if this is the inline alternative.
    pub fn inline(&self) -> Option<&[T]> {
        match self {
            Definitions::Uri(_) => None,
            Definitions::Inline(defs) => Some(defs),
        }
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, Definitions::Uri(_))
    }
}

impl<T> From<&str> for Definitions<T> {
    fn from(uri: &str) -> Self {
        Definitions::Uri(uri.to_string())
    }
}

impl<T> From<String> for Definitions<T> {
    fn from(uri: String) -> Self {
        Definitions::Uri(uri)
    }
}

impl<T> From<Vec<T>> for Definitions<T> {
    fn from(defs: Vec<T>) -> Self {
        Definitions::Inline(defs)
    }
}

pub type Events = Definitions<EventDef>;
pub type Functions = Definitions<FunctionDef>;
pub type Retries = Definitions<RetryDef>;

/// Whether the workflow consumes or produces an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Consumed,
    Produced,
}

/// A CloudEvent extension attribute used to correlate events with a workflow instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correlation {
    pub context_attribute_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_attribute_value: Option<String>,
}

/// A reusable CloudEvent definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<Vec<Correlation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionType {
    #[default]
    Rest,
    Rpc,
    Expression,
}

/// A reusable function definition.
///
/// For `rest` the operation is `<openapi file>#<operation id>`, for `rpc` it is
/// `<proto file>#<service>#<method>`, and for `expression` it is the expression itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub function_type: Option<FunctionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A numeric retry parameter that the schema also accepts in string form
/// (an ISO 8601 duration for jitter, a numeric string elsewhere).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl From<u32> for NumberOrString {
    fn from(value: u32) -> Self {
        NumberOrString::Number(value.into())
    }
}

impl From<u64> for NumberOrString {
    fn from(value: u64) -> Self {
        NumberOrString::Number(value.into())
    }
}

impl From<i64> for NumberOrString {
    fn from(value: i64) -> Self {
        NumberOrString::Number(value.into())
    }
}

/// Non-finite floats have no JSON number form and fall back to their text.
impl From<f64> for NumberOrString {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(NumberOrString::Number)
            .unwrap_or_else(|| NumberOrString::Text(value.to_string()))
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        NumberOrString::Text(value.to_string())
    }
}

impl From<String> for NumberOrString {
    fn from(value: String) -> Self {
        NumberOrString::Text(value)
    }
}

/// A named retry strategy. Durations are ISO 8601 strings and are carried as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<NumberOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<NumberOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jitter: Option<NumberOrString>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definitions_uri_serializes_as_string() {
        let events: Events = "http://myhost:8080/eventsdefs.json".into();
        assert_eq!(
            serde_json::to_value(&events).unwrap(),
            json!("http://myhost:8080/eventsdefs.json")
        );
        assert!(events.is_uri());
        assert!(events.inline().is_none());
    }

    #[test]
    fn test_definitions_inline_serializes_as_array() {
        let functions: Functions = vec![FunctionDef {
            name: Some("greet".to_string()),
            operation: Some("file://api.json#greet".to_string()),
            ..Default::default()
        }]
        .into();
        assert_eq!(
            serde_json::to_value(&functions).unwrap(),
            json!([{"name": "greet", "operation": "file://api.json#greet"}])
        );
        assert_eq!(functions.inline().map(|defs| defs.len()), Some(1));
    }

    #[test]
    fn test_event_kind_defaults_to_consumed() {
        let event: EventDef = serde_json::from_value(json!({"name": "a"})).unwrap();
        assert_eq!(event.kind, EventKind::Consumed);
    }

    #[test]
    fn test_number_or_string_keeps_integer_form() {
        let attempts: NumberOrString = 3u32.into();
        assert_eq!(serde_json::to_value(&attempts).unwrap(), json!(3));
        let jitter: NumberOrString = "PT0.1S".into();
        assert_eq!(serde_json::to_value(&jitter).unwrap(), json!("PT0.1S"));
    }
}
