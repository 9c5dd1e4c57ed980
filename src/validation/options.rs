use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunes which checks the default validator runs.
///
/// Mandatory fields, non-empty `states`, and the transition/end rule are
/// always enforced; the flags below toggle the remaining checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Reject a `start` that does not name a state in `states`.
    pub check_start_reference: bool,
    /// Reject two states with the same name.
    pub check_unique_state_names: bool,
    /// Reject an inline events, functions, or retries list that is empty.
    pub check_definitions_not_empty: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_start_reference: false,
            check_unique_state_names: true,
            check_definitions_not_empty: true,
        }
    }
}

impl ValidationOptions {
    /// Every check enabled.
    pub fn strict() -> Self {
        Self {
            check_start_reference: true,
            check_unique_state_names: true,
            check_definitions_not_empty: true,
        }
    }

    pub fn with_start_reference_check(mut self, enabled: bool) -> Self {
        self.check_start_reference = enabled;
        self
    }

    pub fn with_unique_state_names_check(mut self, enabled: bool) -> Self {
        self.check_unique_state_names = enabled;
        self
    }

    pub fn with_definitions_not_empty_check(mut self, enabled: bool) -> Self {
        self.check_definitions_not_empty = enabled;
        self
    }

    /// Parses options from JSON. Missing keys keep their default value.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ValidationOptions::default();
        assert!(!options.check_start_reference);
        assert!(options.check_unique_state_names);
        assert!(options.check_definitions_not_empty);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = ValidationOptions::from_json_str(r#"{"checkStartReference": true}"#).unwrap();
        assert_eq!(options, ValidationOptions::strict());
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = ValidationOptions::from_file(Path::new("/no/such/options.json")).unwrap_err();
        assert!(matches!(&err, ConfigError::Io { path, .. } if path == Path::new("/no/such/options.json")));
        assert!(err.to_string().contains("/no/such/options.json"));
    }

    #[test]
    fn test_invalid_json() {
        let result = ValidationOptions::from_json_str("{not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
