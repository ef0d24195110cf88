//! Error types for selectsearch-widgets.

use thiserror::Error;

/// Errors surfaced to the host.
///
/// Unknown option values and navigation over an empty list are recovered
/// locally and never appear here.
#[derive(Debug, Error)]
pub enum SelectSearchError {
    /// The element locator matched nothing.
    #[error("no element matches locator '{0}'")]
    BindingNotFound(String),

    /// JSON configuration could not be parsed or did not fit the schema.
    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration could not be parsed.
    #[error("YAML configuration error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A configuration value is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SelectSearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_not_found_display() {
        let err = SelectSearchError::BindingNotFound("#country".to_string());
        assert_eq!(err.to_string(), "no element matches locator '#country'");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = SelectSearchError::InvalidValue {
            field: "list_limit".to_string(),
            message: "must be -1 or greater".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'list_limit': must be -1 or greater"
        );
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SelectSearchError = json_err.into();
        assert!(matches!(err, SelectSearchError::Json(_)));
        assert!(err.to_string().contains("JSON configuration error"));
    }

    #[test]
    fn test_yaml_error_from() {
        let yaml_err = serde_yaml_ng::from_str::<serde_json::Value>("a: [").unwrap_err();
        let err = SelectSearchError::from(yaml_err);
        assert!(err.to_string().contains("YAML configuration error"));
    }

    #[test]
    fn test_error_debug() {
        let err = SelectSearchError::BindingNotFound("select".to_string());
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("BindingNotFound"));
    }
}
