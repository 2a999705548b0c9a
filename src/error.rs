//! Domain-specific error types for sequential-tools

use serde_json::json;
use thiserror::Error;

/// Main error type for the sequential-tools MCP server
#[derive(Error, Debug)]
pub enum SequentialToolsError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for SequentialToolsError {
    fn from(err: serde_json::Error) -> Self {
        SequentialToolsError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SequentialToolsError {
    fn from(err: toml::de::Error) -> Self {
        SequentialToolsError::Config {
            message: err.to_string(),
        }
    }
}

/// Convert SequentialToolsError to MCP error
impl From<SequentialToolsError> for rmcp::ErrorData {
    fn from(err: SequentialToolsError) -> Self {
        let (code, label, details) = match err {
            SequentialToolsError::Config { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Configuration error",
                message,
            ),
            SequentialToolsError::Serialization { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Serialization error",
                message,
            ),
        };

        rmcp::ErrorData {
            code,
            message: format!("{label}: {details}").into(),
            data: Some(json!({ "details": details })),
        }
    }
}

/// Result type alias for sequential-tools operations
pub type Result<T> = std::result::Result<T, SequentialToolsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_maps_to_internal_error() {
        let err = SequentialToolsError::Config {
            message: "max_history_size must be at least 1".into(),
        };
        let data: rmcp::ErrorData = err.into();
        assert_eq!(data.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        assert!(data.message.starts_with("Configuration error:"));
    }

    #[test]
    fn serde_failure_maps_to_serialization() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SequentialToolsError::from(parse);
        assert!(matches!(err, SequentialToolsError::Serialization { .. }));
        let data: rmcp::ErrorData = err.into();
        assert_eq!(data.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        assert!(data.data.is_some());
    }

    #[test]
    fn toml_failure_maps_to_config() {
        let parse = toml::from_str::<toml::Value>("[system").unwrap_err();
        let err = SequentialToolsError::from(parse);
        assert!(matches!(err, SequentialToolsError::Config { .. }));
    }
}
