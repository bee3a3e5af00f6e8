//! Domain-specific error types for advice-mind

use serde_json::json;
use thiserror::Error;

/// Main error type for the advice-mind MCP server
#[derive(Error, Debug)]
pub enum AdviceMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("MCP protocol error: {message}")]
    Mcp { message: String },

    #[error("Pipeline error: {stage}: {message}")]
    Pipeline { stage: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for AdviceMindError {
    fn from(err: anyhow::Error) -> Self {
        AdviceMindError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AdviceMindError {
    fn from(err: serde_json::Error) -> Self {
        AdviceMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<rmcp::ErrorData> for AdviceMindError {
    fn from(err: rmcp::ErrorData) -> Self {
        AdviceMindError::Mcp {
            message: err.message.to_string(),
        }
    }
}

/// Convert AdviceMindError to MCP error
impl From<AdviceMindError> for rmcp::ErrorData {
    fn from(err: AdviceMindError) -> Self {
        let (code, label, details) = match err {
            AdviceMindError::Config { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Configuration error",
                message,
            ),
            AdviceMindError::Validation { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Validation error",
                message,
            ),
            AdviceMindError::Serialization { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Serialization error",
                message,
            ),
            AdviceMindError::Mcp { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "MCP protocol error",
                message,
            ),
            AdviceMindError::Pipeline { stage, message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Pipeline error",
                format!("{stage}: {message}"),
            ),
            AdviceMindError::Internal { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Internal error",
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

/// Result type alias for advice-mind operations
pub type Result<T> = std::result::Result<T, AdviceMindError>;
