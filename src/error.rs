use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum NamerError {
    #[error("Base name must not be empty")]
    EmptyBase,

    #[error(
        "Maximum length {max_length} cannot hold a shortened name; at least {minimum} is required"
    )]
    MaxLengthTooSmall { max_length: usize, minimum: usize },

    #[error("Failed to read stdin: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse stdin JSON request: {source}")]
    InvalidJsonRequest {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize response JSON: {source}")]
    ResponseSerialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl NamerError {
    pub fn to_error_response(&self) -> ErrorResponse {
        let (r#type, suggestion) = match self {
            Self::EmptyBase => (
                "empty_base",
                Some("Provide a non-empty base name such as 'deployment-5'".to_string()),
            ),
            Self::MaxLengthTooSmall { minimum, .. } => (
                "max_length_too_small",
                Some(format!("Use a maximum length of at least {minimum}")),
            ),
            Self::InvalidRequest { .. } | Self::InvalidJsonRequest { .. } => {
                ("invalid_request", None)
            }
            Self::StdinRead { .. } => ("io_error", None),
            Self::ResponseSerialization { .. } => ("serialization_error", None),
        };

        ErrorResponse {
            error: ErrorBody {
                r#type: r#type.to_string(),
                message: self.to_string(),
                suggestion,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub r#type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
