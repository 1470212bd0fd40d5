//! API Errors
//!
//! Every failure a data-access call can produce. Messages are plain strings
//! so errors can be cloned into reactive state and shown to the user as-is.

use thiserror::Error;

/// Local image pre-check failures (no request is sent)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Image file name is empty")]
    EmptyName,
    #[error("Image file names may only contain ASCII characters: {0}")]
    NonAsciiName(String),
    #[error("Image must be at most {limit} bytes (got {size})")]
    TooLarge { size: u64, limit: u64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request payload rejected before sending
    #[error("Invalid {field}: {rule}")]
    Validation { field: &'static str, rule: String },

    #[error(transparent)]
    Upload(#[from] UploadRejection),

    /// Non-2xx response
    #[error("HTTP {status} {status_text} {message}")]
    Http { status: u16, status_text: String, message: String },

    /// No response at all
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose payload does not match the expected shape
    #[error("Unexpected {entity} payload: {detail}")]
    Schema { entity: &'static str, detail: String },

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn validation(field: &'static str, rule: impl Into<String>) -> Self {
        ApiError::Validation { field, rule: rule.into() }
    }

    pub fn schema(entity: &'static str, detail: impl ToString) -> Self {
        ApiError::Schema { entity, detail: detail.to_string() }
    }

    /// Raised before any request was attempted
    pub fn is_local(&self) -> bool {
        matches!(self, ApiError::Validation { .. } | ApiError::Upload(_) | ApiError::Encode(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
