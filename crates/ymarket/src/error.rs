use thiserror::Error;

use crate::types::{ApiError, ApiErrors};

/// Errors returned by the Yandex.Market API client.
#[derive(Debug, Error)]
pub enum MarketError {
    /// The configured API endpoint is not an absolute base URL.
    #[error("invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// A configured value cannot be sent as an HTTP header.
    #[error("invalid value for header '{name}': {source}")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// More entries were passed than the endpoint accepts in one call.
    #[error("{operation}: batch of {len} entries exceeds the limit of {max}")]
    BatchTooLarge {
        operation: &'static str,
        len: usize,
        max: usize,
    },

    /// The request body could not be serialized.
    #[error("JSON serialization error for {context}: {source}")]
    Encode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with `"status": "ERROR"`.
    #[error("failed to {operation}: {errors}")]
    Api {
        operation: &'static str,
        errors: ApiErrors,
    },
}

impl MarketError {
    /// Per-entry errors reported by the platform, if this is an API error.
    pub fn api_errors(&self) -> Option<&[ApiError]> {
        match self {
            Self::Api { errors, .. } => Some(errors.as_slice()),
            _ => None,
        }
    }

    /// Returns `true` for failures raised before any network I/O happened.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::InvalidEndpoint { .. }
                | Self::InvalidHeader { .. }
                | Self::BatchTooLarge { .. }
                | Self::Encode { .. }
        )
    }
}
