use reqwest::StatusCode;
use thiserror::Error;

use crate::model::Mission;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", not_found_message(.resource, .key))]
    NotFound { resource: &'static str, key: String },

    #[error("invalid data for {operation}: ensure {fields} are correct")]
    InvalidInput {
        operation: &'static str,
        fields: &'static str,
    },

    #[error("failed to {operation} (HTTP {status})")]
    OperationFailed {
        operation: &'static str,
        status: u16,
    },

    #[error("network failure while trying to {operation}: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response to {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("mission {mission_id} was updated but could not be flagged as modified: {source}")]
    ModifiedFlag {
        mission_id: i64,
        #[source]
        source: Box<ApiError>,
        /// The mission as the backend stored it, when the mutation returned one.
        updated: Option<Box<Mission>>,
    },

    #[error("{0} value cannot be sent as an HTTP header")]
    InvalidHeader(&'static str),
}

fn not_found_message(resource: &str, key: &str) -> String {
    if key.is_empty() {
        format!("{} not found", resource)
    } else {
        format!("{} \"{}\" not found", resource, key)
    }
}

impl ApiError {
    /// HTTP status behind this error, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::InvalidInput { .. } => Some(400),
            ApiError::OperationFailed { status, .. } => Some(*status),
            ApiError::ModifiedFlag { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// The persisted mission behind a failed modified flag. The update went
    /// through, so callers can still fold it into local state.
    pub fn updated_mission(&self) -> Option<&Mission> {
        match self {
            ApiError::ModifiedFlag { updated, .. } => updated.as_deref(),
            _ => None,
        }
    }
}

/// What a wrapper reports when the backend refuses a request.
#[derive(Clone, Debug)]
pub struct ErrorContext {
    pub operation: &'static str,
    pub resource: &'static str,
    pub key: String,
    pub fields: &'static str,
}

impl ErrorContext {
    pub fn new(operation: &'static str, resource: &'static str, key: impl ToString) -> Self {
        Self {
            operation,
            resource,
            key: key.to_string(),
            fields: "the request fields",
        }
    }

    pub fn fields(mut self, fields: &'static str) -> Self {
        self.fields = fields;
        self
    }

    /// 404 and 400 get their own variants; every other status is a generic
    /// failure of the operation.
    pub fn status_error(&self, status: StatusCode) -> ApiError {
        match status {
            StatusCode::NOT_FOUND => ApiError::NotFound {
                resource: self.resource,
                key: self.key.clone(),
            },
            StatusCode::BAD_REQUEST => ApiError::InvalidInput {
                operation: self.operation,
                fields: self.fields,
            },
            other => ApiError::OperationFailed {
                operation: self.operation,
                status: other.as_u16(),
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/api/error_tests.rs"]
mod tests;
