use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// A single violated field constraint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All field constraints a request violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub details: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new(details: Vec<FieldError>) -> Self {
        ValidationErrors { details }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.details.iter().map(|d| d.field.as_str()).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Resource data source error: {0}")]
    DataSource(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match self {
            AppError::MalformedInput(ref e) => {
                tracing::error!("Malformed request body: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Request body could not be parsed",
                    None,
                )
            }
            AppError::Validation(ref errors) => {
                tracing::info!("Rejected recommendation request: {}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid request",
                    Some(errors.details.clone()),
                )
            }
            AppError::DataSource(ref e) => {
                tracing::error!("Resource data source error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Resource data unavailable",
                    None,
                )
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let mut body = json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err = AppError::from(ValidationErrors::new(vec![FieldError::new(
            "category",
            "category is required",
        )]));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_input_maps_to_server_error() {
        let err = AppError::MalformedInput("expected value at line 1".to_string());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_display_lists_fields() {
        let errors = ValidationErrors::new(vec![
            FieldError::new("category", "required"),
            FieldError::new("transportMode", "invalid"),
        ]);
        assert_eq!(errors.to_string(), "invalid fields: category, transportMode");
    }
}
