use axum::{http::StatusCode, Json};
use serde::Serialize;
use std::fmt;

/// Input slot a validation message is shown next to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Total,
    Attended,
    Subject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    InvalidTotal,
    NegativeAttended,
    AttendedExceedsTotal,
    EmptyName,
    DuplicateName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationKind) -> Self {
        Self { field, kind }
    }

    pub fn message(&self) -> &'static str {
        match (self.kind, self.field) {
            (ValidationKind::InvalidTotal, _) => "Please enter valid total lectures",
            (ValidationKind::NegativeAttended, _) => "Attended lectures cannot be negative",
            (ValidationKind::AttendedExceedsTotal, Field::Subject) => {
                "Attended lectures cannot exceed total"
            }
            (ValidationKind::AttendedExceedsTotal, _) => {
                "Attended lectures cannot exceed total lectures"
            }
            (ValidationKind::EmptyName, _) => "Please enter subject name",
            (ValidationKind::DuplicateName, _) => "Subject already added",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub field: Option<Field>,
    pub message: String,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub field: Option<Field>,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            field: None,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            field: Some(err.field),
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorBody {
            field: self.field,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
