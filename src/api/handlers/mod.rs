//! API handlers and shared request validation.
//!
//! Each resource module owns its record types and its `GET`/`POST` handlers.
//! The shared pieces live here: the error body shape and the rejection type
//! used by creation payload validation.

pub mod customers;
pub mod employees;
pub mod health;
pub mod orders;
pub mod production;
pub mod products;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum number of characters in a phone number, punctuation included.
pub const MIN_PHONE_LEN: usize = 7;

/// Error body returned by rejected creation requests.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    /// HTTP reason phrase, e.g. "Bad Request".
    pub error: String,
    /// Which check failed, e.g. "Email is required".
    pub message: String,
}

/// Outcome of a failed payload validation. Only the first failing check is
/// carried; malformed input (missing required text) maps to 400 and
/// well-formed but invalid input (phone too short) maps to 422.
#[derive(Debug, PartialEq, Eq)]
pub enum Rejection {
    BadRequest(&'static str),
    UnprocessableEntity(&'static str),
}

impl Rejection {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::BadRequest(message) | Self::UnprocessableEntity(message) => message,
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = ErrorBody {
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// A text field passes the presence check when it holds at least one character.
pub fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
