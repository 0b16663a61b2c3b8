//! HTTP handlers per resource: call the model function, wrap the outcome in the envelope.

pub mod households;
pub mod plans;
pub mod users;

use crate::error::AppError;
use crate::response::Failure;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

/// Unwrap a JSON body; a malformed body is a validation failure like any other.
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(v)| v)
        .map_err(|e| AppError::Validation(e.body_text()))
}

/// Text field of a body, for phrasing create messages.
pub(crate) fn text_field<'a>(body: &'a Result<Value, AppError>, field: &str) -> Option<&'a str> {
    body.as_ref().ok().and_then(|b| b.get(field)).and_then(Value::as_str)
}

pub(crate) fn fail(action: String) -> impl FnOnce(AppError) -> Failure {
    move |err| Failure::from_error(err, &action)
}
