//! Standard response envelope helpers.

use crate::error::{AppError, ErrorKind};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `{message, success, payload?}` returned by every resource route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

pub fn build_response<T>(message: impl Into<String>, success: bool, payload: Option<T>) -> Envelope<T> {
    Envelope {
        message: message.into(),
        success,
        payload,
    }
}

pub fn success<T: Serialize>(message: impl Into<String>, payload: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(build_response(message, true, Some(payload))))
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::UserError => "Bad Request",
            ErrorKind::ServerError => "Server Error",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::UserError => StatusCode::BAD_REQUEST,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// "Bad Request: Couldn't retrieve Household 3" and friends.
pub fn error_message(kind: ErrorKind, action: &str) -> String {
    format!("{}: {}", kind.label(), action)
}

/// Generic message when no operation-specific phrase applies.
pub fn construct_error_response(kind: ErrorKind, resource: &str) -> String {
    error_message(kind, &format!("Couldn't access {}", resource))
}

/// A classified failure ready to be sent; never carries the raw internal error text.
#[derive(Debug)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl Failure {
    /// Classify `err` and phrase it with the operation's `action`. The raw error is only logged.
    pub fn from_error(err: AppError, action: &str) -> Self {
        let kind = err.kind();
        match kind {
            ErrorKind::UserError => tracing::warn!(error = %err, action, "request rejected"),
            ErrorKind::ServerError => tracing::error!(error = %err, action, "request failed"),
        }
        Failure {
            kind,
            message: error_message(kind, action),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body: Envelope<()> = build_response(self.message, false, None);
        (self.kind.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_payload_omits_the_key() {
        let body = serde_json::to_value(build_response::<()>("Bad Request: nope", false, None)).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Bad Request: nope", "success": false }));
    }

    #[test]
    fn envelope_with_payload_keeps_it() {
        let body = serde_json::to_value(build_response("All users", true, Some(vec![1, 2]))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "message": "All users", "success": true, "payload": [1, 2] })
        );
    }

    #[test]
    fn generic_error_phrase() {
        assert_eq!(
            construct_error_response(ErrorKind::ServerError, "households"),
            "Server Error: Couldn't access households"
        );
        assert_eq!(
            construct_error_response(ErrorKind::UserError, "plans"),
            "Bad Request: Couldn't access plans"
        );
    }

    #[test]
    fn failure_uses_action_not_raw_error() {
        let failure = Failure::from_error(
            AppError::Db(sqlx::Error::Protocol("password authentication failed".into())),
            "Couldn't retrieve households",
        );
        assert_eq!(failure.kind, ErrorKind::ServerError);
        assert_eq!(failure.message, "Server Error: Couldn't retrieve households");
    }
}
