//! Extract the `:id` segment of a resource path.

use crate::error::AppError;
use crate::response::Failure;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Raw `:id` path segment. Parsing into a UUID is left to the model functions,
/// so the segment is echoed back in messages exactly as sent.
#[derive(Clone, Debug)]
pub struct IdPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) => Err(Failure::from_error(
                AppError::Validation(rejection.body_text()),
                &format!("Couldn't access {}", parts.uri.path()),
            )),
        }
    }
}
