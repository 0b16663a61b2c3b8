//! Router assembly.

mod common;
mod resources;

pub use common::common_routes;
pub use resources::{household_routes, plan_routes, user_routes};

use crate::error::ErrorKind;
use crate::response::{construct_error_response, Failure};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Every route, with request tracing and a body size cap. Oversized bodies surface as a
/// `JsonRejection` in the handlers, so they are answered with the envelope like any other bad body.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(household_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(plan_routes(state))
        .fallback(unmatched)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}

/// Unknown paths, and known paths with an unsupported method, still answer with the envelope.
pub(crate) async fn unmatched(method: Method, uri: Uri) -> Failure {
    tracing::warn!(%method, path = %uri.path(), "no route");
    Failure {
        kind: ErrorKind::UserError,
        message: construct_error_response(ErrorKind::UserError, uri.path()),
    }
}
