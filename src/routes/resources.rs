//! Resource routers: one per table, same verb layout for each.

use super::unmatched;
use crate::handlers::{households, plans, users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn household_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/households",
            get(households::list).post(households::create).fallback(unmatched),
        )
        .route(
            "/households/:id",
            get(households::read)
                .patch(households::update)
                .put(households::replace)
                .delete(households::delete)
                .fallback(unmatched),
        )
        .route("/households/:id/occupants", get(households::occupants).fallback(unmatched))
        .with_state(state)
}

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list).post(users::create).fallback(unmatched))
        .route(
            "/users/:id",
            get(users::read)
                .patch(users::update)
                .put(users::replace)
                .delete(users::delete)
                .fallback(unmatched),
        )
        .with_state(state)
}

pub fn plan_routes(state: AppState) -> Router {
    Router::new()
        .route("/plans", get(plans::list).post(plans::create).fallback(unmatched))
        .route(
            "/plans/:id",
            get(plans::read)
                .patch(plans::update)
                .put(plans::replace)
                .delete(plans::delete)
                .fallback(unmatched),
        )
        .with_state(state)
}
