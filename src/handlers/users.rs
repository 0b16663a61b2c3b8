//! /users handlers.

use super::{fail, json_body, text_field};
use crate::extractors::IdPath;
use crate::response::{success, Failure};
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, Failure> {
    match params.get("name") {
        Some(name) => {
            let found = UserService::list(state.db(), Some(name.as_str()))
                .await
                .map_err(fail(format!("couldn't retrieve User {}", name)))?;
            Ok(success(format!("User {}", name), found))
        }
        None => {
            let all = UserService::list(state.db(), None)
                .await
                .map_err(fail("Couldn't retrieve users".into()))?;
            Ok(success("All users", all))
        }
    }
}

pub async fn read(State(state): State<AppState>, IdPath(id): IdPath) -> Result<impl IntoResponse, Failure> {
    let user = UserService::get(state.db(), &id)
        .await
        .map_err(fail(format!("unable to retrieve User {}", id)))?;
    Ok(success(format!("User {}", id), user))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let body = json_body(body);
    let action = match text_field(&body, "name") {
        Some(name) => format!("unable to add {}", name),
        None => "unable to add user".to_string(),
    };
    let outcome = async {
        let body = body?;
        UserService::create(state.db(), &body).await
    }
    .await;
    let user = outcome.map_err(fail(action))?;
    Ok(success(format!("{} added", user.name), user))
}

pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let outcome = async {
        let body = json_body(body)?;
        UserService::patch(state.db(), &id, &body).await
    }
    .await;
    let user = outcome.map_err(fail(format!("unable to update User {}", id)))?;
    Ok(success(format!("User {} updated", id), user))
}

pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let outcome = async {
        let body = json_body(body)?;
        UserService::replace(state.db(), &id, &body).await
    }
    .await;
    let user = outcome.map_err(fail(format!("unable to update User {}", id)))?;
    Ok(success(format!("User {} updated", id), user))
}

pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> Result<impl IntoResponse, Failure> {
    let user = UserService::remove(state.db(), &id)
        .await
        .map_err(fail(format!("unable to delete User {}", id)))?;
    Ok(success(format!("User {} deleted", id), user))
}
