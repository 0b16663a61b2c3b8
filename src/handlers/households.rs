//! /households handlers.

use super::{fail, json_body, text_field};
use crate::extractors::IdPath;
use crate::response::{success, Failure};
use crate::service::HouseholdService;
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
            let found = HouseholdService::list(state.db(), Some(name.as_str()))
                .await
                .map_err(fail(format!("Couldn't retrieve Household {}", name)))?;
            Ok(success(format!("Household {}", name), found))
        }
        None => {
            let all = HouseholdService::list(state.db(), None)
                .await
                .map_err(fail("Couldn't retrieve households".into()))?;
            Ok(success("All households", all))
        }
    }
}

pub async fn read(State(state): State<AppState>, IdPath(id): IdPath) -> Result<impl IntoResponse, Failure> {
    let household = HouseholdService::get(state.db(), &id)
        .await
        .map_err(fail(format!("Couldn't retrieve Household {}", id)))?;
    Ok(success(format!("Household {}", id), household))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let body = json_body(body);
    let action = match text_field(&body, "name") {
        Some(name) => format!("Couldn't add Household {}", name),
        None => "Couldn't add Household".to_string(),
    };
    let outcome = async {
        let body = body?;
        HouseholdService::create(state.db(), &body).await
    }
    .await;
    let household = outcome.map_err(fail(action))?;
    Ok(success(format!("Household {} added", household.name), household))
}

pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let outcome = async {
        let body = json_body(body)?;
        HouseholdService::patch(state.db(), &id, &body).await
    }
    .await;
    let household = outcome.map_err(fail(format!("Couldn't update Household {}", id)))?;
    Ok(success(format!("Household {} updated", id), household))
}

pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let outcome = async {
        let body = json_body(body)?;
        HouseholdService::replace(state.db(), &id, &body).await
    }
    .await;
    let household = outcome.map_err(fail(format!("Couldn't update Household {}", id)))?;
    Ok(success(format!("Household {} updated", id), household))
}

pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> Result<impl IntoResponse, Failure> {
    let household = HouseholdService::remove(state.db(), &id)
        .await
        .map_err(fail(format!("Couldn't delete Household {}", id)))?;
    Ok(success(format!("Household {} deleted", id), household))
}

pub async fn occupants(State(state): State<AppState>, IdPath(id): IdPath) -> Result<impl IntoResponse, Failure> {
    let users = HouseholdService::occupants(state.db(), &id)
        .await
        .map_err(fail(format!("Couldn't retrieve occupants of Household {}", id)))?;
    Ok(success(format!("Occupants of Household {}", id), users))
}
