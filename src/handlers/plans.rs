//! /plans handlers.

use super::{fail, json_body, text_field};
use crate::extractors::IdPath;
use crate::response::{success, Failure};
use crate::service::PlanService;
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
    match params.get("organiser") {
        Some(organiser) => {
            let found = PlanService::list(state.db(), Some(organiser.as_str()))
                .await
                .map_err(fail(format!("unable to retrieve Plans organised by User {}", organiser)))?;
            Ok(success(format!("Plans organised by User {}", organiser), found))
        }
        None => {
            let all = PlanService::list(state.db(), None)
                .await
                .map_err(fail("couldn't retrieve plans".into()))?;
            Ok(success("All plans", all))
        }
    }
}

pub async fn read(State(state): State<AppState>, IdPath(id): IdPath) -> Result<impl IntoResponse, Failure> {
    let plan = PlanService::get(state.db(), &id)
        .await
        .map_err(fail(format!("unable to retrieve Plan {}", id)))?;
    Ok(success(format!("Plan {}", id), plan))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let body = json_body(body);
    let action = match (text_field(&body, "meal"), text_field(&body, "date")) {
        (Some(meal), Some(date)) => format!("unable to add {} for {}", meal, date),
        _ => "unable to add plan".to_string(),
    };
    let outcome = async {
        let body = body?;
        PlanService::create(state.db(), &body).await
    }
    .await;
    let plan = outcome.map_err(fail(action))?;
    Ok(success(format!("{} for {} added", plan.meal, plan.date.to_rfc3339()), plan))
}

pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let outcome = async {
        let body = json_body(body)?;
        PlanService::patch(state.db(), &id, &body).await
    }
    .await;
    let plan = outcome.map_err(fail(format!("Unable to update Plan {}", id)))?;
    Ok(success(format!("Plan {} updated", id), plan))
}

pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Failure> {
    let outcome = async {
        let body = json_body(body)?;
        PlanService::replace(state.db(), &id, &body).await
    }
    .await;
    let plan = outcome.map_err(fail(format!("unable to update Plan {}", id)))?;
    Ok(success(format!("Plan {} updated", id), plan))
}

pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> Result<impl IntoResponse, Failure> {
    let plan = PlanService::remove(state.db(), &id)
        .await
        .map_err(fail(format!("unable to delete Plan {}", id)))?;
    Ok(success(format!("Plan {} deleted", id), plan))
}
