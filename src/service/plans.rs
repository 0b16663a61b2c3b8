//! Meal plan model functions.

use super::crud::{fetch_all, fetch_inserted, fetch_one};
use super::validation::{parse_id, required, Fields};
use crate::db::Database;
use crate::error::AppError;
use crate::model::{NewPlan, Plan, PlanPatch, PLANS};
use crate::sql::{self, Filter};
use serde_json::{json, Value};
use uuid::Uuid;

pub struct PlanService;

impl PlanService {
    /// All plans, or only those organised by `organiser`.
    pub async fn list(db: &dyn Database, organiser: Option<&str>) -> Result<Vec<Plan>, AppError> {
        let filter = organiser
            .map(parse_id)
            .transpose()?
            .map(|id| Filter::Equals {
                column: "organiser",
                value: json!(id),
            });
        fetch_all(db, sql::select_list(&PLANS, filter.as_ref())).await
    }

    pub async fn get(db: &dyn Database, id: &str) -> Result<Plan, AppError> {
        let id = parse_id(id)?;
        fetch_one(db, sql::select_by_id(&PLANS, json!(id)), &plan(id)).await
    }

    pub async fn create(db: &dyn Database, body: &Value) -> Result<Plan, AppError> {
        let input = Self::parse_new(body)?;
        fetch_inserted(db, &PLANS, sql::insert(&PLANS, &input.columns())).await
    }

    pub async fn patch(db: &dyn Database, id: &str, body: &Value) -> Result<Plan, AppError> {
        let id = parse_id(id)?;
        let patch = Self::parse_patch(body)?;
        fetch_one(db, sql::update(&PLANS, json!(id), &patch.columns()), &plan(id)).await
    }

    pub async fn replace(db: &dyn Database, id: &str, body: &Value) -> Result<Plan, AppError> {
        let id = parse_id(id)?;
        let input = Self::parse_new(body)?;
        fetch_one(db, sql::update(&PLANS, json!(id), &input.columns()), &plan(id)).await
    }

    pub async fn remove(db: &dyn Database, id: &str) -> Result<Plan, AppError> {
        let id = parse_id(id)?;
        fetch_one(db, sql::delete(&PLANS, json!(id)), &plan(id)).await
    }

    pub fn parse_new(body: &Value) -> Result<NewPlan, AppError> {
        let fields = Fields::parse(body, NewPlan::FIELDS)?;
        Ok(NewPlan {
            date: required("date", fields.timestamp("date")?)?,
            organiser: required("organiser", fields.id("organiser")?)?,
            attendees: required("attendees", fields.id_list("attendees")?)?,
            meal: required("meal", fields.meal("meal")?)?,
        })
    }

    pub fn parse_patch(body: &Value) -> Result<PlanPatch, AppError> {
        let fields = Fields::parse(body, NewPlan::FIELDS)?;
        if fields.is_empty() {
            return Err(AppError::Validation("nothing to update".into()));
        }
        Ok(PlanPatch {
            date: fields.timestamp("date")?,
            organiser: fields.id("organiser")?,
            attendees: fields.id_list("attendees")?,
            meal: fields.meal("meal")?,
        })
    }
}

fn plan(id: Uuid) -> String {
    format!("plan {}", id)
}
