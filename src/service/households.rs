//! Household model functions.

use super::crud::{fetch_all, fetch_inserted, fetch_one};
use super::validation::{parse_id, required, Fields};
use crate::db::Database;
use crate::error::AppError;
use crate::model::{Household, HouseholdPatch, NewHousehold, User, HOUSEHOLDS, USERS};
use crate::sql::{self, Filter};
use serde_json::{json, Value};

pub struct HouseholdService;

impl HouseholdService {
    /// All households, or those whose name contains `name` (case-insensitive).
    pub async fn list(db: &dyn Database, name: Option<&str>) -> Result<Vec<Household>, AppError> {
        let filter = name.map(|term| Filter::Contains {
            column: "name",
            term: term.to_string(),
        });
        fetch_all(db, sql::select_list(&HOUSEHOLDS, filter.as_ref())).await
    }

    pub async fn get(db: &dyn Database, id: &str) -> Result<Household, AppError> {
        let id = parse_id(id)?;
        fetch_one(db, sql::select_by_id(&HOUSEHOLDS, json!(id)), &household(id)).await
    }

    pub async fn create(db: &dyn Database, body: &Value) -> Result<Household, AppError> {
        let input = Self::parse_new(body)?;
        fetch_inserted(db, &HOUSEHOLDS, sql::insert(&HOUSEHOLDS, &input.columns())).await
    }

    pub async fn patch(db: &dyn Database, id: &str, body: &Value) -> Result<Household, AppError> {
        let id = parse_id(id)?;
        let patch = Self::parse_patch(body)?;
        fetch_one(db, sql::update(&HOUSEHOLDS, json!(id), &patch.columns()), &household(id)).await
    }

    pub async fn replace(db: &dyn Database, id: &str, body: &Value) -> Result<Household, AppError> {
        let id = parse_id(id)?;
        let input = Self::parse_new(body)?;
        fetch_one(db, sql::update(&HOUSEHOLDS, json!(id), &input.columns()), &household(id)).await
    }

    /// Delete and return the household as it was.
    pub async fn remove(db: &dyn Database, id: &str) -> Result<Household, AppError> {
        let id = parse_id(id)?;
        fetch_one(db, sql::delete(&HOUSEHOLDS, json!(id)), &household(id)).await
    }

    /// Users listed in the household's occupants.
    pub async fn occupants(db: &dyn Database, id: &str) -> Result<Vec<User>, AppError> {
        let found = Self::get(db, id).await?;
        if found.occupants.is_empty() {
            return Ok(Vec::new());
        }
        fetch_all(db, sql::select_where_any(&USERS, "id", json!(found.occupants))).await
    }

    pub fn parse_new(body: &Value) -> Result<NewHousehold, AppError> {
        let fields = Fields::parse(body, NewHousehold::FIELDS)?;
        Ok(NewHousehold {
            name: required("name", fields.name("name")?)?,
            occupants: required("occupants", fields.id_list("occupants")?)?,
        })
    }

    pub fn parse_patch(body: &Value) -> Result<HouseholdPatch, AppError> {
        let fields = Fields::parse(body, NewHousehold::FIELDS)?;
        if fields.is_empty() {
            return Err(AppError::Validation("nothing to update".into()));
        }
        Ok(HouseholdPatch {
            name: fields.name("name")?,
            occupants: fields.id_list("occupants")?,
        })
    }
}

fn household(id: uuid::Uuid) -> String {
    format!("household {}", id)
}
