//! User (occupant) model functions.

use super::crud::{fetch_all, fetch_inserted, fetch_one};
use super::validation::{parse_id, required, Fields};
use crate::db::Database;
use crate::error::AppError;
use crate::model::{NewUser, User, UserPatch, USERS};
use crate::sql::{self, Filter};
use serde_json::{json, Value};
use uuid::Uuid;

pub struct UserService;

impl UserService {
    /// All users, or those whose name contains `name` (case-insensitive).
    pub async fn list(db: &dyn Database, name: Option<&str>) -> Result<Vec<User>, AppError> {
        let filter = name.map(|term| Filter::Contains {
            column: "name",
            term: term.to_string(),
        });
        fetch_all(db, sql::select_list(&USERS, filter.as_ref())).await
    }

    pub async fn get(db: &dyn Database, id: &str) -> Result<User, AppError> {
        let id = parse_id(id)?;
        fetch_one(db, sql::select_by_id(&USERS, json!(id)), &user(id)).await
    }

    pub async fn create(db: &dyn Database, body: &Value) -> Result<User, AppError> {
        let input = Self::parse_new(body)?;
        fetch_inserted(db, &USERS, sql::insert(&USERS, &input.columns())).await
    }

    pub async fn patch(db: &dyn Database, id: &str, body: &Value) -> Result<User, AppError> {
        let id = parse_id(id)?;
        let patch = Self::parse_patch(body)?;
        fetch_one(db, sql::update(&USERS, json!(id), &patch.columns()), &user(id)).await
    }

    pub async fn replace(db: &dyn Database, id: &str, body: &Value) -> Result<User, AppError> {
        let id = parse_id(id)?;
        let input = Self::parse_full(body)?;
        fetch_one(db, sql::update(&USERS, json!(id), &input.columns()), &user(id)).await
    }

    pub async fn remove(db: &dyn Database, id: &str) -> Result<User, AppError> {
        let id = parse_id(id)?;
        fetch_one(db, sql::delete(&USERS, json!(id)), &user(id)).await
    }

    /// Create input: `household` may be omitted for an unaffiliated user.
    pub fn parse_new(body: &Value) -> Result<NewUser, AppError> {
        let fields = Fields::parse(body, NewUser::FIELDS)?;
        Ok(NewUser {
            name: required("name", fields.name("name")?)?,
            household: fields.nullable_id("household")?.flatten(),
        })
    }

    /// Replacement input: every field present, `household` possibly null.
    pub fn parse_full(body: &Value) -> Result<NewUser, AppError> {
        let fields = Fields::parse(body, NewUser::FIELDS)?;
        Ok(NewUser {
            name: required("name", fields.name("name")?)?,
            household: required("household", fields.nullable_id("household")?)?,
        })
    }

    pub fn parse_patch(body: &Value) -> Result<UserPatch, AppError> {
        let fields = Fields::parse(body, NewUser::FIELDS)?;
        if fields.is_empty() {
            return Err(AppError::Validation("nothing to update".into()));
        }
        Ok(UserPatch {
            name: fields.name("name")?,
            household: fields.nullable_id("household")?,
        })
    }
}

fn user(id: Uuid) -> String {
    format!("user {}", id)
}
