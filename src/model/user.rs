use super::ColumnValues;
use crate::sql::{Column, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

pub const USERS: Table = Table {
    name: "users",
    pk: "id",
    columns: &[
        Column { name: "id", pg_type: "uuid", select_as: Some("text") },
        Column { name: "name", pg_type: "text", select_as: None },
        Column { name: "household", pg_type: "uuid", select_as: Some("text") },
    ],
    order_by: &["id"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// `None` for a user not attached to any household.
    pub household: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub household: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    /// `Some(None)` detaches the user from their household.
    pub household: Option<Option<Uuid>>,
}

impl NewUser {
    pub const FIELDS: &'static [&'static str] = &["name", "household"];

    pub fn columns(&self) -> ColumnValues {
        vec![("name", json!(self.name)), ("household", json!(self.household))]
    }
}

impl UserPatch {
    pub fn columns(&self) -> ColumnValues {
        let mut out = ColumnValues::new();
        if let Some(name) = &self.name {
            out.push(("name", json!(name)));
        }
        if let Some(household) = &self.household {
            out.push(("household", json!(household)));
        }
        out
    }
}
