use super::ColumnValues;
use crate::sql::{Column, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

pub const HOUSEHOLDS: Table = Table {
    name: "households",
    pk: "id",
    columns: &[
        Column { name: "id", pg_type: "uuid", select_as: Some("text") },
        Column { name: "name", pg_type: "text", select_as: None },
        Column { name: "occupants", pg_type: "uuid[]", select_as: Some("text[]") },
    ],
    order_by: &["id"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub id: Uuid,
    pub name: String,
    /// Ids of the users living here. Authoritative for membership.
    pub occupants: Vec<Uuid>,
}

/// Every field of a household except its id; used by create and replace.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHousehold {
    pub name: String,
    pub occupants: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HouseholdPatch {
    pub name: Option<String>,
    pub occupants: Option<Vec<Uuid>>,
}

impl NewHousehold {
    pub const FIELDS: &'static [&'static str] = &["name", "occupants"];

    pub fn columns(&self) -> ColumnValues {
        vec![("name", json!(self.name)), ("occupants", json!(self.occupants))]
    }
}

impl HouseholdPatch {
    pub fn columns(&self) -> ColumnValues {
        let mut out = ColumnValues::new();
        if let Some(name) = &self.name {
            out.push(("name", json!(name)));
        }
        if let Some(occupants) = &self.occupants {
            out.push(("occupants", json!(occupants)));
        }
        out
    }
}
