use super::ColumnValues;
use crate::sql::{Column, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const PLANS: Table = Table {
    name: "plans",
    pk: "id",
    columns: &[
        Column { name: "id", pg_type: "uuid", select_as: Some("text") },
        Column { name: "date", pg_type: "timestamptz", select_as: None },
        Column { name: "organiser", pg_type: "uuid", select_as: Some("text") },
        Column { name: "attendees", pg_type: "uuid[]", select_as: Some("text[]") },
        Column { name: "meal", pg_type: "text", select_as: None },
    ],
    order_by: &["date", "id"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub fn as_str(self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMeal(pub String);

impl fmt::Display for UnknownMeal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not one of breakfast, lunch, dinner", self.0)
    }
}

/// Case-insensitive.
impl FromStr for Meal {
    type Err = UnknownMeal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Meal::Breakfast),
            "lunch" => Ok(Meal::Lunch),
            "dinner" => Ok(Meal::Dinner),
            _ => Err(UnknownMeal(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// User who set the plan up.
    pub organiser: Uuid,
    pub attendees: Vec<Uuid>,
    pub meal: Meal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlan {
    pub date: DateTime<Utc>,
    pub organiser: Uuid,
    pub attendees: Vec<Uuid>,
    pub meal: Meal,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanPatch {
    pub date: Option<DateTime<Utc>>,
    pub organiser: Option<Uuid>,
    pub attendees: Option<Vec<Uuid>>,
    pub meal: Option<Meal>,
}

impl NewPlan {
    pub const FIELDS: &'static [&'static str] = &["date", "organiser", "attendees", "meal"];

    pub fn columns(&self) -> ColumnValues {
        vec![
            ("date", json!(self.date.to_rfc3339())),
            ("organiser", json!(self.organiser)),
            ("attendees", json!(self.attendees)),
            ("meal", json!(self.meal)),
        ]
    }
}

impl PlanPatch {
    pub fn columns(&self) -> ColumnValues {
        let mut out = ColumnValues::new();
        if let Some(date) = &self.date {
            out.push(("date", json!(date.to_rfc3339())));
        }
        if let Some(organiser) = &self.organiser {
            out.push(("organiser", json!(organiser)));
        }
        if let Some(attendees) = &self.attendees {
            out.push(("attendees", json!(attendees)));
        }
        if let Some(meal) = &self.meal {
            out.push(("meal", json!(meal)));
        }
        out
    }
}
