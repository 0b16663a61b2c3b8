//! Request validation: typed reads of JSON bodies and path ids, before any query runs.

use crate::error::AppError;
use crate::model::Meal;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Parse a path or query id.
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::Validation(format!("'{}' is not a valid id", raw)))
}

pub fn required<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

/// Fields of a JSON object body restricted to a known set of names.
pub struct Fields<'a> {
    body: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Reject non-objects and any field outside `allowed`.
    pub fn parse(body: &'a Value, allowed: &[&str]) -> Result<Self, AppError> {
        let Value::Object(body) = body else {
            return Err(AppError::Validation("body must be a JSON object".into()));
        };
        if let Some(unknown) = body.keys().find(|k| !allowed.contains(&k.as_str())) {
            return Err(AppError::Validation(format!("unknown field '{}'", unknown)));
        }
        Ok(Fields { body })
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn text(&self, field: &str) -> Result<Option<String>, AppError> {
        match self.body.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(AppError::Validation(format!("{} must be text", field))),
        }
    }

    /// Text that is not blank.
    pub fn name(&self, field: &str) -> Result<Option<String>, AppError> {
        match self.text(field)? {
            Some(s) if s.trim().is_empty() => Err(AppError::Validation(format!("{} must not be empty", field))),
            other => Ok(other),
        }
    }

    pub fn id(&self, field: &str) -> Result<Option<Uuid>, AppError> {
        match self.body.get(field) {
            None => Ok(None),
            Some(v) => id_value(field, v).map(Some),
        }
    }

    /// Present-but-null is `Some(None)`.
    pub fn nullable_id(&self, field: &str) -> Result<Option<Option<Uuid>>, AppError> {
        match self.body.get(field) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(v) => id_value(field, v).map(|id| Some(Some(id))),
        }
    }

    pub fn id_list(&self, field: &str) -> Result<Option<Vec<Uuid>>, AppError> {
        match self.body.get(field) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| id_value(field, v))
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(AppError::Validation(format!("{} must be a list of ids", field))),
        }
    }

    pub fn meal(&self, field: &str) -> Result<Option<Meal>, AppError> {
        match self.text(field)? {
            None => Ok(None),
            Some(s) => s
                .parse()
                .map(Some)
                .map_err(|e| AppError::Validation(format!("{}: {}", field, e))),
        }
    }

    /// RFC 3339 timestamp, normalised to UTC.
    pub fn timestamp(&self, field: &str) -> Result<Option<DateTime<Utc>>, AppError> {
        match self.text(field)? {
            None => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(s.trim())
                .map(|d| Some(d.with_timezone(&Utc)))
                .map_err(|_| AppError::Validation(format!("{} must be an RFC 3339 timestamp", field))),
        }
    }
}

fn id_value(field: &str, v: &Value) -> Result<Uuid, AppError> {
    v.as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| AppError::Validation(format!("{} must contain valid ids", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_validation<T: std::fmt::Debug>(r: Result<T, AppError>) -> bool {
        matches!(r, Err(AppError::Validation(_)))
    }

    #[test]
    fn rejects_non_objects_and_unknown_fields() {
        assert!(is_validation(Fields::parse(&json!(["name"]), &["name"]).map(|_| ())));
        assert!(is_validation(Fields::parse(&json!({ "id": "x" }), &["name"]).map(|_| ())));
        assert!(Fields::parse(&json!({ "name": "x" }), &["name"]).is_ok());
    }

    #[test]
    fn name_must_be_non_blank_text() {
        let body = json!({ "a": { "first": "Bad" }, "b": 10, "c": "  ", "d": "Home" });
        let fields = Fields::parse(&body, &["a", "b", "c", "d"]).unwrap();
        assert!(is_validation(fields.name("a")));
        assert!(is_validation(fields.name("b")));
        assert!(is_validation(fields.name("c")));
        assert_eq!(fields.name("d").unwrap(), Some("Home".to_string()));
        assert_eq!(fields.name("missing").unwrap(), None);
    }

    #[test]
    fn id_list_rejects_bare_strings() {
        let id = Uuid::new_v4();
        let body = json!({ "ok": [id], "bare": "Me", "junk": ["nope"] });
        let fields = Fields::parse(&body, &["ok", "bare", "junk"]).unwrap();
        assert_eq!(fields.id_list("ok").unwrap(), Some(vec![id]));
        assert!(is_validation(fields.id_list("bare")));
        assert!(is_validation(fields.id_list("junk")));
    }

    #[test]
    fn nullable_id_distinguishes_null_from_absent() {
        let body = json!({ "household": null });
        let fields = Fields::parse(&body, &["household"]).unwrap();
        assert_eq!(fields.nullable_id("household").unwrap(), Some(None));
        let body = json!({});
        let fields = Fields::parse(&body, &["household"]).unwrap();
        assert_eq!(fields.nullable_id("household").unwrap(), None);
    }

    #[test]
    fn meal_and_timestamp() {
        let body = json!({ "meal": "Lunch", "bad": "brunch", "date": "2024-05-01T18:30:00+01:00", "when": "tomorrow" });
        let fields = Fields::parse(&body, &["meal", "bad", "date", "when"]).unwrap();
        assert_eq!(fields.meal("meal").unwrap(), Some(Meal::Lunch));
        assert!(is_validation(fields.meal("bad")));
        assert_eq!(
            fields.timestamp("date").unwrap().map(|d| d.to_rfc3339()),
            Some("2024-05-01T17:30:00+00:00".to_string())
        );
        assert!(is_validation(fields.timestamp("when")));
    }

    #[test]
    fn path_ids() {
        assert!(parse_id(&Uuid::new_v4().to_string()).is_ok());
        assert!(is_validation(parse_id("5")));
    }
}
