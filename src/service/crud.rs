//! Run built statements through the facade and decode rows into entities.

use crate::db::Database;
use crate::error::AppError;
use crate::sql::{QueryBuf, Table};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) async fn fetch_all<T: DeserializeOwned>(db: &dyn Database, q: QueryBuf) -> Result<Vec<T>, AppError> {
    let rows = db.query(&q.sql, &q.params).await?;
    rows.into_iter().map(decode).collect()
}

/// First row of the result; no rows means the addressed record does not exist.
pub(crate) async fn fetch_one<T: DeserializeOwned>(
    db: &dyn Database,
    q: QueryBuf,
    what: &str,
) -> Result<T, AppError> {
    let rows = db.query(&q.sql, &q.params).await?;
    let row = rows.into_iter().next().ok_or_else(|| AppError::NotFound(what.to_string()))?;
    decode(row)
}

/// Row produced by an INSERT ... RETURNING; an empty result is a store fault.
pub(crate) async fn fetch_inserted<T: DeserializeOwned>(
    db: &dyn Database,
    table: &Table,
    q: QueryBuf,
) -> Result<T, AppError> {
    let rows = db.query(&q.sql, &q.params).await?;
    let row = rows.into_iter().next().ok_or(AppError::NothingInserted(table.name))?;
    decode(row)
}

fn decode<T: DeserializeOwned>(row: Value) -> Result<T, AppError> {
    Ok(serde_json::from_value(row)?)
}
