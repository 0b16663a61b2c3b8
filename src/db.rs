//! Database access facade: the single seam through which every statement runs.

use crate::sql::PgBindValue;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

/// Executes SQL text with positional parameters and returns rows as JSON objects.
/// Errors are passed through untranslated.
#[async_trait]
pub trait Database: Send + Sync {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Value>, sqlx::Error>;
}

/// PostgreSQL-backed facade over an explicitly constructed pool.
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn new(pool: PgPool) -> Self {
        PgDatabase { pool }
    }
}

#[async_trait]
impl Database for PgDatabase {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Value>, sqlx::Error> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query(sql);
        for p in params {
            query = query.bind(PgBindValue::from_json(p));
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}

fn row_to_json(row: &sqlx::postgres::PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

// Selected columns are cast so only text, text[] and timestamptz come back.
fn cell_to_value(row: &sqlx::postgres::PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(items)) = row.try_get::<Option<Vec<String>>, _>(name) {
        return Value::Array(items.into_iter().map(Value::String).collect());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    Value::Null
}

/// Test double: records every call and answers from a script.
pub mod stub {
    use super::Database;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// One recorded facade call.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Call {
        pub sql: String,
        pub params: Vec<Value>,
    }

    type Reply = Box<dyn Fn(&str, &[Value]) -> Result<Vec<Value>, sqlx::Error> + Send + Sync>;

    /// Replies are consumed in order; once exhausted every call returns no rows.
    #[derive(Default)]
    pub struct StubDatabase {
        replies: Mutex<VecDeque<Reply>>,
        calls: Mutex<Vec<Call>>,
    }

    impl StubDatabase {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn rows(self, rows: Vec<Value>) -> Self {
            self.reply(move |_, _| Ok(rows.clone()))
        }

        pub fn fails(self, make: fn() -> sqlx::Error) -> Self {
            self.reply(move |_, _| Err(make()))
        }

        /// Queue a reply computed from the statement and its parameters.
        pub fn reply<F>(self, f: F) -> Self
        where
            F: Fn(&str, &[Value]) -> Result<Vec<Value>, sqlx::Error> + Send + Sync + 'static,
        {
            if let Ok(mut replies) = self.replies.lock() {
                replies.push_back(Box::new(f));
            }
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl Database for StubDatabase {
        async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Value>, sqlx::Error> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(Call {
                    sql: sql.to_string(),
                    params: params.to_vec(),
                });
            }
            let reply = self.replies.lock().ok().and_then(|mut r| r.pop_front());
            match reply {
                Some(f) => f(sql, params),
                None => Ok(Vec::new()),
            }
        }
    }
}
