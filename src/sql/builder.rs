//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from static table descriptors.

use serde_json::Value;

/// One column of a resource table.
#[derive(Debug)]
pub struct Column {
    pub name: &'static str,
    /// PostgreSQL type used to cast bound parameters (e.g. "uuid[]").
    pub pg_type: &'static str,
    /// Cast applied when selecting so rows decode as plain JSON (uuid -> text).
    pub select_as: Option<&'static str>,
}

#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub pk: &'static str,
    pub columns: &'static [Column],
    pub order_by: &'static [&'static str],
}

impl Table {
    fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Quote identifier for PostgreSQL (safe: identifiers only come from `Table`).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf::default()
    }

    fn push_param(&mut self, v: Value) -> usize {
        self.params.push(v);
        self.params.len()
    }

    /// Push a parameter and return its placeholder cast to the column type.
    fn placeholder(&mut self, table: &Table, column: &str, v: Value) -> String {
        let n = self.push_param(v);
        match table.column(column) {
            Some(c) => format!("${}::{}", n, c.pg_type),
            None => format!("${}", n),
        }
    }
}

/// Row filter for list queries.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring match on a text column.
    Contains { column: &'static str, term: String },
    Equals { column: &'static str, value: Value },
}

fn select_column_list(table: &Table) -> String {
    table
        .columns
        .iter()
        .map(|c| {
            let q = quoted(c.name);
            match c.select_as {
                Some(cast) => format!("{}::{} AS {}", q, cast, q),
                None => q,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn order_clause(table: &Table) -> String {
    let cols: Vec<String> = table.order_by.iter().map(|c| quoted(c)).collect();
    format!(" ORDER BY {}", cols.join(", "))
}

/// Escape LIKE metacharacters so the term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// SELECT list with an optional filter, ordered by the table's ordering columns.
pub fn select_list(table: &Table, filter: Option<&Filter>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = match filter {
        None => String::new(),
        Some(Filter::Contains { column, term }) => {
            let n = q.push_param(Value::String(format!("%{}%", escape_like(term))));
            format!(" WHERE {} ILIKE ${}::text", quoted(column), n)
        }
        Some(Filter::Equals { column, value }) => {
            let ph = q.placeholder(table, column, value.clone());
            format!(" WHERE {} = {}", quoted(column), ph)
        }
    };
    q.sql = format!(
        "SELECT {} FROM {}{}{}",
        select_column_list(table),
        quoted(table.name),
        where_clause,
        order_clause(table)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &Table, id: Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.placeholder(table, table.pk, id);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk),
        ph
    );
    q
}

/// SELECT rows whose `column` is one of the elements of the bound array.
pub fn select_where_any(table: &Table, column: &str, values: Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(values);
    let elem_type = table.column(column).map(|c| c.pg_type).unwrap_or("text");
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ANY(${}::{}[]){}",
        select_column_list(table),
        quoted(table.name),
        quoted(column),
        n,
        elem_type,
        order_clause(table)
    );
    q
}

/// INSERT the given columns; the primary key is left to its default.
pub fn insert(table: &Table, values: &[(&'static str, Value)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (name, v) in values {
        if *name == table.pk || table.column(name).is_none() {
            continue;
        }
        placeholders.push(q.placeholder(table, name, v.clone()));
        cols.push(quoted(name));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(table)
    );
    q
}

/// UPDATE by id: SET only the given columns. Callers reject empty updates.
pub fn update(table: &Table, id: Value, values: &[(&'static str, Value)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (name, v) in values {
        if *name == table.pk || table.column(name).is_none() {
            continue;
        }
        let ph = q.placeholder(table, name, v.clone());
        sets.push(format!("{} = {}", quoted(name), ph));
    }
    let id_ph = q.placeholder(table, table.pk, id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {} RETURNING {}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk),
        id_ph,
        select_column_list(table)
    );
    q
}

/// DELETE by id, returning the removed row.
pub fn delete(table: &Table, id: Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.placeholder(table, table.pk, id);
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {} RETURNING {}",
        quoted(table.name),
        quoted(table.pk),
        ph,
        select_column_list(table)
    );
    q
}
