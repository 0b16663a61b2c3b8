//! Resource entities, their inputs and partial updates, and the tables they live in.

mod household;
mod plan;
mod user;

pub use household::*;
pub use plan::*;
pub use user::*;

use serde_json::Value;

/// Column/value pairs handed to the SQL builder, in column order.
pub type ColumnValues = Vec<(&'static str, Value)>;
