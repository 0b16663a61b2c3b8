//! Household planner: REST backend for households, their occupants and meal plans.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use db::{Database, PgDatabase};
pub use error::{AppError, ConfigError, ErrorKind};
pub use response::{build_response, construct_error_response, Envelope};
pub use routes::app;
pub use service::{HouseholdService, PlanService, UserService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
