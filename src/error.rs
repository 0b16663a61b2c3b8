//! Typed errors and their client/server classification.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("database bootstrap: {0}")]
    Bootstrap(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or missing input, detected before any query is issued.
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Anything the database facade reported.
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// An INSERT ... RETURNING that came back without the created row.
    #[error("insert into {0} returned no row")]
    NothingInserted(&'static str),
    /// A row came back but could not be read as the expected entity.
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// How a failure is reported to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    UserError,
    ServerError,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) => ErrorKind::UserError,
            AppError::Db(sqlx::Error::RowNotFound) => ErrorKind::UserError,
            AppError::Db(_) | AppError::NothingInserted(_) | AppError::Decode(_) => ErrorKind::ServerError,
        }
    }
}
