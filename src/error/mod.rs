//! Error types for the Holocron data layer.
//!
//! `DataError` is the repository-facing taxonomy: constraint violations
//! and missing rows are distinguished from other database failures, and
//! everything surfaces unchanged to the caller. No retries, no recovery.

pub mod config;
pub mod data;

use thiserror::Error;

use crate::error::{config::ConfigError, data::DataError};

/// Aggregate error type for the crate's public surface.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Data layer error (constraint violation, missing row, query failure).
    #[error(transparent)]
    DataError(#[from] DataError),
    /// Database error outside the data layer (connection, migration).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
