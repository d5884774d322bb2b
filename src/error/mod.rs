//! Error types for holonet.
//!
//! Repositories return raw [`sea_orm::DbErr`]s; services translate the storage errors
//! callers are expected to handle (uniqueness and foreign key violations) into the domain
//! specific errors below and aggregate everything into [`Error`].

pub mod config;
pub mod favorite;
pub mod retry;
pub mod user;

use thiserror::Error;

use crate::error::{config::ConfigError, favorite::FavoriteError, user::UserError};

/// Main error type for holonet.
///
/// Uses `thiserror`'s `#[from]` attribute to enable automatic conversion from the domain
/// errors and [`sea_orm::DbErr`] via the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// User account error (duplicate email).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Favorite error (unknown user or target, duplicate favorite).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Internal error indicating a bug in holonet's code or a schema constraint that
    /// was not enforced by the database.
    #[error("Internal error with holonet's code, please open an issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
